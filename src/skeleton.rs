//! Skeleton sub-grammars
//!
//! A skeleton is the compact, locale-independent style that follows `::` in a
//! `number`, `date`, or `time` argument. Number skeletons are tokenized into
//! stems and options, date-time skeletons are CLDR field-letter patterns. Both
//! can be interpreted into an options record mirroring `Intl.NumberFormat` and
//! `Intl.DateTimeFormat` options.

pub mod datetime;
pub mod error;
pub mod number;

pub use datetime::DateTimeFormatOptions;
pub use error::SkeletonError;
pub use number::{NumberFormatOptions, NumberSkeletonToken};
