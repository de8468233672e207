//! Scalar classification predicates shared by the parser and skeleton tokenizers.

/// ASCII letters. Tag openings require one of these after `<`.
pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_alpha_or_slash(ch: char) -> bool {
    is_alpha(ch) || ch == '/'
}

/// Unicode `Pattern_White_Space`.
pub fn is_white_space(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Unicode `Pattern_Syntax`.
pub fn is_pattern_syntax(ch: char) -> bool {
    matches!(
        ch,
        '\u{0021}'..='\u{002F}'
            | '\u{003A}'..='\u{0040}'
            | '\u{005B}'..='\u{005E}'
            | '\u{0060}'
            | '\u{007B}'..='\u{007E}'
            | '\u{00A1}'..='\u{00A7}'
            | '\u{00A9}'
            | '\u{00AB}'
            | '\u{00AC}'
            | '\u{00AE}'
            | '\u{00B0}'
            | '\u{00B1}'
            | '\u{00B6}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{00D7}'
            | '\u{00F7}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{203E}'
            | '\u{2041}'..='\u{2053}'
            | '\u{2055}'..='\u{205E}'
            | '\u{2190}'..='\u{245F}'
            | '\u{2500}'..='\u{2775}'
            | '\u{2794}'..='\u{2BFF}'
            | '\u{2E00}'..='\u{2E7F}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3020}'
            | '\u{3030}'
            | '\u{FD3E}'
            | '\u{FD3F}'
            | '\u{FE45}'
            | '\u{FE46}'
    )
}

/// Argument names, argument types, and selectors are runs of scalars that are
/// neither `White_Space` nor `Pattern_Syntax`.
pub fn is_identifier_char(ch: char) -> bool {
    !ch.is_whitespace() && !is_pattern_syntax(ch)
}

/// Scalars allowed after the first letter of a tag name: the XML
/// `NameChar` production minus `:`.
pub fn is_potential_element_name_char(ch: char) -> bool {
    matches!(
        ch,
        '-' | '.'
            | '0'..='9'
            | '_'
            | 'a'..='z'
            | 'A'..='Z'
            | '\u{B7}'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{203F}'..='\u{2040}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_syntax_covers_message_delimiters() {
        for ch in ['{', '}', ',', '#', '<', '>', '\'', '=', ':', '-', '/'] {
            assert!(is_pattern_syntax(ch), "{ch:?} should be pattern syntax");
        }
        assert!(!is_pattern_syntax('_'));
        assert!(!is_pattern_syntax('a'));
        assert!(!is_pattern_syntax('é'));
    }

    #[test]
    fn test_identifier_chars() {
        assert!(is_identifier_char('x'));
        assert!(is_identifier_char('0'));
        assert!(is_identifier_char('_'));
        assert!(is_identifier_char('名'));
        assert!(!is_identifier_char(' '));
        assert!(!is_identifier_char('\u{00A0}'));
        assert!(!is_identifier_char('}'));
    }

    #[test]
    fn test_white_space_is_pattern_white_space() {
        assert!(is_white_space('\n'));
        assert!(is_white_space('\u{200E}'));
        assert!(!is_white_space('\u{00A0}'));
    }

    #[test]
    fn test_element_name_chars() {
        assert!(is_potential_element_name_char('-'));
        assert!(is_potential_element_name_char('ü'));
        assert!(is_potential_element_name_char('\u{1F600}'));
        assert!(!is_potential_element_name_char('>'));
        assert!(!is_potential_element_name_char('/'));
        assert!(!is_potential_element_name_char(' '));
    }
}
