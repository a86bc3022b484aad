//! Entity and character reference decoding.
//!
//! Shared by the XML input loader and the rich-text transcoder so both turn
//! `&amp;`, `&#39;` and friends into the same characters.

use quick_xml::escape::resolve_html5_entity;

/// Decode an entity reference name (without `&` and `;`) to its text.
///
/// Named references resolve against the full HTML5 table. Numeric character
/// references that name NUL, a surrogate or a value past `U+10FFFF` become
/// `U+FFFD`. Unknown names and malformed numbers are returned verbatim as
/// `&name;`.
#[must_use]
pub fn decode_entity(entity: &str) -> String {
    let decoded = match entity.strip_prefix('#') {
        Some(number) => match number.strip_prefix(['x', 'X']) {
            Some(hex) => decode_char_ref(hex, 16),
            None => decode_char_ref(number, 10),
        }
        .map(String::from),
        None => resolve_html5_entity(entity).map(str::to_owned),
    };
    decoded.unwrap_or_else(|| format!("&{entity};"))
}

fn decode_char_ref(digits: &str, radix: u32) -> Option<char> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let code = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);
    match code {
        0 => Some(char::REPLACEMENT_CHARACTER),
        _ => Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_entities() {
        assert_eq!(decode_entity("lt"), "<");
        assert_eq!(decode_entity("gt"), ">");
        assert_eq!(decode_entity("amp"), "&");
        assert_eq!(decode_entity("apos"), "'");
        assert_eq!(decode_entity("quot"), "\"");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(decode_entity("#39"), "'");
        assert_eq!(decode_entity("#x41"), "A");
        assert_eq!(decode_entity("#X2014"), "\u{2014}");
    }

    #[test]
    fn test_malformed_numeric_reference_kept() {
        assert_eq!(decode_entity("#xZZ"), "&#xZZ;");
        assert_eq!(decode_entity("#"), "&#;");
        assert_eq!(decode_entity("#12a"), "&#12a;");
    }

    #[test]
    fn test_unrepresentable_code_points_replaced() {
        assert_eq!(decode_entity("#0"), "\u{fffd}");
        assert_eq!(decode_entity("#x0"), "\u{fffd}");
        assert_eq!(decode_entity("#xD800"), "\u{fffd}");
        assert_eq!(decode_entity("#1114112"), "\u{fffd}");
        assert_eq!(decode_entity("#99999999999"), "\u{fffd}");
    }

    #[test]
    fn test_html_named_entities() {
        assert_eq!(decode_entity("nbsp"), "\u{a0}");
        assert_eq!(decode_entity("mdash"), "\u{2014}");
        assert_eq!(decode_entity("ndash"), "\u{2013}");
        assert_eq!(decode_entity("rsquo"), "\u{2019}");
        assert_eq!(decode_entity("copy"), "\u{a9}");
        assert_eq!(decode_entity("rarr"), "\u{2192}");
    }

    #[test]
    fn test_unknown_entity_kept() {
        assert_eq!(decode_entity("notanentity"), "&notanentity;");
        assert_eq!(decode_entity(" Jerry"), "& Jerry;");
    }
}
