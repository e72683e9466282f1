use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape set for listed keys: everything except ASCII alphanumerics and the
/// URL-unreserved `_ . - ~` is percent-encoded. Covers space, `%`, `&`, `/`,
/// `?`, `#`, and all non-ASCII bytes, and round-trips through standard
/// URL-decoding.
const KEY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Percent-encode a key for the `?encode` listing mode.
pub fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_unchanged() {
        assert_eq!(encode_key("simple_key-1.0~x"), "simple_key-1.0~x");
    }

    #[test]
    fn test_reserved_characters_escaped() {
        assert_eq!(encode_key("a b"), "a%20b");
        assert_eq!(encode_key("50%"), "50%25");
        assert_eq!(encode_key("a&b"), "a%26b");
        assert_eq!(encode_key("a/b"), "a%2Fb");
        assert_eq!(encode_key("a?b"), "a%3Fb");
        assert_eq!(encode_key("a#b"), "a%23b");
        assert_eq!(encode_key("a\nb"), "a%0Ab");
    }

    #[test]
    fn test_non_ascii_escaped_as_utf8_bytes() {
        assert_eq!(encode_key("k\u{e9}"), "k%C3%A9");
    }

    #[test]
    fn test_encoding_round_trips_through_url_decoding() {
        let original = "spaced key&with/reserved?chars#and\u{e9}";
        let encoded = encode_key(original);
        let decoded =
            percent_encoding::percent_decode_str(&encoded).decode_utf8().unwrap();
        assert_eq!(decoded, original);
    }
}
