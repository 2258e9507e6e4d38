//! Percent-encoding for search IDs interpolated into job URLs.
//!
//! SIDs are server-assigned, but a user can also type one as a literal
//! reference, so a `/` or `?` must not change which resource is addressed.
//!
//! ```
//! use splunk_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
//! assert_eq!(encode_path_segment("../admin"), "..%2Fadmin");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a single path segment (RFC 3986 §3.3 plus
/// characters Splunk treats specially).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode `segment` for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sid_shapes_unchanged() {
        assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
        assert_eq!(
            encode_path_segment("admin__admin__search__RMD5abc_1700000000.7"),
            "admin__admin__search__RMD5abc_1700000000.7"
        );
        assert_eq!(
            encode_path_segment("scheduler__nobody_c3BsdW5r_1700000000.1"),
            "scheduler__nobody_c3BsdW5r_1700000000.1"
        );
    }

    #[test]
    fn test_path_and_query_characters_encoded() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("sid?count=5"), "sid%3Fcount=5");
        assert_eq!(encode_path_segment("sid#frag"), "sid%23frag");
        assert_eq!(encode_path_segment("with space"), "with%20space");
    }

    #[test]
    fn test_percent_encoded_once() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("a%2Fb"), "a%252Fb");
    }

    #[test]
    fn test_non_ascii_encoded_as_utf8() {
        assert_eq!(encode_path_segment("\u{00e9}"), "%C3%A9");
    }
}
