//! Centralized parsing for the `YYMMDD-description` directory convention.
//!
//! Post directories carry their publication date as a six-digit prefix:
//! `251013-some-description` is a post dated 2025-10-13. Directories without
//! the prefix (fixtures, config holders, drafts) are invisible to the build.
//!
//! The two-digit year is mapped to the 2000s unconditionally. Content dated
//! before 2000 or after 2099 is out of scope for this convention.

/// Whether a directory name follows the `YYMMDD-description` convention:
/// exactly six ASCII digits followed by a hyphen.
///
/// - `"251013-some-description"` → true
/// - `"251013-"` → true (empty description still qualifies)
/// - `"25101-short"` → false
/// - `"fixtures"` → false
pub fn is_post_dirname(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 7 && bytes[..6].iter().all(u8::is_ascii_digit) && bytes[6] == b'-'
}

/// Derive an ISO `YYYY-MM-DD` date from a post directory name.
///
/// Reads the leading `YYMMDD` digits and maps `YY` to `20YY`. Returns an
/// empty string when the name does not start with six digits. Month and day
/// components are passed through unchecked; the convention trusts the author.
pub fn derive_date(folder_name: &str) -> String {
    let bytes = folder_name.as_bytes();
    if bytes.len() < 6 || !bytes[..6].iter().all(u8::is_ascii_digit) {
        return String::new();
    }
    format!(
        "20{}-{}-{}",
        &folder_name[..2],
        &folder_name[2..4],
        &folder_name[4..6]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dated_dirname_qualifies() {
        assert!(is_post_dirname("251013-some-description"));
    }

    #[test]
    fn empty_description_qualifies() {
        assert!(is_post_dirname("251013-"));
    }

    #[test]
    fn short_prefix_does_not_qualify() {
        assert!(!is_post_dirname("25101-short"));
    }

    #[test]
    fn seven_digits_do_not_qualify() {
        assert!(!is_post_dirname("2510133-extra"));
    }

    #[test]
    fn missing_hyphen_does_not_qualify() {
        assert!(!is_post_dirname("251013"));
    }

    #[test]
    fn plain_name_does_not_qualify() {
        assert!(!is_post_dirname("fixtures"));
        assert!(!is_post_dirname("expected-full"));
    }

    #[test]
    fn date_from_dated_dirname() {
        assert_eq!(derive_date("251013-some-description"), "2025-10-13");
    }

    #[test]
    fn date_century_is_hardcoded() {
        assert_eq!(derive_date("990101-y2k-eve"), "2099-01-01");
        assert_eq!(derive_date("000101-millennium"), "2000-01-01");
    }

    #[test]
    fn date_components_pass_through_unchecked() {
        // 13th month and 99th day are not validated
        assert_eq!(derive_date("251399-odd"), "2025-13-99");
    }

    #[test]
    fn date_empty_for_undated_name() {
        assert_eq!(derive_date("fixtures"), "");
        assert_eq!(derive_date("25101-short"), "");
        assert_eq!(derive_date(""), "");
    }

    #[test]
    fn date_without_hyphen_still_derives() {
        // Date derivation only needs the six digits; the hyphen rule belongs
        // to directory qualification.
        assert_eq!(derive_date("251013"), "2025-10-13");
    }
}
