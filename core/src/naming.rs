#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derives lowercase, underscore-delimited identifiers from human-authored
//! titles (e.g. schema example file names such as `WaypointTrait`).

use regex::Regex;
use std::sync::OnceLock;

fn non_word_re() -> &'static Regex {
    static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();
    NON_WORD_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid regex"))
}

fn upper_run_re() -> &'static Regex {
    static UPPER_RUN_RE: OnceLock<Regex> = OnceLock::new();
    UPPER_RUN_RE.get_or_init(|| Regex::new(r"[A-Z]+").expect("Invalid regex"))
}

fn acronym_tail_re() -> &'static Regex {
    static ACRONYM_TAIL_RE: OnceLock<Regex> = OnceLock::new();
    ACRONYM_TAIL_RE.get_or_init(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("Invalid regex"))
}

/// Converts a title (TitleCase, camelCase, with arbitrary punctuation) to an identifier.
///
/// The steps run in a fixed order:
/// 1. Delete every run of characters outside `[A-Za-z0-9_]` (no separator is left behind).
/// 2. Prefix every run of uppercase letters with `_`. A run that ends in the
///    first letter of a capitalized word is split before that letter.
/// 3. Lowercase.
/// 4. Strip leading underscores.
///
/// Runs of capitals collapse under a single underscore, so `HTTPServer`
/// becomes `http_server` (not `h_t_t_p_server`). A title without any word
/// characters yields an empty string; see [`is_degenerate`].
pub fn to_identifier(title: &str) -> String {
    let stripped = non_word_re().replace_all(title, "");
    let marked = upper_run_re().replace_all(&stripped, "_$0");
    let split = acronym_tail_re().replace_all(&marked, "${1}_${2}");
    split.to_lowercase().trim_start_matches('_').to_string()
}

/// Returns true when an identifier is not of the form `[a-z][a-z0-9_]*`.
///
/// That covers empty identifiers and ones starting with a digit (`9Lives`
/// gives `9_lives`). Generation does not reject these; callers use this to warn.
pub fn is_degenerate(identifier: &str) -> bool {
    !identifier.starts_with(|c: char| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(to_identifier("Contract"), "contract");
        assert_eq!(to_identifier("WaypointTrait"), "waypoint_trait");
        assert_eq!(to_identifier("ScannedWaypoint"), "scanned_waypoint");
    }

    #[test]
    fn test_lowercase_passthrough() {
        assert_eq!(to_identifier("market"), "market");
        assert_eq!(to_identifier("ship_nav"), "ship_nav");
    }

    #[test]
    fn test_acronym_runs_collapse() {
        assert_eq!(to_identifier("HTTPServer"), "http_server");
        assert_eq!(to_identifier("getHTTP"), "get_http");
        assert_eq!(to_identifier("ABCd"), "ab_cd");
        assert_eq!(to_identifier("XMLHTTPRequest"), "xmlhttp_request");
        assert_eq!(to_identifier("ShipJSONPayload"), "ship_json_payload");
    }

    #[test]
    fn test_punctuation_is_removed_without_separator() {
        // Stripping happens before case marking, so only the capitals get underscores.
        assert_eq!(to_identifier("User-Profile.V2"), "user_profile_v2");
        assert_eq!(to_identifier("ship nav"), "shipnav");
        assert_eq!(to_identifier("jump-gate"), "jumpgate");
    }

    #[test]
    fn test_existing_underscores_are_kept() {
        assert_eq!(to_identifier("Foo_Bar"), "foo__bar");
        assert_eq!(to_identifier("__Leading"), "leading");
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(to_identifier("Café"), "caf");
        assert_eq!(to_identifier("Ünïcode"), "ncode");
    }

    #[test]
    fn test_degenerate_titles() {
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("-- !"), "");
        assert!(is_degenerate(&to_identifier("...")));
        assert!(!is_degenerate(&to_identifier("Ship")));
    }

    #[test]
    fn test_leading_digit_is_degenerate() {
        let id = to_identifier("9Lives");
        assert_eq!(id, "9_lives");
        assert!(is_degenerate(&id));
        assert!(!is_degenerate("lives9"));
        assert!(!is_degenerate("a"));
    }

    #[test]
    fn test_idempotent_and_lowercase() {
        let samples = [
            "Contract",
            "HTTPServer",
            "XMLHTTPRequest",
            "9Lives",
            "User-Profile.V2",
            "already_snake",
            "Foo_Bar",
            "A",
            "ABC",
            "x1Y2z3",
            "  spaced Out  ",
            "",
        ];
        for s in samples {
            let once = to_identifier(s);
            assert_eq!(to_identifier(&once), once, "not idempotent for {s:?}");
            assert!(
                !once.chars().any(|c| c.is_uppercase()),
                "uppercase left in {once:?}"
            );
            assert!(!once.starts_with('_'), "leading underscore in {once:?}");
        }
    }
}
