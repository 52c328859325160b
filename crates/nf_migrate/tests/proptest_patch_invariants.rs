//! Property-based invariant tests for the escape codec and line patcher:
//!
//! 1. Encoding any Unicode scalar and scanning the result decodes back to
//!    the same value, for both the 4-digit and 8-digit forms.
//! 2. Lines containing no escapes pass through the patcher byte-for-byte.
//! 3. A rewritten escape decodes to exactly the table's target codepoint,
//!    and every byte outside the span is preserved.
//! 4. Exclusion-set codepoints are never rewritten.
//! 5. Patching is idempotent: a second pass changes nothing.

use indexmap::IndexMap;
use proptest::prelude::*;

use nf_migrate::config::MigrationConfig;
use nf_migrate::escape::{EscapeScanner, encode_codepoint};
use nf_migrate::patch::patch_icons_source;
use nf_migrate::stylesheet::parse_stylesheet;
use nf_migrate::translate::{TranslationTable, TranslationTarget};
use nf_migrate::validate::ValidationIndex;

// ── Strategies ────────────────────────────────────────────────────────────

/// Codepoints in the default old-family range (F500–FD46).
fn old_range_codepoint() -> impl Strategy<Value = u32> {
    0xF500u32..=0xFD46
}

/// Replacement codepoints above the 16-bit boundary, all valid scalars.
fn supplementary_codepoint() -> impl Strategy<Value = u32> {
    0xF0000u32..=0xFFFFD
}

/// Line text with no backslashes, so it can never contain an escape.
fn escape_free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \t:,{}\"/._-]{0,40}"
}

/// Suffix text that cannot extend a preceding 4-digit escape: it never
/// starts with a hex digit.
fn non_hex_leading_text() -> impl Strategy<Value = String> {
    "[ \t:,{}\"/][a-zA-Z0-9 \t:,{}\"/._-]{0,30}|"
}

fn table_of(old: u32, new: u32) -> TranslationTable {
    let mut table = IndexMap::new();
    table.insert(
        old,
        TranslationTarget {
            codepoint: new,
            name: "icon".to_string(),
        },
    );
    table
}

fn empty_index() -> ValidationIndex {
    ValidationIndex::from_stylesheet(&parse_stylesheet(""))
}

proptest! {
    #[test]
    fn encode_then_scan_round_trips(codepoint in any::<char>().prop_map(u32::from)) {
        let encoded = encode_codepoint(codepoint);
        prop_assert!(encoded.len() == 6 || encoded.len() == 10);

        let matches = EscapeScanner::new().scan(&encoded);
        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].codepoint, codepoint);
        prop_assert_eq!(matches[0].text.as_str(), encoded.as_str());
    }

    #[test]
    fn escape_free_lines_pass_through_unchanged(lines in proptest::collection::vec(escape_free_text(), 0..8)) {
        let content = lines.join("\n");
        let config = MigrationConfig::default();
        let outcome = patch_icons_source(&content, &table_of(0xF531, 0xF0065), &empty_index(), &config);

        prop_assert_eq!(outcome.content, content);
        prop_assert!(outcome.migrated.is_empty());
    }

    #[test]
    fn rewrite_decodes_to_table_target_and_preserves_surroundings(
        old in old_range_codepoint(),
        new in supplementary_codepoint(),
        prefix in escape_free_text(),
        suffix in non_hex_leading_text(),
    ) {
        let config = MigrationConfig::default();
        let line = format!("{prefix}{}{suffix}", encode_codepoint(old));
        let outcome = patch_icons_source(&line, &table_of(old, new), &empty_index(), &config);

        let expected = format!("{prefix}{}{suffix}", encode_codepoint(new));
        prop_assert_eq!(&outcome.content, &expected);

        let rescanned = EscapeScanner::new().scan(&outcome.content);
        prop_assert_eq!(rescanned.len(), 1);
        prop_assert_eq!(rescanned[0].codepoint, new);
    }

    #[test]
    fn exclusion_set_codepoints_are_never_rewritten(
        literal in proptest::sample::select("FZhJD".chars().collect::<Vec<char>>()),
        prefix in escape_free_text(),
    ) {
        let config = MigrationConfig::default();
        let line = format!("{prefix}{}", encode_codepoint(u32::from(literal)));
        // A hostile table entry for the literal must not matter.
        let table = table_of(u32::from(literal), 0xF0065);
        let outcome = patch_icons_source(&line, &table, &empty_index(), &config);

        prop_assert_eq!(outcome.content, line);
        prop_assert!(outcome.migrated.is_empty());
        prop_assert_eq!(outcome.skipped.len(), 1);
    }

    #[test]
    fn patching_is_idempotent(
        old in old_range_codepoint(),
        new in supplementary_codepoint(),
        prefix in escape_free_text(),
    ) {
        let config = MigrationConfig::default();
        let content = format!("{prefix}{}", encode_codepoint(old));
        let table = table_of(old, new);

        let first = patch_icons_source(&content, &table, &empty_index(), &config);
        let second = patch_icons_source(&first.content, &table, &empty_index(), &config);

        prop_assert_eq!(second.content, first.content);
        prop_assert!(second.migrated.is_empty());
    }
}
