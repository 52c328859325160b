use regex_lite::Regex;

use crate::config::MigrationConfig;
use crate::escape::{EscapeScanner, encode_codepoint};
use crate::translate::{TranslationTable, TranslationTarget};
use crate::validate::ValidationIndex;

/// Category of one scanned codepoint occurrence. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Meaningful as a plain character in this file, never rewritten.
    AsciiLiteral,
    /// In the old-family range with a translation entry; rewritten in place.
    Migrated(TranslationTarget),
    /// In the old-family range but absent from the table. Needs a human.
    UnmappedInRange,
    /// Outside the range and present in the new generation. Informational.
    Validated(Option<(String, String)>),
    /// Outside the range and unknown to the new generation. Needs a human.
    UnmappedOutOfRange,
}

#[must_use]
pub fn classify(
    codepoint: u32,
    table: &TranslationTable,
    index: &ValidationIndex,
    config: &MigrationConfig,
) -> Classification {
    if config.ascii_literals.contains(&codepoint) {
        return Classification::AsciiLiteral;
    }
    if config.old_range.contains(&codepoint) {
        return match table.get(&codepoint) {
            Some(target) => Classification::Migrated(target.clone()),
            None => Classification::UnmappedInRange,
        };
    }
    if index.contains(codepoint) {
        Classification::Validated(index.owner(codepoint).cloned())
    } else {
        Classification::UnmappedOutOfRange
    }
}

#[derive(Debug, Clone)]
pub struct MigratedIcon {
    pub line: usize,
    pub display_name: String,
    pub old: u32,
    pub new: u32,
    pub action: String,
}

#[derive(Debug, Clone)]
pub struct SkippedIcon {
    pub line: usize,
    pub display_name: String,
    pub codepoint: u32,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct UnmappedIcon {
    pub line: usize,
    pub display_name: String,
    pub codepoint: u32,
    pub issue: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedIcon {
    pub line: usize,
    pub display_name: String,
    pub codepoint: u32,
    pub status: String,
}

/// Result of patching the primary target: rewritten content plus every
/// occurrence, bucketed for the report.
#[derive(Debug, Default)]
pub struct PatchOutcome {
    pub content: String,
    pub migrated: Vec<MigratedIcon>,
    pub skipped: Vec<SkippedIcon>,
    pub unmapped: Vec<UnmappedIcon>,
    pub validated: Vec<ValidatedIcon>,
}

/// Display name from a trailing `//` comment, for report rows only. A
/// `(Not supported …)` suffix is stripped; absent comments fall back to
/// `unknown`.
fn display_name_pattern() -> Regex {
    Regex::new(r"//\s*(.+?)(?:\s*\(Not supported.*\))?\s*$").expect("comment name regex")
}

/// Rewrite every migratable escape in `content`, preserving all other
/// bytes. Replacement spans are adjusted by a running offset so several
/// rewrites on one line stay positioned.
#[must_use]
pub fn patch_icons_source(
    content: &str,
    table: &TranslationTable,
    index: &ValidationIndex,
    config: &MigrationConfig,
) -> PatchOutcome {
    let scanner = EscapeScanner::new();
    let name_pattern = display_name_pattern();

    let mut outcome = PatchOutcome::default();
    let mut new_lines = Vec::new();

    for (line_index, line) in content.split('\n').enumerate() {
        let line_number = line_index + 1;
        let occurrences = scanner.scan(line);
        if occurrences.is_empty() {
            new_lines.push(line.to_string());
            continue;
        }

        let display_name = name_pattern
            .captures(line)
            .map_or_else(|| "unknown".to_string(), |caps| caps[1].trim().to_string());

        let mut patched = line.to_string();
        let mut offset: isize = 0;

        for occurrence in occurrences {
            match classify(occurrence.codepoint, table, index, config) {
                Classification::AsciiLiteral => outcome.skipped.push(SkippedIcon {
                    line: line_number,
                    display_name: display_name.clone(),
                    codepoint: occurrence.codepoint,
                    reason: "ASCII literal".to_string(),
                }),
                Classification::Migrated(target) => {
                    let replacement = encode_codepoint(target.codepoint);
                    // Earlier rewrites on this line shift later spans; the
                    // adjusted start never goes negative because offsets
                    // accumulate strictly left to right.
                    let start = (occurrence.start as isize + offset) as usize;
                    let end = (occurrence.end as isize + offset) as usize;
                    patched.replace_range(start..end, &replacement);
                    offset += replacement.len() as isize - occurrence.text.len() as isize;
                    outcome.migrated.push(MigratedIcon {
                        line: line_number,
                        display_name: display_name.clone(),
                        old: occurrence.codepoint,
                        new: target.codepoint,
                        action: format!("migrated ({}: {})", config.old_family, target.name),
                    });
                }
                Classification::UnmappedInRange => outcome.unmapped.push(UnmappedIcon {
                    line: line_number,
                    display_name: display_name.clone(),
                    codepoint: occurrence.codepoint,
                    issue: format!("in {} range but no mapping found", config.old_family),
                }),
                Classification::Validated(owner) => {
                    let (family, name) = owner
                        .unwrap_or_else(|| ("?".to_string(), "?".to_string()));
                    outcome.validated.push(ValidatedIcon {
                        line: line_number,
                        display_name: display_name.clone(),
                        codepoint: occurrence.codepoint,
                        status: format!(
                            "confirmed in {} ({family}-{name})",
                            config.new_label
                        ),
                    });
                }
                Classification::UnmappedOutOfRange => outcome.unmapped.push(UnmappedIcon {
                    line: line_number,
                    display_name: display_name.clone(),
                    codepoint: occurrence.codepoint,
                    issue: format!("not found in {} stylesheet", config.new_label),
                }),
            }
        }

        new_lines.push(patched);
    }

    outcome.content = new_lines.join("\n");
    outcome
}

/// Outcome of the single fixed substitution in the secondary target.
/// "No change possible" is a labeled result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Applied { old: u32, new: u32, name: String },
    EscapeNotFound { old: u32 },
    NoMapping { old: u32 },
}

/// Replace every quoted occurrence of the configured comparison codepoint's
/// escape with its translated form. Deliberately narrow: no other
/// codepoints in this file are scanned.
#[must_use]
pub fn patch_comparison_source(
    content: &str,
    table: &TranslationTable,
    config: &MigrationConfig,
) -> (String, ComparisonOutcome) {
    let old = config.comparison_codepoint;
    let Some(target) = table.get(&old) else {
        return (content.to_string(), ComparisonOutcome::NoMapping { old });
    };

    let old_literal = format!("\"{}\"", encode_codepoint(old));
    if !content.contains(&old_literal) {
        return (content.to_string(), ComparisonOutcome::EscapeNotFound { old });
    }

    let new_literal = format!("\"{}\"", encode_codepoint(target.codepoint));
    (
        content.replace(&old_literal, &new_literal),
        ComparisonOutcome::Applied {
            old,
            new: target.codepoint,
            name: target.name.clone(),
        },
    )
}
