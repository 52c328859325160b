use crate::config::MigrationConfig;
use crate::patch::{ComparisonOutcome, PatchOutcome};
use crate::translate::TranslationOutcome;
use crate::util::now_utc_iso;

/// Everything the Markdown report draws on. Borrowed from the pipeline;
/// the report never mutates migration state.
#[derive(Debug)]
pub struct ReportInputs<'a> {
    pub config: &'a MigrationConfig,
    pub translation: &'a TranslationOutcome,
    pub patch: &'a PatchOutcome,
    pub comparison: &'a ComparisonOutcome,
    pub old_digest: &'a str,
    pub new_digest: &'a str,
    pub dry_run: bool,
}

fn hex(codepoint: u32) -> String {
    format!("U+{codepoint:04X}")
}

#[must_use]
pub fn render_report(inputs: &ReportInputs<'_>) -> String {
    let config = inputs.config;
    let mut out = String::new();

    out.push_str(&format!(
        "# Nerd Font {} → {} Migration Report\n\n",
        config.old_label, config.new_label
    ));
    out.push_str(&format!(
        "**Mode**: {}\n\n",
        if inputs.dry_run {
            "DRY RUN (no files modified)"
        } else {
            "APPLIED"
        }
    ));
    out.push_str(&format!("**Generated**: {}\n\n", now_utc_iso()));

    out.push_str("## Reference Inputs\n\n");
    out.push_str(&format!(
        "- {} stylesheet sha256: `{}`\n",
        config.old_label, inputs.old_digest
    ));
    out.push_str(&format!(
        "- {} stylesheet sha256: `{}`\n\n",
        config.new_label, inputs.new_digest
    ));

    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "- Translation table entries: {}\n",
        inputs.translation.table.len()
    ));
    out.push_str(&format!(
        "- Unmapped {} icon names: {}\n",
        config.old_family,
        inputs.translation.unmapped.len()
    ));
    out.push_str(&format!(
        "- Ambiguous {} mappings: {}\n",
        config.old_family,
        inputs.translation.ambiguities.len()
    ));
    out.push_str(&format!(
        "- Icons migrated in {}: {}\n",
        config.icons_map_path.display(),
        inputs.patch.migrated.len()
    ));
    out.push_str(&format!(
        "- Icons skipped (ASCII literals): {}\n",
        inputs.patch.skipped.len()
    ));
    out.push_str(&format!(
        "- Icons unmapped/missing: {}\n",
        inputs.patch.unmapped.len()
    ));
    out.push_str(&format!(
        "- Icons validated against {}: {}\n",
        config.new_label,
        inputs.patch.validated.len()
    ));
    let comparison_changes = match inputs.comparison {
        ComparisonOutcome::Applied { .. } => 1,
        _ => 0,
    };
    out.push_str(&format!(
        "- {} changes: {}\n\n",
        config.formatter_path.display(),
        comparison_changes
    ));

    out.push_str("## Migrated Icons\n\n");
    out.push_str("| Line | Icon Name | Old Codepoint | New Codepoint | Action |\n");
    out.push_str("|------|-----------|---------------|---------------|--------|\n");
    for icon in &inputs.patch.migrated {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            icon.line,
            icon.display_name,
            hex(icon.old),
            hex(icon.new),
            icon.action
        ));
    }
    out.push('\n');

    out.push_str("## Validated Icons\n\n");
    out.push_str("| Line | Icon Name | Codepoint | Status |\n");
    out.push_str("|------|-----------|-----------|--------|\n");
    for icon in &inputs.patch.validated {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            icon.line,
            icon.display_name,
            hex(icon.codepoint),
            icon.status
        ));
    }
    out.push('\n');

    if !inputs.patch.skipped.is_empty() {
        out.push_str("## Skipped (ASCII Literals)\n\n");
        out.push_str("| Line | Icon Name | Char | Reason |\n");
        out.push_str("|------|-----------|------|--------|\n");
        for icon in &inputs.patch.skipped {
            let ch = char::from_u32(icon.codepoint).unwrap_or('?');
            out.push_str(&format!(
                "| {} | {} | {} ({}) | {} |\n",
                icon.line,
                icon.display_name,
                ch,
                hex(icon.codepoint),
                icon.reason
            ));
        }
        out.push('\n');
    }

    if !inputs.patch.unmapped.is_empty() {
        out.push_str("## ⚠ Unmapped / Missing Icons (NEEDS MANUAL REVIEW)\n\n");
        out.push_str("| Line | Icon Name | Codepoint | Issue |\n");
        out.push_str("|------|-----------|-----------|-------|\n");
        for icon in &inputs.patch.unmapped {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                icon.line,
                icon.display_name,
                hex(icon.codepoint),
                icon.issue
            ));
        }
        out.push('\n');
    }

    if !inputs.translation.unmapped.is_empty() {
        out.push_str(&format!("## ⚠ Unmapped {} Names\n\n", config.old_family));
        for entry in &inputs.translation.unmapped {
            out.push_str(&format!("- `{}` ({})\n", entry.name, hex(entry.codepoint)));
        }
        out.push('\n');
    }

    if !inputs.translation.ambiguities.is_empty() {
        out.push_str("## ⚠ Ambiguous Mappings\n\n");
        for ambiguity in &inputs.translation.ambiguities {
            out.push_str(&format!(
                "- `{}`: {} → {} (displaced `{}` → {})\n",
                ambiguity.name,
                hex(ambiguity.old),
                hex(ambiguity.new),
                ambiguity.displaced.name,
                hex(ambiguity.displaced.codepoint)
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "## {} Changes\n\n",
        config.formatter_path.display()
    ));
    match inputs.comparison {
        ComparisonOutcome::Applied { old, new, name } => out.push_str(&format!(
            "- file icon comparison: {} → {} (migrated, {})\n",
            hex(*old),
            hex(*new),
            name
        )),
        ComparisonOutcome::EscapeNotFound { old } => out.push_str(&format!(
            "- file icon comparison: {} — escape not found in file, no change\n",
            hex(*old)
        )),
        ComparisonOutcome::NoMapping { old } => out.push_str(&format!(
            "- file icon comparison: {} — no mapping available, no change\n",
            hex(*old)
        )),
    }
    out.push('\n');

    out.push_str("## Post-Migration Reminders\n\n");
    out.push_str("1. Run `go build ./...` to verify all escape sequences are valid Go\n");
    out.push_str("2. Regenerate test snapshots: `go test ./... -update`\n");
    out.push_str("3. Run `go test ./...` to verify tests pass\n");
    out.push_str("4. Review any unmapped/missing icons above for manual fixes\n");

    out
}

#[cfg(test)]
mod tests {
    use crate::config::MigrationConfig;
    use crate::patch::{ComparisonOutcome, MigratedIcon, PatchOutcome, UnmappedIcon};
    use crate::translate::{Ambiguity, TranslationOutcome, TranslationTarget, UnmappedName};

    use super::{ReportInputs, render_report};

    fn base_inputs<'a>(
        config: &'a MigrationConfig,
        translation: &'a TranslationOutcome,
        patch: &'a PatchOutcome,
        comparison: &'a ComparisonOutcome,
    ) -> ReportInputs<'a> {
        ReportInputs {
            config,
            translation,
            patch,
            comparison,
            old_digest: "aaaa",
            new_digest: "bbbb",
            dry_run: true,
        }
    }

    #[test]
    fn report_carries_mode_digests_and_counts() {
        let config = MigrationConfig::default();
        let translation = TranslationOutcome::default();
        let patch = PatchOutcome {
            migrated: vec![MigratedIcon {
                line: 12,
                display_name: "android".to_string(),
                old: 0xF531,
                new: 0xF0065,
                action: "migrated (mdi: android)".to_string(),
            }],
            ..PatchOutcome::default()
        };
        let comparison = ComparisonOutcome::NoMapping { old: 0xF723 };

        let report = render_report(&base_inputs(&config, &translation, &patch, &comparison));

        assert!(report.contains("DRY RUN (no files modified)"));
        assert!(report.contains("v2 stylesheet sha256: `aaaa`"));
        assert!(report.contains("v3 stylesheet sha256: `bbbb`"));
        assert!(report.contains("| 12 | android | U+F531 | U+F0065 | migrated (mdi: android) |"));
        assert!(report.contains("no mapping available, no change"));
        assert!(report.contains("internal/dir/formatterStuff.go changes: 0"));
        assert!(report.contains("Post-Migration Reminders"));
    }

    #[test]
    fn applied_mode_and_comparison_change_are_reported() {
        let config = MigrationConfig::default();
        let translation = TranslationOutcome::default();
        let patch = PatchOutcome::default();
        let comparison = ComparisonOutcome::Applied {
            old: 0xF723,
            new: 0xF0224,
            name: "file".to_string(),
        };

        let mut inputs = base_inputs(&config, &translation, &patch, &comparison);
        inputs.dry_run = false;
        let report = render_report(&inputs);

        assert!(report.contains("**Mode**: APPLIED"));
        assert!(report.contains("internal/dir/formatterStuff.go changes: 1"));
        assert!(report.contains("U+F723 → U+F0224 (migrated, file)"));
    }

    #[test]
    fn soft_findings_get_their_own_sections() {
        let config = MigrationConfig::default();
        let translation = TranslationOutcome {
            unmapped: vec![UnmappedName {
                name: "markdown".to_string(),
                codepoint: 0xF853,
            }],
            ambiguities: vec![Ambiguity {
                name: "second".to_string(),
                old: 0xF600,
                new: 0xF0200,
                displaced: TranslationTarget {
                    codepoint: 0xF0100,
                    name: "first".to_string(),
                },
            }],
            ..TranslationOutcome::default()
        };
        let patch = PatchOutcome {
            unmapped: vec![UnmappedIcon {
                line: 99,
                display_name: "mystery".to_string(),
                codepoint: 0xF999,
                issue: "in mdi range but no mapping found".to_string(),
            }],
            ..PatchOutcome::default()
        };
        let comparison = ComparisonOutcome::EscapeNotFound { old: 0xF723 };

        let report = render_report(&base_inputs(&config, &translation, &patch, &comparison));

        assert!(report.contains("NEEDS MANUAL REVIEW"));
        assert!(report.contains("| 99 | mystery | U+F999 |"));
        assert!(report.contains("Unmapped mdi Names"));
        assert!(report.contains("`markdown` (U+F853)"));
        assert!(report.contains("Ambiguous Mappings"));
        assert!(report.contains("`second`: U+F600 → U+F0200 (displaced `first` → U+F0100)"));
        assert!(report.contains("escape not found in file, no change"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let config = MigrationConfig::default();
        let translation = TranslationOutcome::default();
        let patch = PatchOutcome::default();
        let comparison = ComparisonOutcome::NoMapping { old: 0xF723 };

        let report = render_report(&base_inputs(&config, &translation, &patch, &comparison));

        assert!(!report.contains("Skipped (ASCII Literals)"));
        assert!(!report.contains("NEEDS MANUAL REVIEW"));
        assert!(!report.contains("Ambiguous Mappings"));
    }
}
