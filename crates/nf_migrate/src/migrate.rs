use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::MigrationConfig;
use crate::error::Result;
use crate::fetch::fetch_stylesheet;
use crate::patch::{patch_comparison_source, patch_icons_source};
use crate::report::{ReportInputs, render_report};
use crate::stylesheet::parse_stylesheet;
use crate::translate::build_translation;
use crate::util::{
    OutputIntegration, backup_file, content_digest, ensure_exists, output_for, write_string,
};
use crate::validate::ValidationIndex;

#[derive(Debug, Clone, Args)]
pub struct MigrateArgs {
    /// Compute and report only; write nothing, skip backups.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Re-fetch reference stylesheets even when a cache file exists.
    #[arg(long = "force-refresh")]
    pub force_refresh: bool,

    /// Root of the source tree being patched.
    #[arg(long = "project-dir", default_value = ".")]
    pub project_dir: PathBuf,

    /// Where cache files live; defaults to the project directory.
    #[arg(long = "cache-dir")]
    pub cache_dir: Option<PathBuf>,

    /// Report output path; defaults to migration_report.md in the project.
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(long = "old-css-url")]
    pub old_css_url: Option<String>,

    #[arg(long = "new-css-url")]
    pub new_css_url: Option<String>,
}

fn config_from_args(args: &MigrateArgs) -> MigrationConfig {
    let mut config = MigrationConfig {
        force_refresh: args.force_refresh,
        cache_dir: args
            .cache_dir
            .clone()
            .unwrap_or_else(|| args.project_dir.clone()),
        ..MigrationConfig::default()
    };
    if let Some(url) = &args.old_css_url {
        config.old_css_url = url.clone();
    }
    if let Some(url) = &args.new_css_url {
        config.new_css_url = url.clone();
    }
    config
}

pub fn run_migrate(args: MigrateArgs) -> Result<()> {
    let integration = OutputIntegration::detect();
    run_migrate_with_integration(args, &integration)
}

fn run_migrate_with_integration(args: MigrateArgs, integration: &OutputIntegration) -> Result<()> {
    let ui = output_for(integration);
    let config = config_from_args(&args);

    let icons_path = args.project_dir.join(&config.icons_map_path);
    let formatter_path = args.project_dir.join(&config.formatter_path);

    // Precondition: both targets must exist before any network activity.
    ensure_exists(&icons_path)?;
    ensure_exists(&formatter_path)?;

    let old_css = fetch_stylesheet(
        &config.old_css_url,
        &config.old_label,
        &config.cache_dir,
        config.force_refresh,
        &ui,
    )?;
    let new_css = fetch_stylesheet(
        &config.new_css_url,
        &config.new_label,
        &config.cache_dir,
        config.force_refresh,
        &ui,
    )?;

    let old_map = parse_stylesheet(&old_css);
    let new_map = parse_stylesheet(&new_css);
    if old_map.is_empty() {
        ui.warning(&format!(
            "no icon rules recognized in the {} stylesheet",
            config.old_label
        ));
    }
    if new_map.is_empty() {
        ui.warning(&format!(
            "no icon rules recognized in the {} stylesheet",
            config.new_label
        ));
    }

    let translation = build_translation(&old_map, &config);
    ui.info(&format!(
        "translation table: {} entries, {} unmapped, {} ambiguous",
        translation.table.len(),
        translation.unmapped.len(),
        translation.ambiguities.len()
    ));

    let index = ValidationIndex::from_stylesheet(&new_map);
    ui.info(&format!(
        "{} validation set: {} codepoints",
        config.new_label,
        index.len()
    ));

    let icons_content = fs::read_to_string(&icons_path)?;
    let formatter_content = fs::read_to_string(&formatter_path)?;

    let patch = patch_icons_source(&icons_content, &translation.table, &index, &config);
    let (new_formatter, comparison) =
        patch_comparison_source(&formatter_content, &translation.table, &config);

    let report = render_report(&ReportInputs {
        config: &config,
        translation: &translation,
        patch: &patch,
        comparison: &comparison,
        old_digest: &content_digest(&old_css),
        new_digest: &content_digest(&new_css),
        dry_run: args.dry_run,
    });
    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| args.project_dir.join("migration_report.md"));
    write_string(&report_path, &report)?;
    ui.success(&format!("report written: {}", report_path.display()));

    if args.dry_run {
        ui.info(&format!(
            "dry run: would migrate {} icons in {}",
            patch.migrated.len(),
            icons_path.display()
        ));
        ui.info(&format!(
            "dry run: comparison file outcome: {:?}",
            comparison
        ));
    } else {
        let icons_backup = backup_file(&icons_path)?;
        let formatter_backup = backup_file(&formatter_path)?;
        ui.info(&format!("backed up {}", icons_backup.display()));
        ui.info(&format!("backed up {}", formatter_backup.display()));

        write_string(&icons_path, &patch.content)?;
        write_string(&formatter_path, &new_formatter)?;
        ui.success(&format!(
            "wrote {} ({} changes)",
            icons_path.display(),
            patch.migrated.len()
        ));
        ui.success(&format!("wrote {}", formatter_path.display()));
    }

    if integration.should_emit_json() {
        println!(
            "{}",
            serde_json::json!({
                "command": "migrate",
                "status": "ok",
                "dry_run": args.dry_run,
                "migrated": patch.migrated.len(),
                "skipped": patch.skipped.len(),
                "unmapped": patch.unmapped.len(),
                "validated": patch.validated.len(),
                "unmapped_names": translation.unmapped.len(),
                "ambiguities": translation.ambiguities.len(),
                "report": report_path.display().to_string(),
                "integration": integration,
            })
        );
    }

    Ok(())
}
