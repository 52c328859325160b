use std::path::PathBuf;

use clap::Args;

use crate::config::MigrationConfig;
use crate::error::Result;
use crate::fetch::fetch_stylesheet;
use crate::stylesheet::{StylesheetMap, parse_stylesheet};
use crate::translate::build_translation;
use crate::util::{CliOutput, OutputIntegration, output_for};
use crate::validate::ValidationIndex;

/// Fetch and summarize both reference stylesheets without touching any
/// source file.
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Re-fetch reference stylesheets even when a cache file exists.
    #[arg(long = "force-refresh")]
    pub force_refresh: bool,

    #[arg(long = "cache-dir", default_value = ".")]
    pub cache_dir: PathBuf,

    #[arg(long = "old-css-url")]
    pub old_css_url: Option<String>,

    #[arg(long = "new-css-url")]
    pub new_css_url: Option<String>,
}

fn print_family_counts(label: &str, map: &StylesheetMap, ui: &CliOutput) {
    let mut prefixes: Vec<&String> = map.keys().collect();
    prefixes.sort();
    ui.info(&format!("{label}: {} families", prefixes.len()));
    for prefix in prefixes {
        ui.info(&format!("  nf-{prefix}-*: {} icons", map[prefix].len()));
    }
}

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let integration = OutputIntegration::detect();
    run_inspect_with_integration(args, &integration)
}

fn run_inspect_with_integration(args: InspectArgs, integration: &OutputIntegration) -> Result<()> {
    let ui = output_for(integration);

    let mut config = MigrationConfig {
        force_refresh: args.force_refresh,
        cache_dir: args.cache_dir.clone(),
        ..MigrationConfig::default()
    };
    if let Some(url) = &args.old_css_url {
        config.old_css_url = url.clone();
    }
    if let Some(url) = &args.new_css_url {
        config.new_css_url = url.clone();
    }

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
    print_family_counts(&config.old_label, &old_map, &ui);
    print_family_counts(&config.new_label, &new_map, &ui);

    let translation = build_translation(&old_map, &config);
    let index = ValidationIndex::from_stylesheet(&new_map);
    ui.success(&format!(
        "translation table: {} entries, {} unmapped, {} ambiguous; {} validation set: {} codepoints",
        translation.table.len(),
        translation.unmapped.len(),
        translation.ambiguities.len(),
        config.new_label,
        index.len()
    ));

    if integration.should_emit_json() {
        println!(
            "{}",
            serde_json::json!({
                "command": "inspect",
                "status": "ok",
                "old_families": old_map.len(),
                "new_families": new_map.len(),
                "translation_entries": translation.table.len(),
                "unmapped_names": translation.unmapped.len(),
                "ambiguities": translation.ambiguities.len(),
                "validation_codepoints": index.len(),
                "integration": integration,
            })
        );
    }

    Ok(())
}
