use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const V2_CSS_URL: &str =
    "https://raw.githubusercontent.com/ryanoasis/nerd-fonts/v2.3.3/css/nerd-fonts-generated.css";
pub const V3_CSS_URL: &str =
    "https://raw.githubusercontent.com/ryanoasis/nerd-fonts/master/css/nerd-fonts-generated.css";

/// Hand-curated mapping for an icon whose name changed between generations,
/// so name correlation alone cannot find it.
#[derive(Debug, Clone)]
pub struct ManualOverride {
    pub old: u32,
    pub new: u32,
    pub label: String,
}

/// Icons renamed between nf-mdi-* and nf-md-*.
const RENAMED_ICONS: &[(u32, u32, &str)] = &[
    (0xF853, 0xF0354, "markdown → language_markdown"),
    (0xF72D, 0xF05C0, "file_xml → xml"),
    (0xF724, 0xF0226, "file_pdf → file_pdf_box"),
    (0xF820, 0xF0320, "language_python_text → language_python"),
    (0xF831, 0xF0331, "library_books → library"),
    (0xF822, 0xF0322, "laptop_chromebook → laptop"),
    (0xFB75, 0xF075A, "itunes → music"),
    (0xFB72, 0xF0673, "xaml → language_xaml"),
    (0xF719, 0xF0219, "file_document_box → file_document"),
    (0xFD03, 0xF0805, "azure → microsoft_azure"),
    (0xFB25, 0xF0626, "json → code_json"),
];

/// All knobs of a migration run. Defaults carry the Nerd Font v2 → v3
/// values for the logo-ls source tree; tests substitute their own ranges
/// and overrides without touching shared state.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub old_css_url: String,
    pub new_css_url: String,
    /// Short generation labels; the cache file name is derived from these.
    pub old_label: String,
    pub new_label: String,
    /// Family to be replaced and its replacement family, both present in
    /// the OLD stylesheet.
    pub old_family: String,
    pub new_family: String,
    /// Numeric range of old-family codepoints, inclusive on both ends.
    pub old_range: RangeInclusive<u32>,
    /// Codepoints that are literal ASCII characters, not icon glyphs.
    pub ascii_literals: BTreeSet<u32>,
    pub overrides: Vec<ManualOverride>,
    /// The single codepoint compared against in the secondary target file.
    pub comparison_codepoint: u32,
    /// Patched files, relative to the project directory.
    pub icons_map_path: PathBuf,
    pub formatter_path: PathBuf,
    pub cache_dir: PathBuf,
    /// When set, an existing cache file is ignored and re-fetched.
    pub force_refresh: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            old_css_url: V2_CSS_URL.to_string(),
            new_css_url: V3_CSS_URL.to_string(),
            old_label: "v2".to_string(),
            new_label: "v3".to_string(),
            old_family: "mdi".to_string(),
            new_family: "md".to_string(),
            // MDI range in Nerd Font v2: F500–FD46.
            old_range: 0xF500..=0xFD46,
            ascii_literals: "FZhJD".chars().map(u32::from).collect(),
            overrides: RENAMED_ICONS
                .iter()
                .map(|&(old, new, label)| ManualOverride {
                    old,
                    new,
                    label: label.to_string(),
                })
                .collect(),
            comparison_codepoint: 0xF723,
            icons_map_path: PathBuf::from("assets/iconsMap.go"),
            formatter_path: PathBuf::from("internal/dir/formatterStuff.go"),
            cache_dir: PathBuf::from("."),
            force_refresh: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MigrationConfig;

    #[test]
    fn default_config_carries_nerd_font_values() {
        let config = MigrationConfig::default();
        assert_eq!(config.old_family, "mdi");
        assert_eq!(config.new_family, "md");
        assert_eq!(config.old_range, 0xF500..=0xFD46);
        assert_eq!(config.comparison_codepoint, 0xF723);
        assert_eq!(config.overrides.len(), 11);
        assert!(!config.force_refresh);
    }

    #[test]
    fn ascii_literal_set_contains_plain_characters_only() {
        let config = MigrationConfig::default();
        for ch in "FZhJD".chars() {
            assert!(config.ascii_literals.contains(&u32::from(ch)));
        }
        assert!(!config.ascii_literals.contains(&0xF500));
    }
}
