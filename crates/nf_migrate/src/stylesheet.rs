use indexmap::IndexMap;
use regex_lite::Regex;

/// prefix → (icon name → codepoint), in stylesheet document order.
pub type StylesheetMap = IndexMap<String, IndexMap<String, u32>>;

/// Matches `.nf-{prefix}-{name}:before { content: "\{hex}"; }`, in both the
/// pretty-printed and the minified layout.
fn rule_pattern() -> Regex {
    Regex::new(r#"\.nf-([a-zA-Z0-9]+)-([a-zA-Z0-9_-]+):before\s*\{\s*content:\s*"\\([0-9a-fA-F]+)";\s*\}"#)
        .expect("stylesheet rule regex")
}

/// Best-effort extraction of icon mappings from a reference stylesheet.
///
/// The reference text is third-party and not contractually stable, so
/// non-matching rules are silently skipped rather than rejected. Within one
/// prefix the last occurrence of a name wins. An empty result is the
/// caller's cue to warn, not an error.
#[must_use]
pub fn parse_stylesheet(text: &str) -> StylesheetMap {
    let pattern = rule_pattern();
    let mut map = StylesheetMap::new();
    for caps in pattern.captures_iter(text) {
        let Ok(codepoint) = u32::from_str_radix(&caps[3], 16) else {
            continue;
        };
        if char::from_u32(codepoint).is_none() {
            continue;
        }
        map.entry(caps[1].to_string())
            .or_insert_with(IndexMap::new)
            .insert(caps[2].to_string(), codepoint);
    }
    map
}
