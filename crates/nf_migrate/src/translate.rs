use indexmap::IndexMap;

use crate::config::MigrationConfig;
use crate::stylesheet::StylesheetMap;

/// Replacement for one old-family codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTarget {
    pub codepoint: u32,
    /// Icon name for correlated entries, override label for renamed ones.
    pub name: String,
}

/// old codepoint → replacement, each key bound at most once.
pub type TranslationTable = IndexMap<u32, TranslationTarget>;

/// Old-family entry with no same-named counterpart in the new family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedName {
    pub name: String,
    pub codepoint: u32,
}

/// Two different names bound the same old codepoint to different targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    pub name: String,
    pub old: u32,
    pub new: u32,
    pub displaced: TranslationTarget,
}

#[derive(Debug, Default)]
pub struct TranslationOutcome {
    pub table: TranslationTable,
    pub unmapped: Vec<UnmappedName>,
    pub ambiguities: Vec<Ambiguity>,
}

/// Correlate the old family with the new family by shared icon name, then
/// merge manual overrides for renamed icons.
///
/// Policy, in order:
/// - A name present in both families binds `old → (new, name)`.
/// - If the same old codepoint was already bound to a different target, an
///   ambiguity is recorded and the later binding wins. Document order of
///   the stylesheet makes "later" deterministic.
/// - Names absent from the new family land in `unmapped`.
/// - An override applies only when no correlated binding exists for its
///   codepoint; an applied override removes that codepoint from `unmapped`.
#[must_use]
pub fn build_translation(
    stylesheet: &StylesheetMap,
    config: &MigrationConfig,
) -> TranslationOutcome {
    let empty = IndexMap::new();
    let old_family = stylesheet.get(&config.old_family).unwrap_or(&empty);
    let new_family = stylesheet.get(&config.new_family).unwrap_or(&empty);

    let mut outcome = TranslationOutcome::default();
    for (name, &old_cp) in old_family {
        let Some(&new_cp) = new_family.get(name) else {
            outcome.unmapped.push(UnmappedName {
                name: name.clone(),
                codepoint: old_cp,
            });
            continue;
        };

        let target = TranslationTarget {
            codepoint: new_cp,
            name: name.clone(),
        };
        if let Some(displaced) = outcome.table.get(&old_cp) {
            if *displaced != target {
                outcome.ambiguities.push(Ambiguity {
                    name: name.clone(),
                    old: old_cp,
                    new: new_cp,
                    displaced: displaced.clone(),
                });
            }
        }
        outcome.table.insert(old_cp, target);
    }

    for renamed in &config.overrides {
        if outcome.table.contains_key(&renamed.old) {
            continue;
        }
        outcome.table.insert(
            renamed.old,
            TranslationTarget {
                codepoint: renamed.new,
                name: renamed.label.clone(),
            },
        );
        outcome.unmapped.retain(|entry| entry.codepoint != renamed.old);
    }

    outcome
}
