use std::collections::{BTreeMap, HashSet};

use crate::stylesheet::StylesheetMap;

/// Every codepoint known to the new generation, plus a reverse lookup used
/// for existence checks and report labels. Never feeds back into
/// translation decisions.
#[derive(Debug, Default)]
pub struct ValidationIndex {
    codepoints: HashSet<u32>,
    owners: BTreeMap<u32, (String, String)>,
}

impl ValidationIndex {
    #[must_use]
    pub fn from_stylesheet(stylesheet: &StylesheetMap) -> Self {
        let mut index = Self::default();
        for (prefix, names) in stylesheet {
            for (name, &codepoint) in names {
                index.codepoints.insert(codepoint);
                index
                    .owners
                    .insert(codepoint, (prefix.clone(), name.clone()));
            }
        }
        index
    }

    #[must_use]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.codepoints.contains(&codepoint)
    }

    /// Owning `(family, name)` of a codepoint, when known.
    #[must_use]
    pub fn owner(&self, codepoint: u32) -> Option<&(String, String)> {
        self.owners.get(&codepoint)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }
}
