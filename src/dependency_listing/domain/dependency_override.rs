use super::raw_dependency::RawDependency;
use super::source_unit::RepoUnit;
use serde::Deserialize;
use std::collections::HashMap;

/// One entry of the dependency override table, as written in configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverrideEntry {
    pub repo: String,
    pub unit: String,
    pub unit_type: String,
    #[serde(default)]
    pub deps: Vec<RawDependency>,
}

impl OverrideEntry {
    pub fn key(&self) -> RepoUnit {
        RepoUnit::new(&self.repo, &self.unit, &self.unit_type)
    }
}

/// Fixed dependency lists for source units whose dependencies pydep cannot list
///
/// Lookups are exact on `(repo, unit, unit_type)`. Later entries for the same
/// key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyOverrides {
    entries: HashMap<RepoUnit, Vec<RawDependency>>,
}

impl DependencyOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = OverrideEntry>) -> Self {
        let mut overrides = Self::new();
        overrides.extend(entries);
        overrides
    }

    pub fn insert(&mut self, key: RepoUnit, deps: Vec<RawDependency>) {
        self.entries.insert(key, deps);
    }

    pub fn get(&self, key: &RepoUnit) -> Option<&[RawDependency]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<OverrideEntry> for DependencyOverrides {
    fn extend<T: IntoIterator<Item = OverrideEntry>>(&mut self, iter: T) {
        for entry in iter {
            let key = entry.key();
            self.entries.insert(key, entry.deps);
        }
    }
}
