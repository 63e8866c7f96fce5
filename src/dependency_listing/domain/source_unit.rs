use serde::{Deserialize, Serialize};

/// A source unit within a repository, e.g. one Python distribution package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub name: String,
    pub unit_type: String,
    /// Unit root, relative to the repository root
    pub root_dir: String,
}

impl SourceUnit {
    pub fn new(
        name: impl Into<String>,
        unit_type: impl Into<String>,
        root_dir: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_type: unit_type.into(),
            root_dir: root_dir.into(),
        }
    }
}

/// Repository-level configuration handed to listers and resolvers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Repository URI, e.g. `github.com/pallets/flask`
    pub uri: String,
}

impl RepositoryConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Composite key identifying a source unit across repositories
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoUnit {
    pub repo: String,
    pub unit: String,
    pub unit_type: String,
}

impl RepoUnit {
    pub fn new(
        repo: impl Into<String>,
        unit: impl Into<String>,
        unit_type: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            unit: unit.into(),
            unit_type: unit_type.into(),
        }
    }

    pub fn of(repository: &RepositoryConfig, unit: &SourceUnit) -> Self {
        Self::new(&repository.uri, &unit.name, &unit.unit_type)
    }
}

impl std::fmt::Display for RepoUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} in {}", self.unit_type, self.unit, self.repo)
    }
}
