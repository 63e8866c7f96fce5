use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Kind name used for Python packages
pub const PACKAGE: &str = "package";

/// Kind name used for Python modules
pub const MODULE: &str = "module";

/// Normalized symbol kinds shared by every toolchain in the code graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Package,
    Module,
    Field,
    Func,
    Var,
    Type,
}

impl SymbolKind {
    /// Returns the string representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Package => PACKAGE,
            SymbolKind::Module => MODULE,
            SymbolKind::Field => "field",
            SymbolKind::Func => "func",
            SymbolKind::Var => "var",
            SymbolKind::Type => "type",
        }
    }

    /// Parses a normalized kind name, returning `None` for unrecognized values.
    pub fn parse(s: &str) -> Option<SymbolKind> {
        match s {
            PACKAGE => Some(SymbolKind::Package),
            MODULE => Some(SymbolKind::Module),
            "field" => Some(SymbolKind::Field),
            "func" => Some(SymbolKind::Func),
            "var" => Some(SymbolKind::Var),
            "type" => Some(SymbolKind::Type),
            _ => None,
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the symbol kinds reported by the Python grapher onto `SymbolKind`.
///
/// Keys are uppercase (`FUNCTION`, `CLASS`, ...). Lookups uppercase their
/// input first, so lowercased names map the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolKindTable {
    kinds: HashMap<String, SymbolKind>,
    callable: HashSet<String>,
}

impl Default for SymbolKindTable {
    fn default() -> Self {
        Self::python()
    }
}

impl SymbolKindTable {
    /// An empty table with no mappings.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
            callable: HashSet::new(),
        }
    }

    /// The Python grapher's kinds.
    pub fn python() -> Self {
        let kinds = [
            ("ATTRIBUTE", SymbolKind::Field),
            ("CLASS", SymbolKind::Type),
            ("CONSTRUCTOR", SymbolKind::Func),
            ("FUNCTION", SymbolKind::Func),
            ("METHOD", SymbolKind::Func),
            ("MODULE", SymbolKind::Module),
            ("PACKAGE", SymbolKind::Package),
            ("PARAMETER", SymbolKind::Var),
            ("SCOPE", SymbolKind::Var),
            ("VARIABLE", SymbolKind::Var),
        ];

        let mut table = Self::empty();
        for (name, kind) in kinds {
            table.insert(name, kind);
        }
        for name in ["CONSTRUCTOR", "FUNCTION", "METHOD"] {
            table.mark_callable(name);
        }
        table
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, name: &str, kind: SymbolKind) {
        self.kinds.insert(name.to_uppercase(), kind);
    }

    pub fn mark_callable(&mut self, name: &str) {
        self.callable.insert(name.to_uppercase());
    }

    pub fn kind(&self, name: &str) -> Option<SymbolKind> {
        self.kinds.get(&name.to_uppercase()).copied()
    }

    pub fn is_callable(&self, name: &str) -> bool {
        self.callable.contains(&name.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
