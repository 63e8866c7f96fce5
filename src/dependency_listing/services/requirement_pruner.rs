use crate::dependency_listing::domain::Requirement;

/// Requirements split by whether they can be resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrunedRequirements {
    /// Requirements with a clone URL, in input order
    pub kept: Vec<Requirement>,
    /// Requirements without a clone URL, in input order
    pub ignored: Vec<Requirement>,
}

impl PrunedRequirements {
    /// Keys of the ignored requirements, in input order
    pub fn ignored_keys(&self) -> Vec<String> {
        self.ignored.iter().map(|req| req.key.clone()).collect()
    }
}

/// RequirementPruner service for dropping requirements that cannot be resolved
///
/// A requirement without a clone URL has nowhere to resolve to, so it is
/// set aside instead of being turned into a dependency.
pub struct RequirementPruner;

impl RequirementPruner {
    /// Partitions `reqs` into kept (non-empty clone URL) and ignored (empty clone URL)
    pub fn prune(reqs: Vec<Requirement>) -> PrunedRequirements {
        let (kept, ignored): (Vec<_>, Vec<_>) =
            reqs.into_iter().partition(Requirement::has_clone_url);
        PrunedRequirements { kept, ignored }
    }
}
