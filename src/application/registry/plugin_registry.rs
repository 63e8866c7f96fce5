use crate::config::ListerConfig;
use crate::dependency_listing::domain::{PIP_PACKAGE_UNIT_TYPE, PYTHON_REQUIREMENT_TARGET_TYPE};
use crate::dependency_listing::services::{PythonDependencyLister, PythonDependencyResolver};
use crate::ports::inbound::{DependencyLister, DependencyResolver};
use crate::shared::error::PydepError;
use crate::shared::Result;
use std::collections::HashMap;

/// PluginRegistry - Listers by unit type and resolvers by target type
///
/// Registration is explicit: the orchestrator builds a registry at startup
/// and hands it to the use cases.
#[derive(Default)]
pub struct PluginRegistry {
    listers: HashMap<String, Box<dyn DependencyLister>>,
    resolvers: HashMap<String, Box<dyn DependencyResolver>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the Python lister and resolver registered
    pub fn with_python(config: &ListerConfig) -> Self {
        let mut registry = Self::new();
        registry.register_lister(
            PIP_PACKAGE_UNIT_TYPE,
            PythonDependencyLister::new(config.python_env.clone(), config.overrides.clone()),
        );
        registry.register_resolver(PYTHON_REQUIREMENT_TARGET_TYPE, PythonDependencyResolver::new());
        registry
    }

    /// Registers a lister for a unit type, replacing any previous one
    pub fn register_lister(&mut self, unit_type: &str, lister: impl DependencyLister + 'static) {
        self.listers.insert(unit_type.to_string(), Box::new(lister));
    }

    /// Registers a resolver for a target type, replacing any previous one
    pub fn register_resolver(
        &mut self,
        target_type: &str,
        resolver: impl DependencyResolver + 'static,
    ) {
        self.resolvers
            .insert(target_type.to_string(), Box::new(resolver));
    }

    pub fn lister_for(&self, unit_type: &str) -> Result<&dyn DependencyLister> {
        self.listers
            .get(unit_type)
            .map(|lister| lister.as_ref())
            .ok_or_else(|| {
                PydepError::NoListerRegistered {
                    unit_type: unit_type.to_string(),
                }
                .into()
            })
    }

    pub fn resolver_for(&self, target_type: &str) -> Result<&dyn DependencyResolver> {
        self.resolvers
            .get(target_type)
            .map(|resolver| resolver.as_ref())
            .ok_or_else(|| {
                PydepError::NoResolverRegistered {
                    target_type: target_type.to_string(),
                }
                .into()
            })
    }
}
