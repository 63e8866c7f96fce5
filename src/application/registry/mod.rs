/// Plugin registration for listers and resolvers
mod plugin_registry;

pub use plugin_registry::PluginRegistry;
