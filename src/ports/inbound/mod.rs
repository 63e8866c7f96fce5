/// Inbound ports (Driving ports) - Plugin interfaces
///
/// A toolchain registers implementations of these traits with the
/// `PluginRegistry`; the host then drives them per source unit and per
/// dependency.
pub mod dependency_lister;
pub mod dependency_resolver;

pub use dependency_lister::DependencyLister;
pub use dependency_resolver::DependencyResolver;
