/// Dependency listing domain - Pure logic for listing and resolving Python dependencies
///
/// Nothing in here performs I/O: listers produce container commands as data,
/// transforms work on captured bytes, resolvers are plain data mappings.
pub mod domain;
pub mod services;
