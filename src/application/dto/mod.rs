/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results back out to the
/// adapters, keeping the domain layer isolated.
mod list_request;
mod list_response;
mod resolve_request;

pub use list_request::ListRequest;
pub use list_response::ListResponse;
pub use resolve_request::ResolveRequest;
