/// Crate-wide result type.
///
/// Errors are `anyhow::Error`; typed `PydepError` values ride inside it and can
/// be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
