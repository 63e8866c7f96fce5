/// Application layer - Use cases, DTOs and plugin registration
///
/// This layer orchestrates the dependency listing services and coordinates
/// with infrastructure through ports.
pub mod dto;
pub mod registry;
pub mod use_cases;
