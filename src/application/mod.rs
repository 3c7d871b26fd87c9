/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the dependency tree domain and coordinates
/// with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
