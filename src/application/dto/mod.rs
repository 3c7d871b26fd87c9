/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results back
/// out to the formatters, keeping the domain layer isolated.
mod outdated_request;
mod outdated_response;
mod output_format;
mod tree_request;
mod tree_response;

pub use outdated_request::OutdatedRequest;
pub use outdated_response::OutdatedResponse;
pub use output_format::OutputFormat;
pub use tree_request::{TreeRequest, DEFAULT_DEPTH};
pub use tree_response::TreeResponse;
