/// Use cases - Application business logic orchestration
mod check_outdated;
mod resolve_tree;

pub use check_outdated::CheckOutdatedUseCase;
pub use resolve_tree::ResolveTreeUseCase;
