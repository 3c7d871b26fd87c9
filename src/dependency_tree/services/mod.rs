mod outdated_checker;
mod tree_builder;

pub use outdated_checker::OutdatedChecker;
pub use tree_builder::TreeBuilder;
