mod version_selection;

pub use version_selection::VersionSelection;
