use serde::Serialize;

/// Marker stored in `latest_version` when the lookup failed
pub const LOOKUP_ERROR: &str = "Error";

/// Comparison of a declared dependency version against the registry's latest tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutdatedDependency {
    pub name: String,
    pub current_version: String,
    pub latest_version: String,
    pub needs_update: bool,
}

impl OutdatedDependency {
    /// Literal string comparison; a range like `^1.0.0` never equals `1.0.0`.
    pub fn compare(name: &str, current_version: &str, latest_version: &str) -> Self {
        Self {
            name: name.to_string(),
            current_version: current_version.to_string(),
            latest_version: latest_version.to_string(),
            needs_update: current_version != latest_version,
        }
    }

    pub fn lookup_failed(name: &str, current_version: &str) -> Self {
        Self {
            name: name.to_string(),
            current_version: current_version.to_string(),
            latest_version: LOOKUP_ERROR.to_string(),
            needs_update: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.latest_version == LOOKUP_ERROR
    }
}
