use crate::dependency_tree::domain::{OutdatedDependency, TreeNode};
use crate::ports::outbound::{OutdatedFormatter, TreeFormatter};
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter producing the JSON shape tree renderers consume
///
/// Trees serialize as nested `{ key, type, data: { name, version },
/// expanded, children? }` objects; outdated reports as
/// `{ "outdatedDependencies": [...] }`.
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutdatedReport<'a> {
    outdated_dependencies: &'a [OutdatedDependency],
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format_tree(&self, tree: &TreeNode) -> Result<String> {
        Ok(serde_json::to_string_pretty(tree)?)
    }
}

impl OutdatedFormatter for JsonFormatter {
    fn format_outdated(&self, dependencies: &[OutdatedDependency]) -> Result<String> {
        let report = OutdatedReport {
            outdated_dependencies: dependencies,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
