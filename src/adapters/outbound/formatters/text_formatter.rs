use crate::dependency_tree::domain::{OutdatedDependency, TreeNode};
use crate::ports::outbound::{OutdatedFormatter, TreeFormatter};
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter rendering human-readable terminal output
///
/// Trees are drawn with box-drawing guides:
///
/// ```text
/// app@1.0.0
/// ├── dep@2.0.0
/// │   └── leaf@1.0.0
/// └── missing-pkg@9.9.9 (not found)
/// ```
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn label(node: &TreeNode) -> String {
        if node.is_not_found() {
            format!("{} (not found)", node.key)
        } else {
            node.key.clone()
        }
    }

    fn write_children(out: &mut String, node: &TreeNode, prefix: &str) -> std::fmt::Result {
        let children = node.children();
        for (idx, child) in children.iter().enumerate() {
            let last = idx + 1 == children.len();
            let (branch, guide) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            writeln!(out, "{}{}{}", prefix, branch, Self::label(child))?;
            Self::write_children(out, child, &format!("{}{}", prefix, guide))?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for TextFormatter {
    fn format_tree(&self, tree: &TreeNode) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", Self::label(tree))?;
        Self::write_children(&mut out, tree, "")?;
        Ok(out)
    }
}

impl OutdatedFormatter for TextFormatter {
    fn format_outdated(&self, dependencies: &[OutdatedDependency]) -> Result<String> {
        const HEADERS: [&str; 4] = ["Package", "Current", "Latest", "Update"];

        let rows: Vec<[&str; 4]> = dependencies
            .iter()
            .map(|dep| {
                let update = if dep.is_error() {
                    "?"
                } else if dep.needs_update {
                    "yes"
                } else {
                    "no"
                };
                [
                    dep.name.as_str(),
                    dep.current_version.as_str(),
                    dep.latest_version.as_str(),
                    update,
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&HEADERS).chain(rows.iter()) {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(out)
    }
}
