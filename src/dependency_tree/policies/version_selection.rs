use crate::dependency_tree::domain::{PackageDocument, PackageMetadata, LATEST_TAG};
use crate::shared::error::ResolveError;

/// VersionSelection policy for choosing the concrete version of a package
///
/// This is a best-effort policy, not semver range matching:
/// 1. A request for `latest` is replaced by the document's `latest` dist-tag
/// 2. A version listed in the document that equals the request exactly wins
/// 3. Otherwise the last version in the document's listing is used
///
/// A range such as `^1.2.0` therefore resolves to whatever the registry
/// lists last, even if that version does not satisfy the range.
pub struct VersionSelection;

impl VersionSelection {
    /// Selects the concrete version string for `requested`
    ///
    /// # Arguments
    /// * `document` - The registry document for the package
    /// * `requested` - Requested version, range, or `latest`
    ///
    /// # Returns
    /// The selected version, or None when the document lists no versions
    pub fn select<'a>(document: &'a PackageDocument, requested: &str) -> Option<&'a str> {
        let wanted = if requested == LATEST_TAG {
            document.latest().unwrap_or(requested)
        } else {
            requested
        };

        document
            .versions
            .get_key_value(wanted)
            .or_else(|| document.versions.last())
            .map(|(version, _)| version.as_str())
    }

    /// Resolves a registry document into the metadata for one version
    ///
    /// # Errors
    /// Returns `ResolveError::NotFound` if no version can be selected
    pub fn resolve(
        document: &PackageDocument,
        name: &str,
        requested: &str,
    ) -> Result<PackageMetadata, ResolveError> {
        let version = Self::select(document, requested)
            .ok_or_else(|| ResolveError::not_found(name, requested))?;

        let dependencies = document
            .versions
            .get(version)
            .map(|manifest| manifest.dependencies.clone())
            .unwrap_or_default();

        Ok(PackageMetadata::new(
            name.to_string(),
            version.to_string(),
            dependencies,
        ))
    }
}
