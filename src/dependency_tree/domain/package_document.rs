use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Full metadata document for one package as published by the registry.
///
/// Only the fields the resolver needs are kept. `versions` preserves the
/// order in which the registry lists them, which the fallback policy
/// depends on.
///
/// Decoding is lenient below the top level: old publications carry
/// manifests in legacy shapes, and one of those must not make the
/// whole document unreadable.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PackageDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "dist-tags", default, deserialize_with = "lenient_dist_tags")]
    pub dist_tags: DistTags,
    #[serde(default, deserialize_with = "lenient_versions")]
    pub versions: IndexMap<String, VersionManifest>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistTags {
    pub latest: Option<String>,
}

/// The slice of a published version's manifest used for tree building.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionManifest {
    pub dependencies: IndexMap<String, String>,
}

impl VersionManifest {
    /// Reads the `dependencies` map of a raw manifest.
    ///
    /// Anything other than an object (`null`, a legacy array) counts as no
    /// dependencies, and entries whose range is not a string are skipped.
    fn from_value(manifest: &Value) -> Self {
        let dependencies = manifest
            .get("dependencies")
            .and_then(Value::as_object)
            .map(|deps| {
                deps.iter()
                    .filter_map(|(name, range)| {
                        range.as_str().map(|range| (name.clone(), range.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { dependencies }
    }
}

fn lenient_dist_tags<'de, D>(deserializer: D) -> Result<DistTags, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Value::deserialize(deserializer)?;
    let latest = tags.get("latest").and_then(Value::as_str).map(String::from);
    Ok(DistTags { latest })
}

fn lenient_versions<'de, D>(deserializer: D) -> Result<IndexMap<String, VersionManifest>, D::Error>
where
    D: Deserializer<'de>,
{
    let versions = Value::deserialize(deserializer)?;
    let Some(versions) = versions.as_object() else {
        return Ok(IndexMap::new());
    };
    Ok(versions
        .iter()
        .map(|(version, manifest)| (version.clone(), VersionManifest::from_value(manifest)))
        .collect())
}

impl PackageDocument {
    /// Builds a document in memory; versions keep the order given.
    pub fn new(latest: Option<&str>, versions: Vec<(&str, Vec<(&str, &str)>)>) -> Self {
        Self {
            name: None,
            dist_tags: DistTags {
                latest: latest.map(String::from),
            },
            versions: versions
                .into_iter()
                .map(|(version, deps)| {
                    let dependencies = deps
                        .into_iter()
                        .map(|(name, range)| (name.to_string(), range.to_string()))
                        .collect();
                    (version.to_string(), VersionManifest { dependencies })
                })
                .collect(),
        }
    }

    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.latest.as_deref()
    }
}
