//! Network description files.
//!
//! A network file is TOML with one `[[rings]]` table per ring:
//!
//! ```toml
//! [[rings]]
//! name = "music"
//! sites = ["a.fm", "beat.io"]
//! ```
//!
//! Rings are inserted in file order, so the order decides the tree shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Ring, RingTree};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkFile {
    pub rings: Vec<RingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingEntry {
    pub name: String,
    #[serde(default)]
    pub sites: Vec<String>,
}

impl NetworkFile {
    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Self> {
        toml::from_str(content).map_err(|e| ApplicationError::NetworkFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Snapshot of a network in pre-order, so reloading rebuilds the same shape.
    pub fn from_tree(tree: &RingTree) -> Self {
        let rings = tree
            .iter()
            .map(|(_, node)| RingEntry {
                name: node.ring().name().to_string(),
                sites: node.ring().sites().iter().map(str::to_string).collect(),
            })
            .collect();
        Self { rings }
    }

    /// Builds the network, rejecting empty names and rings defined twice.
    ///
    /// Duplicate sites within a ring are dropped the same way `Ring::add_site` drops them.
    #[instrument(level = "debug", skip(self), fields(rings = self.rings.len()))]
    pub fn into_tree(self) -> ApplicationResult<RingTree> {
        let mut tree = RingTree::new();
        for entry in self.rings {
            if entry.name.is_empty() {
                return Err(ApplicationError::InvalidName {
                    kind: "ring",
                    name: entry.name,
                });
            }
            if tree.find(&entry.name).is_some() {
                return Err(ApplicationError::DuplicateRing(entry.name));
            }
            if let Some(site) = entry.sites.iter().find(|site| site.is_empty()) {
                return Err(ApplicationError::InvalidName {
                    kind: "site",
                    name: site.clone(),
                });
            }
            let ring = Ring::with_sites(entry.name, entry.sites);
            debug!(ring = ring.name(), sites = ring.site_count(), "ring loaded");
            tree.insert(ring);
        }
        Ok(tree)
    }

    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize network".to_string(),
            source: Box::new(e),
        })
    }
}

/// Reads and builds the network described by `path`.
#[instrument(level = "debug")]
pub fn load_network(path: &Path) -> ApplicationResult<RingTree> {
    let content = fs::read_to_string(path).with_path_context("read network file", path)?;
    NetworkFile::parse(&content, path)?.into_tree()
}

/// Writes `tree` to `path` as a network file.
#[instrument(level = "debug", skip(tree))]
pub fn save_network(tree: &RingTree, path: &Path) -> ApplicationResult<()> {
    let content = NetworkFile::from_tree(tree).to_toml()?;
    fs::write(path, content).with_path_context("write network file", path)
}
