//! Resolution of `$ref` metadata indirections

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::discovery::document::load_document;
use crate::discovery::paths::{normalize, sibling_path};
use crate::error::DiscoveryError;
use crate::models::ApiDefinitionMetadata;

/// Terminal metadata of a reference chain and the file it was found in.
///
/// `resolved_path == current file` means the metadata was declared inline.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetadata {
    pub metadata: Option<ApiDefinitionMetadata>,
    pub resolved_path: PathBuf,
}

impl ResolvedMetadata {
    /// Whether the metadata came from a file other than `origin`.
    pub fn is_shared(&self, origin: &Path) -> bool {
        normalize(&self.resolved_path) != normalize(origin)
    }
}

/// Follows `$ref` chains until a record without an indirection is found.
#[derive(Debug, Clone, Copy)]
pub struct MetadataResolver {
    max_depth: usize,
}

impl MetadataResolver {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Resolve `metadata` declared in `current`.
    ///
    /// A referenced file that is missing or unparsable resolves to no
    /// metadata. A chain that revisits a file, or is longer than the
    /// configured depth, is an error.
    pub fn resolve(
        &self,
        metadata: Option<ApiDefinitionMetadata>,
        current: &Path,
    ) -> Result<ResolvedMetadata, DiscoveryError> {
        let mut metadata = metadata;
        let mut current = current.to_path_buf();
        let mut visited: HashSet<PathBuf> = HashSet::new();

        loop {
            let Some(reference) = metadata.as_ref().and_then(|m| m.reference()) else {
                return Ok(ResolvedMetadata {
                    metadata,
                    resolved_path: current,
                });
            };

            let next = sibling_path(&current, reference);
            if !visited.insert(next.clone()) {
                return Err(DiscoveryError::ReferenceCycle { path: next });
            }
            if visited.len() > self.max_depth {
                return Err(DiscoveryError::ReferenceDepthExceeded {
                    depth: self.max_depth,
                    path: next,
                });
            }

            log::debug!(
                "Following metadata reference {} -> {}",
                current.display(),
                next.display()
            );
            metadata = load_document(&next).and_then(ApiDefinitionMetadata::from_yaml);
            current = next;
        }
    }
}
