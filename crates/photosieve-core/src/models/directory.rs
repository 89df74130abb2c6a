use serde::{Deserialize, Serialize};

use super::media::MediaId;

/// Unique identifier for a directory node; doubles as its arena index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectoryId(pub u32);

/// Unique identifier for a standalone metafile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetaFileId(pub u64);

/// Sidecar file attached to a directory (e.g. a GPX track log)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFile {
    pub id: MetaFileId,
    pub name: String,
    pub directory: DirectoryId,
}

/// A directory in the catalog tree
///
/// Parent and child edges are arena indices into the owning
/// [`DirectoryTree`]; the tree has a single owner (the catalog) and
/// callers only borrow nodes during a call. The absolute path is derived
/// from the parent chain, not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub id: DirectoryId,
    pub name: String,
    pub parent: Option<DirectoryId>,
    pub directories: Vec<DirectoryId>,
    pub media: Vec<MediaId>,
    pub preview: Option<MediaId>,
    pub metafiles: Vec<MetaFileId>,
}

/// Directory as it appears inside a search result
///
/// Children are omitted; media matched inside the directory are already
/// present in the result's flat media list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialDirectory {
    pub id: DirectoryId,
    pub name: String,
    /// Absolute path from the catalog root, leading separator included
    pub path: String,
}

/// Arena-allocated directory tree
///
/// Node ids index directly into the arena. Multiple roots are allowed;
/// each root's absolute path starts at the separator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryTree {
    nodes: Vec<DirectoryNode>,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and wire it into its parent's child list; `None`
    /// parent creates a root
    pub fn add_node(&mut self, name: impl Into<String>, parent: Option<DirectoryId>) -> DirectoryId {
        let id = DirectoryId(self.nodes.len() as u32);
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.get_mut(parent_id) {
                parent_node.directories.push(id);
            }
        }
        self.nodes.push(DirectoryNode {
            id,
            name: name.into(),
            parent,
            directories: Vec::new(),
            media: Vec::new(),
            preview: None,
            metafiles: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: DirectoryId) -> Option<&DirectoryNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: DirectoryId) -> Option<&mut DirectoryNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectoryNode> {
        self.nodes.iter()
    }

    /// The node and every ancestor up to its root, nearest first
    pub fn ancestry(&self, id: DirectoryId) -> impl Iterator<Item = DirectoryId> + '_ {
        std::iter::successors(self.get(id).map(|node| node.id), |current| {
            self.get(*current).and_then(|node| node.parent)
        })
    }

    /// Node names from the root down to the node itself
    pub fn path_segments(&self, id: DirectoryId) -> Vec<&str> {
        let mut segments: Vec<&str> = self
            .ancestry(id)
            .filter_map(|ancestor| self.get(ancestor).map(|node| node.name.as_str()))
            .collect();
        segments.reverse();
        segments
    }

    /// Absolute path from the catalog root, leading separator included
    pub fn absolute_path(&self, id: DirectoryId) -> String {
        format!("/{}", self.path_segments(id).join("/"))
    }

    /// The partial (child-free) form of a node, for search results
    pub fn partial(&self, id: DirectoryId) -> Option<PartialDirectory> {
        self.get(id).map(|node| PartialDirectory {
            id: node.id,
            name: node.name.clone(),
            path: self.absolute_path(id),
        })
    }
}
