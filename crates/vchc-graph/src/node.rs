use vchc_core::errors::{codes, VchcError};
use vchc_core::NodeId;

/// A named vertex together with its ordered outgoing adjacency.
///
/// Successors are handles into the arena of the owning graph, so a node never
/// owns its neighbours. The list keeps insertion order and rejects repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    successors: Vec<NodeId>,
    in_degree: usize,
}

impl Node {
    /// Creates a node with no successors.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            successors: Vec::new(),
            in_degree: 0,
        }
    }

    /// Returns the node's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the successor handles in insertion order.
    pub fn successors(&self) -> &[NodeId] {
        &self.successors
    }

    /// Returns whether `other` is already a successor.
    pub fn has_successor(&self, other: NodeId) -> bool {
        self.successors.contains(&other)
    }

    /// Appends `other` to the successor list.
    pub fn add_successor(&mut self, other: NodeId) -> Result<(), VchcError> {
        if self.has_successor(other) {
            return Err(duplicate_edge(&self.id, other));
        }
        self.successors.push(other);
        Ok(())
    }

    /// Number of outgoing links.
    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }

    /// Number of incoming links recorded by the owning graph.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub(crate) fn reset_in_degree(&mut self) {
        self.in_degree = 0;
    }

    pub(crate) fn bump_in_degree(&mut self) {
        self.in_degree += 1;
    }
}

pub(crate) fn duplicate_edge(from: &str, to: NodeId) -> VchcError {
    VchcError::graph(codes::DUPLICATE_EDGE, "successor already present")
        .with_context("from", from)
        .with_context("to", to.as_raw())
}
