use sha2::{Digest, Sha256};
use vchc_core::errors::VchcError;

use crate::graph::Graph;

/// Computes the canonical structural hash for the provided graph.
///
/// Nodes are visited in identifier order and each successor list is hashed as
/// a sorted set of identifiers, so two graphs hash equal exactly when they have
/// the same node ids and the same links, regardless of arena layout.
pub fn canonical_hash(graph: &Graph) -> Result<String, VchcError> {
    let mut hasher = Sha256::new();
    hasher.update((graph.len() as u64).to_le_bytes());
    hasher.update((graph.link_count() as u64).to_le_bytes());

    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_by(|a, b| a.id().cmp(b.id()));
    for node in nodes {
        update_str(node.id(), &mut hasher);
        let mut successors = graph.successor_ids(node)?;
        successors.sort_unstable();
        hasher.update((successors.len() as u64).to_le_bytes());
        for successor in successors {
            update_str(successor, &mut hasher);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
