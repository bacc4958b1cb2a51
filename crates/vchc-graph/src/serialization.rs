use serde::{Deserialize, Serialize};
use vchc_core::errors::{codes, ErrorInfo, VchcError};
use vchc_core::provenance::SchemaVersion;

use crate::graph::Graph;
use crate::source::SourceGraph;
use crate::target::TargetGraph;

/// How a renderer should treat a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// A vertex of the source graph.
    Vertex,
    /// One of the `a1..aK` selector nodes.
    Selector,
    /// A node of a cover testing component.
    Gadget,
}

/// Node entry of a [`RenderGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Node identifier.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Rendering role.
    pub role: NodeRole,
}

/// Directed link entry of a [`RenderGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLink {
    /// Identifier of the tail node.
    pub source: String,
    /// Identifier of the head node.
    pub target: String,
}

/// Flat node and link lists handed to a force-directed renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderGraph {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Nodes in insertion order.
    pub nodes: Vec<RenderNode>,
    /// Links in adjacency order.
    pub links: Vec<RenderLink>,
}

impl RenderGraph {
    /// Flattens a source graph; both directions of every edge are listed.
    pub fn from_source(graph: &SourceGraph, schema_version: SchemaVersion) -> Self {
        Self::flatten(graph.graph(), schema_version, |_| NodeRole::Vertex)
    }

    /// Flattens a target graph, tagging selectors and gadget nodes.
    pub fn from_target(graph: &TargetGraph, schema_version: SchemaVersion) -> Self {
        Self::flatten(graph.graph(), schema_version, |handle| {
            if graph.is_selector(handle) {
                NodeRole::Selector
            } else {
                NodeRole::Gadget
            }
        })
    }

    fn flatten(
        graph: &Graph,
        schema_version: SchemaVersion,
        role_of: impl Fn(vchc_core::NodeId) -> NodeRole,
    ) -> Self {
        let nodes = graph
            .entries()
            .map(|(handle, node)| RenderNode {
                id: node.id().to_owned(),
                name: node.id().to_owned(),
                role: role_of(handle),
            })
            .collect();
        let links = graph
            .links()
            .into_iter()
            .map(|(source, target)| RenderLink {
                source: source.to_owned(),
                target: target.to_owned(),
            })
            .collect();
        Self {
            schema_version,
            nodes,
            links,
        }
    }
}

/// Serializes the render payload to a JSON string.
pub fn render_to_json(render: &RenderGraph) -> Result<String, VchcError> {
    serde_json::to_string_pretty(render)
        .map_err(|err| VchcError::Serde(ErrorInfo::new(codes::SERIALIZE_JSON, err.to_string())))
}

/// Serializes the render payload to a compact binary representation using `bincode`.
pub fn render_to_bytes(render: &RenderGraph) -> Result<Vec<u8>, VchcError> {
    bincode::serialize(render)
        .map_err(|err| VchcError::Serde(ErrorInfo::new(codes::SERIALIZE_BYTES, err.to_string())))
}
