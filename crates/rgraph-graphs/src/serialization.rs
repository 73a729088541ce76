use rgraph_core::errors::{ErrorInfo, RgError};
use serde::{Deserialize, Serialize};

use crate::bipartite::SwitchBipartiteGraph;

/// Serializes the graph state to a JSON string.
pub fn graph_to_json(graph: &SwitchBipartiteGraph) -> Result<String, RgError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| RgError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph state from its JSON representation.
///
/// Deserialized edges go through the normal constructor, so a corrupted
/// payload fails with the usual construction errors and no partial state.
pub fn graph_from_json(json: &str) -> Result<SwitchBipartiteGraph, RgError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| RgError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    nx: usize,
    ny: usize,
    edges: Vec<(u32, u32)>,
}

impl SerializableGraph {
    fn from_graph(graph: &SwitchBipartiteGraph) -> Self {
        Self {
            nx: graph.nx(),
            ny: graph.ny(),
            edges: graph.edges().into_iter().collect(),
        }
    }

    fn into_graph(self) -> Result<SwitchBipartiteGraph, RgError> {
        SwitchBipartiteGraph::from_edges(self.nx, self.ny, self.edges)
    }
}
