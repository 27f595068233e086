use crate::error::GraphError;
use boardmap_core::model::ProjectedGraph;
use std::collections::HashMap;

/// Neighbor entry: (node_id, weight)
pub type Neighbor = (String, u32);

/// Undirected adjacency over a projected graph, for the selected-node panel.
pub struct NetworkIndex {
    adjacency: HashMap<String, Vec<Neighbor>>,
    link_count: usize,
}

impl NetworkIndex {
    pub fn new(graph: &ProjectedGraph) -> Self {
        let mut adjacency: HashMap<String, Vec<Neighbor>> = graph
            .nodes
            .iter()
            .map(|node| (node.id.clone(), Vec::new()))
            .collect();

        for link in &graph.links {
            adjacency
                .entry(link.source.clone())
                .or_default()
                .push((link.target.clone(), link.weight));
            adjacency
                .entry(link.target.clone())
                .or_default()
                .push((link.source.clone(), link.weight));
        }

        // Heaviest ties first, then id for a stable order.
        for neighbors in adjacency.values_mut() {
            neighbors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        }

        Self {
            adjacency,
            link_count: graph.links.len(),
        }
    }

    /// Get 1-hop neighbors
    pub fn neighbors(&self, id: &str) -> Result<&[Neighbor], GraphError> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Get 2-hop neighbors (includes 1-hop), sorted by hop then id
    pub fn neighbors_2hop(&self, id: &str) -> Result<Vec<(String, u8)>, GraphError> {
        let mut result: HashMap<&str, u8> = HashMap::new();

        for (target, _) in self.neighbors(id)? {
            result.insert(target, 1);
        }

        for (target, _) in self.neighbors(id)? {
            for (target2, _) in self.neighbors(target)? {
                if target2 != id && !result.contains_key(target2.as_str()) {
                    result.insert(target2, 2);
                }
            }
        }

        let mut ordered: Vec<(String, u8)> = result
            .into_iter()
            .map(|(node_id, hop)| (node_id.to_string(), hop))
            .collect();
        ordered.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ordered)
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}
