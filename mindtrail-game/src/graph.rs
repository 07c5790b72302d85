//! Graph traversal traces for the graph-lab visualizer.
//!
//! BFS and Dijkstra run to completion up front, recording one frame per
//! settled node. Frames carry enough state (visited order, frontier,
//! tentative distances) for the UI to animate without re-running.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphAlgorithm {
    #[default]
    Bfs,
    Dijkstra,
}

impl GraphAlgorithm {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search",
            Self::Dijkstra => "Dijkstra's Shortest Path",
        }
    }

    pub const ALL: [Self; 2] = [Self::Bfs, Self::Dijkstra];
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An undirected weighted graph, nodes addressed by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphSpec {
    pub nodes: Vec<String>,
    /// `(a, b, weight)` with `a`/`b` indices into `nodes`.
    pub edges: Vec<(usize, usize, u32)>,
}

impl GraphSpec {
    /// The fixed demo graph the graph lab animates: eight stations in a
    /// loosely-meshed network.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            nodes: ["A", "B", "C", "D", "E", "F", "G", "H"]
                .into_iter()
                .map(String::from)
                .collect(),
            edges: vec![
                (0, 1, 4),
                (0, 2, 1),
                (1, 3, 3),
                (2, 3, 6),
                (2, 4, 2),
                (3, 5, 2),
                (4, 5, 7),
                (4, 6, 3),
                (5, 7, 1),
                (6, 7, 5),
            ],
        }
    }

    /// Neighbors of `node` with edge weights.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> Vec<(usize, u32)> {
        let mut out = Vec::new();
        for &(a, b, w) in &self.edges {
            if a == node {
                out.push((b, w));
            } else if b == node {
                out.push((a, w));
            }
        }
        out
    }
}

/// One animation frame: the node just settled plus the search state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFrame {
    pub current: usize,
    /// Settled nodes in settle order, including `current`.
    pub visited: Vec<usize>,
    /// Discovered but not yet settled nodes.
    pub frontier: Vec<usize>,
    /// Tentative distance per node, `None` while undiscovered.
    pub distances: Vec<Option<u32>>,
}

/// Breadth-first traversal from `start`; distances count hops.
#[must_use]
pub fn bfs_trace(graph: &GraphSpec, start: usize) -> Vec<GraphFrame> {
    let n = graph.nodes.len();
    if start >= n {
        return Vec::new();
    }
    let mut frames = Vec::new();
    let mut distances: Vec<Option<u32>> = vec![None; n];
    let mut visited = Vec::new();
    let mut queue = VecDeque::from([start]);
    distances[start] = Some(0);

    while let Some(node) = queue.pop_front() {
        visited.push(node);
        let hops = distances[node].unwrap_or(0);
        for (next, _) in graph.neighbors(node) {
            if distances[next].is_none() {
                distances[next] = Some(hops + 1);
                queue.push_back(next);
            }
        }
        frames.push(GraphFrame {
            current: node,
            visited: visited.clone(),
            frontier: queue.iter().copied().collect(),
            distances: distances.clone(),
        });
    }
    frames
}

/// Dijkstra from `start` over edge weights. Linear-scan extraction is
/// plenty for the eight-node demo graph.
#[must_use]
pub fn dijkstra_trace(graph: &GraphSpec, start: usize) -> Vec<GraphFrame> {
    let n = graph.nodes.len();
    if start >= n {
        return Vec::new();
    }
    let mut frames = Vec::new();
    let mut distances: Vec<Option<u32>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut visited = Vec::new();
    distances[start] = Some(0);

    loop {
        let Some(node) = (0..n)
            .filter(|&i| !settled[i] && distances[i].is_some())
            .min_by_key(|&i| distances[i])
        else {
            break;
        };
        settled[node] = true;
        visited.push(node);
        let base = distances[node].unwrap_or(0);
        for (next, weight) in graph.neighbors(node) {
            if settled[next] {
                continue;
            }
            let candidate = base + weight;
            if distances[next].is_none_or(|d| candidate < d) {
                distances[next] = Some(candidate);
            }
        }
        frames.push(GraphFrame {
            current: node,
            visited: visited.clone(),
            frontier: (0..n)
                .filter(|&i| !settled[i] && distances[i].is_some())
                .collect(),
            distances: distances.clone(),
        });
    }
    frames
}
