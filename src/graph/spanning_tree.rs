use super::*;
use crate::errors::{InvariantCheck, TreeError};
use itertools::Itertools;

/// Undirected tree (or forest, if built from a disconnected instance) over the cities,
/// stored as a dense symmetric adjacency matrix. Edges are additionally kept in the
/// order in which they were inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    number_of_nodes: NumNodes,
    adjacency: Vec<bool>,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Creates a forest of `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            number_of_nodes: n,
            adjacency: vec![false; (n as usize) * (n as usize)],
            edges: Vec::with_capacity((n as usize).saturating_sub(1)),
        }
    }

    #[inline(always)]
    fn index_of(&self, u: Node, v: Node) -> usize {
        (u as usize) * (self.number_of_nodes as usize) + v as usize
    }

    /// Adds the undirected edge {u, v}.
    /// ** Panics if the edge is a loop or already contained **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert!(u != v, "spanning tree cannot contain loop at {u}");
        assert!(!self.has_edge(u, v), "edge {{{u}, {v}}} already contained");

        let (uv, vu) = (self.index_of(u, v), self.index_of(v, u));
        self.adjacency[uv] = true;
        self.adjacency[vu] = true;
        self.edges.push(Edge(u, v));
    }

    /// Returns the edges in insertion order, oriented from the tree node to the node it attached
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the weights of all tree edges
    pub fn total_weight(&self, matrix: &DistanceMatrix) -> Cost {
        self.edges.iter().map(|e| e.weight_in(matrix) as Cost).sum()
    }

    /// Returns true iff every node can be reached from node 0
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        TreeWalk::new(self, 0).unique().count() == self.len()
    }
}

impl GraphNodeOrder for SpanningTree {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl GraphEdgeOrder for SpanningTree {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyTest for SpanningTree {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency[self.index_of(u, v)]
    }
}

impl AdjacencyList for SpanningTree {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let begin = self.index_of(u, 0);
        self.adjacency[begin..begin + self.len()]
            .iter()
            .positions(|&x| x)
            .map(|v| v as Node)
    }
}

impl InvariantCheck<TreeError> for SpanningTree {
    fn is_correct(&self) -> Result<(), TreeError> {
        for u in self.vertices() {
            for v in self.vertices() {
                if self.has_edge(u, v) != self.has_edge(v, u) {
                    return Err(TreeError::Asymmetric(u, v));
                }
            }
        }

        let marked = self.adjacency.iter().filter(|&&x| x).count() / 2;
        let expected = self.len().saturating_sub(1);
        if marked != expected || self.edges.len() != expected {
            return Err(TreeError::WrongEdgeCount {
                found: marked,
                expected,
            });
        }

        // n - 1 edges and connected implies acyclic
        if !self.is_connected() {
            return Err(TreeError::Disconnected);
        }

        Ok(())
    }
}
