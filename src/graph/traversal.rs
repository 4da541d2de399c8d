use super::*;
use crate::utils::marker::VisitedMarker;

/// Frame of the explicit DFS stack: the vertex and the smallest index that may still be
/// one of its unexplored children.
type Frame = (Node, Node);

/// Depth-first traversal of a tree that reports every time control enters a vertex,
/// including each return to a parent after a child subtree is exhausted (Euler walk).
///
/// Children are explored in increasing index order. On a tree with `n` nodes reachable
/// from the start the walk has exactly `2(n-1) + 1` entries and ends at the start.
/// Nodes not reachable from the start are never reported.
///
/// # Example
/// ```
/// use salesman::graph::{SpanningTree, TreeWalk};
/// let mut tree = SpanningTree::new(3);
/// tree.add_edge(0, 2);
/// tree.add_edge(0, 1);
/// let walk: Vec<_> = TreeWalk::new(&tree, 0).collect();
/// assert_eq!(walk, vec![0, 1, 0, 2, 0]);
/// ```
pub struct TreeWalk<'a, G> {
    graph: &'a G,
    visited: VisitedMarker,
    stack: Vec<Frame>,
    start: Option<Node>,
}

impl<'a, G: AdjacencyTest + GraphNodeOrder> TreeWalk<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut visited = VisitedMarker::new(graph.number_of_nodes(), false);
        visited.visit(start);

        let mut stack = Vec::with_capacity(graph.len());
        stack.push((start, 0));

        Self {
            graph,
            visited,
            stack,
            start: Some(start),
        }
    }
}

impl<G: AdjacencyTest + GraphNodeOrder> Iterator for TreeWalk<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }

        let graph = self.graph;
        let child = {
            let (u, next) = self.stack.last_mut()?;
            let u = *u;
            let visited = &self.visited;
            let child = (*next..graph.number_of_nodes())
                .find(|&v| graph.has_edge(u, v) && !visited.is_marked(v));
            if let Some(v) = child {
                *next = v + 1;
            }
            child
        };

        match child {
            Some(v) => {
                self.visited.visit(v);
                self.stack.push((v, 0));
                Some(v)
            }
            None => {
                // subtree exhausted; report the return to the parent (if any)
                self.stack.pop();
                self.stack.last().map(|&(parent, _)| parent)
            }
        }
    }
}

/// Collects the complete Euler walk of `tree` starting at `start`
pub fn euler_walk<G: AdjacencyTest + GraphNodeOrder>(tree: &G, start: Node) -> Vec<Node> {
    TreeWalk::new(tree, start).collect()
}
