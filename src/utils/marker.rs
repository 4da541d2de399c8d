use crate::graph::{Node, NumNodes};

/// Per-node labels with a designated default value meaning "unmarked".
#[derive(Clone, Default, Debug)]
pub struct Marker<T: Clone + Eq> {
    data: Vec<T>,
    default: T,
}

pub type VisitedMarker = Marker<bool>;

impl<T: Clone + Eq> Marker<T> {
    #[inline(always)]
    pub fn new(n: NumNodes, default: T) -> Self {
        Marker {
            data: vec![default.clone(); n as usize],
            default,
        }
    }

    #[inline(always)]
    pub fn is_marked(&self, index: Node) -> bool {
        self.data[index as usize] != self.default
    }

    #[inline(always)]
    pub fn mark_with(&mut self, index: Node, marker: T) {
        self.data[index as usize] = marker;
    }
}

impl VisitedMarker {
    /// Marks `index` as visited and returns true iff it was not visited before
    #[inline(always)]
    pub fn visit(&mut self, index: Node) -> bool {
        let fresh = !self.is_marked(index);
        self.mark_with(index, true);
        fresh
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn marks() {
        let mut marker = Marker::new(4, Node::MAX);
        assert!(!marker.is_marked(2));
        marker.mark_with(2, 0);
        assert!(marker.is_marked(2));
        assert!(!marker.is_marked(3));
        marker.mark_with(2, Node::MAX);
        assert!(!marker.is_marked(2));
    }

    #[test]
    fn visits() {
        let mut visited = VisitedMarker::new(3, false);
        assert!(visited.visit(1));
        assert!(!visited.visit(1));
        assert!(visited.visit(0));
        assert!(!visited.is_marked(2));
    }
}
