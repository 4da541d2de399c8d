use crate::graph::{Node, NumNodes};

/// Direction an entry of the permutation wants to move in
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Permutation of the cities `0..n` with city 0 pinned to position 0. The remaining
/// positions are permuted with the directed integer method of Steinhaus, Johnson and
/// Trotter: each position carries a direction that travels together with its value.
///
/// The first `(n-1)!/2` states produced by [`PermutationState::advance`] contain exactly one
/// of every pair of mirrored cycles, so a caller only has to stop after that many states.
#[derive(Clone, Debug)]
pub struct PermutationState {
    order: Vec<Node>,
    direction: Vec<Direction>,
}

impl PermutationState {
    /// Starts with the identity and every entry pointing left
    pub fn new(n: NumNodes) -> Self {
        Self {
            order: (0..n).collect(),
            direction: vec![Direction::default(); n as usize],
        }
    }

    pub fn order(&self) -> &[Node] {
        &self.order
    }

    pub fn direction(&self) -> &[Direction] {
        &self.direction
    }

    #[inline(always)]
    fn neighbor_of(&self, pos: usize) -> usize {
        match self.direction[pos] {
            Direction::Left => pos - 1,
            Direction::Right => pos + 1,
        }
    }

    /// Position of the largest mobile value, or `None` if no value can move. Position 0 is
    /// pinned, so the value at position 1 may not move left and the last value may not
    /// move right.
    pub fn largest_mobile(&self) -> Option<usize> {
        let last = self.order.len().checked_sub(1)?;

        (1..=last)
            .filter(|&pos| {
                !(pos == 1 && self.direction[pos] == Direction::Left)
                    && !(pos == last && self.direction[pos] == Direction::Right)
            })
            .filter(|&pos| self.order[pos] > self.order[self.neighbor_of(pos)])
            .max_by_key(|&pos| self.order[pos])
    }

    /// Moves to the next permutation and returns false (leaving the state untouched) if no
    /// mobile value exists anymore.
    pub fn advance(&mut self) -> bool {
        let Some(pos) = self.largest_mobile() else {
            return false;
        };

        let target = self.neighbor_of(pos);
        let mobile = self.order[pos];
        self.order.swap(pos, target);
        self.direction.swap(pos, target);

        for i in 1..self.order.len() {
            if self.order[i] > mobile {
                self.direction[i] = self.direction[i].flipped();
            }
        }

        true
    }
}

/// Number of states [`PermutationState`] has to visit to see every undirected cycle through
/// `n` cities once, i.e. `(n-1)!/2`. Two cities still form one cycle, and a single city
/// needs no enumeration at all. Returns `None` if the count does not fit into a `u64`.
///
/// # Example
/// ```
/// use salesman::exact::number_of_permutations;
/// assert_eq!(number_of_permutations(4), Some(3));
/// assert_eq!(number_of_permutations(5), Some(12));
/// assert_eq!(number_of_permutations(30), None);
/// ```
pub fn number_of_permutations(n: NumNodes) -> Option<u64> {
    match n {
        0 | 1 => Some(0),
        2 => Some(1),
        _ => (2..n as u64)
            .try_fold(1u64, |acc, k| acc.checked_mul(k))
            .map(|f| f / 2),
    }
}
