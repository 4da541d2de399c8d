use crate::{
    errors::{InvariantCheck, TourError},
    graph::*,
    utils::marker::VisitedMarker,
};

/// A closed tour: the sequence of visited cities, with the start city repeated at the end,
/// together with its total cost (including the closing edge).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<Node>,
    cost: Cost,
}

impl Tour {
    pub fn new(cities: Vec<Node>, cost: Cost) -> Self {
        Self { cities, cost }
    }

    /// Closes the cycle `order` by appending its first city and computes the cost in `matrix`.
    ///
    /// # Example
    /// ```
    /// use salesman::{graph::DistanceMatrix, tour::Tour};
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0, 2, 3], vec![2, 0, 4], vec![3, 4, 0]]);
    /// let tour = Tour::from_cycle(&matrix, &[0, 2, 1]);
    /// assert_eq!(tour.cities(), &[0, 2, 1, 0]);
    /// assert_eq!(tour.cost(), 9);
    /// ```
    pub fn from_cycle(matrix: &DistanceMatrix, order: &[Node]) -> Self {
        let mut cities = Vec::with_capacity(order.len() + 1);
        cities.extend_from_slice(order);
        if let Some(&start) = order.first() {
            cities.push(start);
        }

        let cost = matrix.path_cost(&cities);
        Self { cities, cost }
    }

    /// The trivial tour of a single city
    pub fn trivial() -> Self {
        Self {
            cities: vec![0, 0],
            cost: 0,
        }
    }

    pub fn cities(&self) -> &[Node] {
        &self.cities
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of entries including the repeated start city
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of distinct cities on the tour, i.e. without the closing repetition
    pub fn number_of_cities(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Node> {
        self.cities.first().copied()
    }

    /// A tour is closed if it has at least two entries and returns to its start
    pub fn is_closed(&self) -> bool {
        self.cities.len() >= 2 && self.cities.first() == self.cities.last()
    }

    /// Recomputes the cost in `matrix` and compares it with the stored one
    pub fn verify_cost(&self, matrix: &DistanceMatrix) -> Result<(), TourError> {
        let computed = matrix.path_cost(&self.cities);
        if computed != self.cost {
            return Err(TourError::CostMismatch {
                stored: self.cost,
                computed,
            });
        }
        Ok(())
    }

    /// Checks the structural invariants and additionally that all `n` cities are visited
    pub fn is_correct_for(&self, n: NumNodes) -> Result<(), TourError> {
        self.is_correct()?;
        if self.number_of_cities() != n as usize {
            return Err(TourError::WrongLength {
                visited: self.number_of_cities(),
                expected: n as usize,
            });
        }
        Ok(())
    }
}

impl InvariantCheck<TourError> for Tour {
    /// The tour is closed and its first `len - 1` entries are a permutation of `[0, len - 1)`
    fn is_correct(&self) -> Result<(), TourError> {
        let (&first, &last) = match (self.cities.first(), self.cities.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(TourError::Empty),
        };

        if !self.is_closed() {
            return Err(TourError::NotClosed { first, last });
        }

        let n = self.number_of_cities() as NumNodes;
        let mut visited = VisitedMarker::new(n, false);
        for &u in &self.cities[..n as usize] {
            if u >= n {
                return Err(TourError::OutOfRange(u));
            }
            if !visited.visit(u) {
                return Err(TourError::Repeated(u));
            }
        }

        Ok(())
    }
}
