use super::permutation::*;
use crate::{
    algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm},
    errors::SolverError,
    graph::*,
    tour::Tour,
};
use log::{debug, error, trace};

/// Largest instance whose permutation count still fits into a `u64`
pub const MAX_EXHAUSTIVE_CITIES: NumNodes = 21;

/// Number of permutations evaluated per call of [`IterativeAlgorithm::execute_step`]
const PERMUTATIONS_PER_STEP: u64 = 1 << 14;

/// Exhaustive search for a minimum cost tour starting (and ending) in city 0.
///
/// Enumerates each undirected Hamiltonian cycle exactly once, `(n-1)!/2` in total, and keeps
/// the first cycle of minimum cost. The distance matrix is assumed to be symmetric; otherwise
/// only one direction of every cycle is priced.
pub struct ExhaustiveSearch<'a> {
    matrix: &'a DistanceMatrix,
    state: PermutationState,
    expected: u64,
    remaining: u64,
    evaluated: u64,
    best: Option<Tour>,
    error: Option<SolverError>,
}

impl<'a> ExhaustiveSearch<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Result<Self, SolverError> {
        let n = matrix.number_of_nodes();
        if n == 0 {
            return Err(SolverError::NoCities);
        }

        let expected = number_of_permutations(n).ok_or(SolverError::TooManyCities {
            number_of_nodes: n,
            max: MAX_EXHAUSTIVE_CITIES,
        })?;

        debug!("Exhaustive search over {n} cities: {expected} permutations");

        Ok(Self {
            matrix,
            state: PermutationState::new(n),
            expected,
            remaining: expected,
            evaluated: 0,
            best: (n == 1).then(Tour::trivial),
            error: None,
        })
    }

    /// Number of permutations priced so far
    pub fn number_of_evaluated_permutations(&self) -> u64 {
        self.evaluated
    }

    /// Number of permutations a complete run prices
    pub fn number_of_permutations(&self) -> u64 {
        self.expected
    }

    /// Returns true if the enumeration stopped prematurely because no mobile element was left
    pub fn has_stalled(&self) -> bool {
        self.error.is_some()
    }

    fn evaluate_current(&mut self) {
        let cost = self.matrix.cycle_cost(self.state.order());
        self.evaluated += 1;

        // strict comparison: on ties the first tour found is kept
        if self.best.as_ref().is_none_or(|best| cost < best.cost()) {
            trace!("New best tour of cost {cost}: {:?}", self.state.order());
            self.best = Some(Tour::from_cycle(self.matrix, self.state.order()));
        }
    }

    /// Consumes the search and returns the best tour. Fails if the enumeration stalled or if
    /// no permutation was priced at all.
    pub fn into_result(mut self) -> Result<Tour, SolverError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.best.ok_or(SolverError::Unfinished {
            evaluated: self.evaluated,
            expected: self.expected,
        })
    }
}

impl IterativeAlgorithm<Tour> for ExhaustiveSearch<'_> {
    fn execute_step(&mut self) {
        for _ in 0..PERMUTATIONS_PER_STEP.min(self.remaining) {
            self.evaluate_current();
            self.remaining -= 1;

            if self.remaining > 0 && !self.state.advance() {
                let err = SolverError::EnumerationStalled {
                    evaluated: self.evaluated,
                    expected: self.expected,
                };
                error!("{err}");
                self.error = Some(err);
                self.remaining = 0;
                break;
            }
        }
    }

    fn is_completed(&self) -> bool {
        self.remaining == 0
    }

    fn best_known_solution(&mut self) -> Option<Tour> {
        self.best.clone()
    }
}

impl TerminatingIterativeAlgorithm<Tour> for ExhaustiveSearch<'_> {}

/// Computes a minimum cost tour through all cities of `matrix` by exhaustive search. The
/// returned tour starts and ends in city 0. Unlike
/// [`TerminatingIterativeAlgorithm::run_to_completion`] this function ignores Ctrl-C and
/// always finishes the enumeration.
///
/// # Example
/// ```
/// use salesman::{exact::optimal_tour, graph::DistanceMatrix};
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]);
/// let tour = optimal_tour(&matrix).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 3, 2, 0]);
/// assert_eq!(tour.cost(), 80);
/// ```
pub fn optimal_tour(matrix: &DistanceMatrix) -> Result<Tour, SolverError> {
    let mut search = ExhaustiveSearch::new(matrix)?;
    while !search.is_completed() {
        search.execute_step();
    }
    search.into_result()
}
