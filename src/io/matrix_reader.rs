use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines, Result},
    path::Path,
};

use log::warn;

use crate::graph::{DistanceMatrix, GraphNodeOrder, NumNodes, Weight};

pub trait MatrixFileReader: Sized {
    fn try_read_matrix<R: BufRead>(reader: R, number_of_nodes: NumNodes) -> Result<Self>;
    fn try_read_matrix_file<P: AsRef<Path>>(path: P, number_of_nodes: NumNodes) -> Result<Self>;
}

impl MatrixFileReader for DistanceMatrix {
    /// Reads `n * n` whitespace separated distances in row-major order. Values beyond the
    /// matrix are ignored. If the input ends early the remaining entries stay zero and a
    /// warning is logged.
    fn try_read_matrix<R: BufRead>(reader: R, number_of_nodes: NumNodes) -> Result<Self> {
        let mut matrix = DistanceMatrix::new(number_of_nodes);
        let expected = matrix.len() * matrix.len();

        let mut weight_reader = WeightReader::new(reader);
        let mut read = 0;
        for slot in matrix.weights_mut().iter_mut() {
            match weight_reader.next() {
                Some(weight) => *slot = weight?,
                None => break,
            }
            read += 1;
        }

        if read < expected {
            warn!(
                "Input contains only {read} of {expected} distances; the remaining entries are set to zero"
            );
        }

        Ok(matrix)
    }

    fn try_read_matrix_file<P: AsRef<Path>>(path: P, number_of_nodes: NumNodes) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_matrix(buf_reader, number_of_nodes)
    }
}

/// Iterates over all whitespace separated weights of a stream, line by line.
pub struct WeightReader<R> {
    lines: Lines<R>,
    pending: std::vec::IntoIter<String>,
    line_number: usize,
}

impl<R: BufRead> WeightReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for WeightReader<R> {
    type Item = Result<Weight>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(token.parse::<Weight>().map_err(|_| {
                    std::io::Error::new(
                        ErrorKind::InvalidData,
                        format!(
                            "Invalid value \"{token}\" in line {}; expected a nonnegative integer",
                            self.line_number
                        ),
                    )
                }));
            }

            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_number += 1;
            self.pending = line
                .split_whitespace()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}
