use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::graph::*;

pub trait MatrixWriter {
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl MatrixWriter for DistanceMatrix {
    /// Writes one row per line in the format understood by
    /// [`MatrixFileReader`](super::MatrixFileReader)
    fn try_write_matrix<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for u in self.vertices() {
            writeln!(writer, "{}", self.row(u).iter().join(" "))?;
        }

        Ok(())
    }

    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_matrix(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::MatrixFileReader;
    use rand::SeedableRng;

    #[test]
    fn hard_coded() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, 12, 7], vec![12, 0, 3], vec![7, 3, 0]]);

        let mut buffer: Vec<u8> = Vec::new();
        matrix.try_write_matrix(&mut buffer).expect("Failed to write");
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "0 12 7\n12 0 3\n7 3 0\n");
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        let dir = tempfile::tempdir().unwrap();

        for n in 0..30 {
            let org = DistanceMatrix::random_symmetric(&mut rng, n, 1000);

            let path = dir.path().join(format!("matrix{n}.txt"));
            org.try_write_matrix_file(&path).expect("Failed to write");
            let read = DistanceMatrix::try_read_matrix_file(&path, n).expect("Failed to read");

            assert_eq!(org, read);
        }
    }
}
