pub mod matrix_reader;
pub use matrix_reader::*;
pub mod matrix_writer;
pub use matrix_writer::MatrixWriter;

pub mod tour_writer;
pub use tour_writer::TourWriter;
