use std::io::Write;

use crate::tour::Tour;

pub trait TourWriter {
    /// Writes the tour in the two-line console format
    /// ```text
    /// <label> tour: c0 c1 ... cn
    /// tour cost:    X
    /// ```
    /// where every city is followed by a single space.
    fn try_write_tour<W: Write>(&self, writer: W, label: &str) -> Result<(), std::io::Error>;
}

impl TourWriter for Tour {
    fn try_write_tour<W: Write>(&self, mut writer: W, label: &str) -> Result<(), std::io::Error> {
        write!(writer, "{label} tour: ")?;
        for u in self.cities() {
            write!(writer, "{u} ")?;
        }
        writeln!(writer)?;
        writeln!(writer, "tour cost:    {}", self.cost())?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use regex::Regex;

    fn render(tour: &Tour, label: &str) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        tour.try_write_tour(&mut buffer, label)
            .expect("Failed to write");
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn optimal_format() {
        let output = render(&Tour::new(vec![0, 1, 3, 2, 0], 80), "optimal");
        assert_eq!(output, "optimal tour: 0 1 3 2 0 \ntour cost:    80\n");
    }

    #[test]
    fn heuristic_format() {
        let output = render(&Tour::new(vec![0, 4, 2, 1, 3, 0], 1234), "heuristic");

        assert!(
            Regex::new(r"^heuristic tour: (\d+ ){6}\n")
                .unwrap()
                .is_match(&output),
            "Output: {output}"
        );
        assert!(
            Regex::new(r"\ntour cost:\s+1234\n$")
                .unwrap()
                .is_match(&output),
            "Output: {output}"
        );
    }

    #[test]
    fn trivial_tour() {
        assert_eq!(
            render(&Tour::trivial(), "optimal"),
            "optimal tour: 0 0 \ntour cost:    0\n"
        );
    }
}
