use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "advent2024", version, about = "Advent of Code 2024 solutions")]
pub struct Cli {
    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Puzzle part, both if omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file, overrides the day-based default
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Read the numbered example input `day{DAY}test{N}.in` instead
    #[arg(short, long, conflicts_with = "input")]
    pub test: Option<u32>,
}

impl Cli {
    pub fn input_path(&self) -> PathBuf {
        match (&self.input, self.test) {
            (Some(path), _) => path.clone(),
            (None, Some(test)) => format!("day{}test{}.in", self.day, test).into(),
            (None, None) => format!("day{}.in", self.day).into(),
        }
    }

    pub fn parts(&self) -> Vec<u8> {
        match self.part {
            Some(part) => vec![part],
            None => vec![1, 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_follows_day() {
        let cli = Cli::parse_from(["advent2024", "7"]);
        assert_eq!(cli.input_path(), PathBuf::from("day7.in"));
        assert_eq!(cli.parts(), [1, 2]);

        let cli = Cli::parse_from(["advent2024", "7", "2", "--test", "3"]);
        assert_eq!(cli.input_path(), PathBuf::from("day7test3.in"));
        assert_eq!(cli.parts(), [2]);

        let cli = Cli::parse_from(["advent2024", "12", "-i", "garden.txt"]);
        assert_eq!(cli.input_path(), PathBuf::from("garden.txt"));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Cli::try_parse_from(["advent2024", "26"]).is_err());
        assert!(Cli::try_parse_from(["advent2024", "3", "0"]).is_err());
        assert!(Cli::try_parse_from(["advent2024", "3", "1", "-i", "x", "-t", "1"]).is_err());
    }
}
