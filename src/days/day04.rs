use std::iter::successors;

use crate::grid::{Grid, Pos};

const KINGS: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

fn spells(grid: &Grid, from: Pos, dir: (isize, isize), word: &[u8]) -> bool {
    successors(Some(from), |&pos| grid.step(pos, dir))
        .take(word.len())
        .map(|pos| grid[pos])
        .eq(word.iter().copied())
}

fn is_mas(ends: (Option<u8>, Option<u8>)) -> bool {
    matches!(ends, (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
}

pub fn solve(part: u8, input: &str) -> String {
    let grid = Grid::parse(input);
    if part == 1 {
        grid.positions().filter(|&pos| grid[pos] == b'X').map(|pos|
            KINGS.iter().filter(|&&dir| spells(&grid, pos, dir, b"XMAS")).count()
        ).sum::<usize>().to_string()
    } else {
        grid.positions().filter(|&pos| {
            grid[pos] == b'A' &&
            is_mas((grid.at(pos, (-1, -1)), grid.at(pos, (1, 1)))) &&
            is_mas((grid.at(pos, (-1, 1)), grid.at(pos, (1, -1))))
        }).count().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE), "18");
        assert_eq!(solve(2, EXAMPLE), "9");
    }

    #[test]
    fn words_stop_at_the_edge() {
        assert_eq!(solve(1, "XMA\n..."), "0");
        assert_eq!(solve(1, "XMAS\nSAMX"), "2");
        assert_eq!(solve(2, "M.S\n.A.\nM.S"), "1");
        assert_eq!(solve(2, "M.M\n.A.\nM.S"), "0");
    }
}
