use std::iter::successors;

use bitvec::prelude::*;
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::grid::{Grid, Pos};

pub fn solve(part: u8, input: &str) -> String {
    let grid = Grid::parse(input);
    let mut frequencies: FxHashMap<u8, Vec<Pos>> = FxHashMap::default();
    for pos in grid.positions().filter(|&pos| grid[pos].is_ascii_alphanumeric()) {
        frequencies.entry(grid[pos]).or_default().push(pos);
    }

    let mut antinodes = bitvec![0; grid.len()];
    for antennas in frequencies.values() {
        for pair in antennas.iter().permutations(2) {
            let (from, to) = (*pair[0], *pair[1]);
            let delta = (to.0 as isize - from.0 as isize, to.1 as isize - from.1 as isize);
            let mut line = successors(Some(to), |&pos| grid.step(pos, delta));
            if part == 1 {
                if let Some(pos) = line.nth(1) {antinodes.set(grid.index_of(pos), true)}
            } else {
                for pos in line {antinodes.set(grid.index_of(pos), true)}
            }
        }
    }
    antinodes.count_ones().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE), "14");
        assert_eq!(solve(2, EXAMPLE), "34");
    }

    #[test]
    fn resonant_harmonics() {
        let grid = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        assert_eq!(solve(2, grid), "9");
    }

    #[test]
    fn lone_antenna_has_no_antinodes() {
        assert_eq!(solve(1, "....\n.a..\n....\n..B."), "0");
        assert_eq!(solve(2, "....\n.a..\n....\n..B."), "0");
    }
}
