use bitvec::prelude::*;

use crate::grid::{Grid, Pos, DIRS};

/// A region has as many sides as corners; each cell contributes its convex and concave ones.
fn corners(grid: &Grid, pos: Pos) -> usize {
    let same = |delta: (isize, isize)| grid.at(pos, delta) == Some(grid[pos]);
    (0 .. 4).filter(|&d| {
        let (a, b) = (DIRS[d], DIRS[(d + 1) % 4]);
        let (along_a, along_b) = (same(a), same(b));
        !along_a && !along_b || along_a && along_b && !same((a.0 + b.0, a.1 + b.1))
    }).count()
}

pub fn solve(part: u8, input: &str) -> String {
    let grid = Grid::parse(input);
    let mut seen = bitvec![0; grid.len()];
    let mut price = 0;
    for start in grid.positions() {
        if seen.replace(grid.index_of(start), true) {continue}
        let (mut area, mut perimeter, mut sides) = (0, 0, 0);
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            area += 1;
            sides += corners(&grid, pos);
            for dir in DIRS {
                match grid.step(pos, dir) {
                    Some(next) if grid[next] == grid[start] => {
                        if !seen.replace(grid.index_of(next), true) {stack.push(next)}
                    },
                    _ => perimeter += 1,
                }
            }
        }
        price += area * if part == 1 {perimeter} else {sides};
    }
    price.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGER: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    #[test]
    fn examples() {
        assert_eq!(solve(1, "AAAA\nBBCD\nBBCC\nEEEC"), "140");
        assert_eq!(solve(2, "AAAA\nBBCD\nBBCC\nEEEC"), "80");
        let holes = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO";
        assert_eq!(solve(1, holes), "772");
        assert_eq!(solve(2, holes), "436");
        assert_eq!(solve(1, LARGER), "1930");
        assert_eq!(solve(2, LARGER), "1206");
    }

    #[test]
    fn concave_sides() {
        assert_eq!(solve(2, "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE"), "236");
        assert_eq!(solve(2, "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA"), "368");
    }
}
