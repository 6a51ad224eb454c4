use bitvec::prelude::*;

use crate::grid::{Grid, Pos};

fn climbs(grid: &Grid, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    grid.neighbours(pos).filter(move |&next| grid[next] == grid[pos] + 1)
}

fn score(grid: &Grid, trailhead: Pos) -> usize {
    let mut seen = bitvec![0; grid.len()];
    let mut stack = vec![trailhead];
    let mut peaks = 0;
    while let Some(pos) = stack.pop() {
        if seen.replace(grid.index_of(pos), true) {continue}
        if grid[pos] == b'9' {peaks += 1}
        stack.extend(climbs(grid, pos));
    }
    peaks
}

/// Number of distinct trails from every cell up to any 9, filled from the top down.
fn ratings(grid: &Grid) -> Vec<usize> {
    let mut trails = vec![0; grid.len()];
    for height in (b'0' ..= b'9').rev() {
        for pos in grid.positions().filter(|&pos| grid[pos] == height) {
            let count = if height == b'9' {1} else {
                climbs(grid, pos).map(|next| trails[grid.index_of(next)]).sum()
            };
            trails[grid.index_of(pos)] = count;
        }
    }
    trails
}

pub fn solve(part: u8, input: &str) -> String {
    let grid = Grid::parse(input);
    let trailheads = grid.positions().filter(|&pos| grid[pos] == b'0');
    if part == 1 {
        trailheads.map(|pos| score(&grid, pos)).sum::<usize>().to_string()
    } else {
        let trails = ratings(&grid);
        trailheads.map(|pos| trails[grid.index_of(pos)]).sum::<usize>().to_string()
    }
}
