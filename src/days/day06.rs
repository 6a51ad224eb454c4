use bitvec::prelude::*;

use crate::grid::{Grid, Pos, DIRS};

const FACINGS: &[u8] = b"^>v<";

/// Walks from `pos` with the extra `obstacle` in place and reports whether the guard
/// ever repeats a position and facing.
fn loops(grid: &Grid, mut pos: Pos, mut dir: usize, obstacle: Pos) -> bool {
    let mut seen = bitvec![0; grid.len() * 4];
    loop {
        if seen.replace(grid.index_of(pos) * 4 + dir, true) {return true}
        match grid.step(pos, DIRS[dir]) {
            None => return false,
            Some(next) if next == obstacle || grid[next] == b'#' => dir = (dir + 1) % 4,
            Some(next) => pos = next,
        }
    }
}

pub fn solve(part: u8, input: &str) -> String {
    let grid = Grid::parse(input);
    let mut pos = grid.positions().find(|&pos| FACINGS.contains(&grid[pos]))
        .expect("no guard on the map");
    let mut dir = FACINGS.iter().position(|&facing| facing == grid[pos]).unwrap_or(0);

    let mut visited = bitvec![0; grid.len()];
    visited.set(grid.index_of(pos), true);
    let mut loop_spots = 0;
    while let Some(next) = grid.step(pos, DIRS[dir]) {
        if grid[next] == b'#' {
            dir = (dir + 1) % 4;
            continue;
        }
        // an obstacle on a cell already walked through would have changed the path earlier
        if part == 2 && !visited[grid.index_of(next)] && loops(&grid, pos, dir, next) {
            loop_spots += 1;
        }
        visited.set(grid.index_of(next), true);
        pos = next;
    }

    let answer = if part == 1 {visited.count_ones()} else {loop_spots};
    answer.to_string()
}
