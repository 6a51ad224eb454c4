use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bitvec::prelude::*;

use crate::grid::{Grid, Pos, DIRS};

const TURN: u32 = 1000;
const EAST: usize = 1;

fn state(grid: &Grid, pos: Pos, dir: usize) -> usize {grid.index_of(pos) * 4 + dir}

/// Lowest score to reach every position and facing from the start, facing east.
fn lowest_scores(grid: &Grid, start: Pos) -> Vec<u32> {
    let mut best = vec![u32::MAX; grid.len() * 4];
    best[state(grid, start, EAST)] = 0;
    let mut queue = BinaryHeap::from([Reverse((0, start, EAST))]);
    while let Some(Reverse((score, pos, dir))) = queue.pop() {
        if score > best[state(grid, pos, dir)] {continue}
        let forward = grid.step(pos, DIRS[dir])
            .filter(|&next| grid[next] != b'#')
            .map(|next| (score + 1, next, dir));
        let turns = [(dir + 1) % 4, (dir + 3) % 4].map(|turned| (score + TURN, pos, turned));
        for (score, pos, dir) in forward.into_iter().chain(turns) {
            let known = &mut best[state(grid, pos, dir)];
            if score < *known {
                *known = score;
                queue.push(Reverse((score, pos, dir)));
            }
        }
    }
    best
}

/// Walks back from the best finishing states through every move that kept the score optimal.
fn best_seats(grid: &Grid, best: &[u32], end: Pos, lowest: u32) -> usize {
    let mut on_path = bitvec![0; best.len()];
    let mut stack = (0 .. 4).filter(|&dir| best[state(grid, end, dir)] == lowest)
        .map(|dir| (end, dir))
        .collect::<Vec<_>>();
    while let Some((pos, dir)) = stack.pop() {
        if on_path.replace(state(grid, pos, dir), true) {continue}
        let score = best[state(grid, pos, dir)];
        if let Some(prev) = grid.step(pos, DIRS[(dir + 2) % 4]) {
            if score.checked_sub(1) == Some(best[state(grid, prev, dir)]) {stack.push((prev, dir))}
        }
        for turned in [(dir + 1) % 4, (dir + 3) % 4] {
            if score.checked_sub(TURN) == Some(best[state(grid, pos, turned)]) {stack.push((pos, turned))}
        }
    }
    on_path.chunks(4).filter(|facings| facings.any()).count()
}

pub fn solve(part: u8, input: &str) -> String {
    let grid = Grid::parse(input);
    let start = grid.find(b'S').expect("no start tile");
    let end = grid.find(b'E').expect("no end tile");
    let best = lowest_scores(&grid, start);
    let lowest = (0 .. 4).map(|dir| best[state(&grid, end, dir)]).min().unwrap_or(u32::MAX);
    if lowest == u32::MAX {return "none".to_string()}
    if part == 1 {lowest.to_string()} else {best_seats(&grid, &best, end, lowest).to_string()}
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn examples() {
        assert_eq!(solve(1, FIRST), "7036");
        assert_eq!(solve(2, FIRST), "45");
        assert_eq!(solve(1, SECOND), "11048");
        assert_eq!(solve(2, SECOND), "64");
    }

    #[test]
    fn corridor() {
        assert_eq!(solve(1, "#####\n#S.E#\n#####"), "2");
        assert_eq!(solve(2, "#####\n#S.E#\n#####"), "3");
        assert_eq!(solve(1, "####\n#.E#\n#S##\n####"), "2002");
        assert_eq!(solve(1, "#####\n#S#E#\n#####"), "none");
    }
}
