use crate::grid::{Grid, Pos};

const SAVING: usize = 100;

/// The race track is a single corridor, so a cell's index is its time from the start.
fn track(grid: &Grid) -> Vec<Pos> {
    let start = grid.find(b'S').expect("no start");
    let end = grid.find(b'E').expect("no end");
    let mut path = vec![start];
    let mut prev = None;
    let mut pos = start;
    while pos != end {
        let next = grid.neighbours(pos)
            .find(|&next| grid[next] != b'#' && Some(next) != prev)
            .expect("the track dead-ends before the finish");
        prev = Some(pos);
        pos = next;
        path.push(next);
    }
    path
}

fn cheats(track: &[Pos], max_cheat: usize, min_saving: usize) -> usize {
    track.iter().enumerate().map(|(i, &from)| {
        track.iter().enumerate().skip(i + min_saving).filter(|&(j, &to)| {
            let dist = from.0.abs_diff(to.0) + from.1.abs_diff(to.1);
            dist <= max_cheat && j - i >= dist + min_saving
        }).count()
    }).sum()
}

pub fn solve(part: u8, input: &str) -> String {
    let track = track(&Grid::parse(input));
    cheats(&track, if part == 1 {2} else {20}, SAVING).to_string()
}
