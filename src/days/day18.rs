use crate::grid::{Grid, Pos, UNREACHABLE};

const SIZE: usize = 71;
const FALLEN: usize = 1024;

/// Falling bytes as `(row, col)`; the input lists them as `x,y`.
fn parse(input: &str) -> Vec<Pos> {
    input.trim().lines().map(|line| {
        let Some((x, y)) = line.trim().split_once(',') else {panic!("cannot parse {}", line)};
        (y.parse().expect(line), x.parse().expect(line))
    }).collect()
}

fn shortest_exit(bytes: &[Pos], size: usize) -> Option<u32> {
    let mut memory = Grid::filled(size, size, b'.');
    for &(r, c) in bytes {
        if r < size && c < size {memory[(r, c)] = b'#'}
    }
    let steps = memory.bfs((0, 0), |cell| cell == b'.')[memory.index_of((size - 1, size - 1))];
    (steps != UNREACHABLE).then_some(steps)
}

fn first_blocker(bytes: &[Pos], size: usize) -> Option<Pos> {
    if shortest_exit(bytes, size).is_some() {return None}
    // the exit is reachable after `open` bytes and cut off after `closed`
    let (mut open, mut closed) = (0, bytes.len());
    while closed - open > 1 {
        let mid = (open + closed) / 2;
        if shortest_exit(&bytes[.. mid], size).is_some() {open = mid} else {closed = mid}
    }
    Some(bytes[closed - 1])
}

pub fn solve(part: u8, input: &str) -> String {
    let bytes = parse(input);
    if part == 1 {
        shortest_exit(&bytes[.. FALLEN.min(bytes.len())], SIZE)
            .map_or_else(|| "none".to_string(), |steps| steps.to_string())
    } else {
        first_blocker(&bytes, SIZE)
            .map_or_else(|| "none".to_string(), |(r, c)| format!("{},{}", c, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn example() {
        let bytes = parse(EXAMPLE);
        assert_eq!(bytes[0], (4, 5));
        assert_eq!(shortest_exit(&bytes[.. 12], 7), Some(22));
        assert_eq!(first_blocker(&bytes, 7), Some((1, 6)));
    }

    #[test]
    fn open_memory() {
        assert_eq!(shortest_exit(&[], 7), Some(12));
        assert_eq!(first_blocker(&[(0, 1)], 7), None);
        assert_eq!(solve(2, "1,0\n0,1\n"), "0,1");
    }
}
