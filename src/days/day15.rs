use arrayvec::ArrayVec;

use crate::grid::{Grid, Pos, DIRS};

const MOVES: &[u8] = b"^>v<";

fn parse(input: &str) -> (Grid, Vec<usize>) {
    let input = input.replace("\r\n", "\n");
    let Some((map, moves)) = input.trim().split_once("\n\n") else {
        panic!("expected a map and a move list separated by a blank line")
    };
    let moves = moves.bytes().filter(|b| !b.is_ascii_whitespace()).map(|b|
        MOVES.iter().position(|&m| m == b).unwrap_or_else(|| panic!("unexpected move '{}'", b as char))
    ).collect();
    (Grid::parse(map), moves)
}

fn widen(grid: &Grid) -> Grid {
    let wide = grid.to_string().chars().map(|cell| match cell {
        '#' => "##", 'O' => "[]", '.' => "..", '@' => "@.", '\n' => "\n",
        cell => panic!("unexpected warehouse cell '{}'", cell)
    }).collect::<String>();
    Grid::parse(&wide)
}

/// Moves the robot one step, along with everything it pushes, unless a wall is in the way.
fn push(grid: &mut Grid, robot: Pos, delta: (isize, isize)) -> Pos {
    let mut moving = vec![robot];
    let mut shifts = vec![];
    let mut i = 0;
    while let Some(&pos) = moving.get(i) {
        i += 1;
        let Some(next) = grid.step(pos, delta) else {return robot};
        shifts.push((pos, next));
        let pushed: ArrayVec<Pos, 2> = match grid[next] {
            b'#' => return robot,
            b'.' => ArrayVec::new(),
            b'O' => [next].into_iter().collect(),
            b'[' => [next, (next.0, next.1 + 1)].into_iter().collect(),
            b']' => [next, (next.0, next.1 - 1)].into_iter().collect(),
            cell => panic!("unexpected warehouse cell '{}'", cell as char)
        };
        for pos in pushed {
            if !moving.contains(&pos) {moving.push(pos)}
        }
    }

    let cargo = shifts.iter().map(|&(from, to)| (to, grid[from])).collect::<Vec<_>>();
    for &(from, _) in &shifts {grid[from] = b'.'}
    for (to, cell) in cargo {grid[to] = cell}
    shifts[0].1
}

fn run(mut grid: Grid, moves: &[usize]) -> Grid {
    let mut robot = grid.find(b'@').expect("no robot in the warehouse");
    for &dir in moves {robot = push(&mut grid, robot, DIRS[dir])}
    grid
}

fn gps_sum(grid: &Grid) -> usize {
    grid.positions().filter(|&pos| matches!(grid[pos], b'O' | b'['))
        .map(|(r, c)| 100 * r + c)
        .sum()
}

pub fn solve(part: u8, input: &str) -> String {
    let (grid, moves) = parse(input);
    let grid = if part == 1 {grid} else {widen(&grid)};
    gps_sum(&run(grid, &moves)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const LARGE: &str = "\
##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

    #[test]
    fn example() {
        assert_eq!(solve(1, SMALL), "2028");
        assert_eq!(solve(1, LARGE), "10092");
        assert_eq!(solve(2, LARGE), "9021");
    }

    #[test]
    fn narrow_boxes_move_in_a_row() {
        let (grid, moves) = parse(SMALL);
        assert_eq!(run(grid, &moves).to_string(), "\
########
#....OO#
##.....#
#.....O#
#.#O@..#
#...O..#
#...O..#
########");
    }

    #[test]
    fn wide_boxes_push_each_other() {
        let (grid, moves) = parse("#######\n#...#.#\n#.....#\n#..OO@#\n#..O..#\n#.....#\n#######\n\n<vv<<^^<<^^\n");
        let grid = widen(&grid);
        assert_eq!(grid.to_string().lines().nth(3), Some("##....[][]@.##"));
        let grid = run(grid, &moves);
        assert_eq!(grid.to_string(), "\
##############
##...[].##..##
##...@.[]...##
##....[]....##
##..........##
##..........##
##############");
        assert_eq!(gps_sum(&grid), 618);
    }
}
