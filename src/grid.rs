//! Byte grids and the four-way movement most of the map puzzles share.

use std::collections::VecDeque;
use std::fmt;
use std::ops::{Index, IndexMut};

pub type Pos = (usize, usize);

/// Up, right, down, left: turning right is `(dir + 1) % 4`.
pub const DIRS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

pub const UNREACHABLE: u32 = u32::MAX;

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub fn parse(input: &str) -> Grid {
        let lines = input.trim().lines().map(str::trim_end).collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |line| line.len());
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for line in &lines {
            assert_eq!(line.len(), cols, "ragged grid row {:?}", line);
            cells.extend_from_slice(line.as_bytes());
        }
        Grid {cells, rows: lines.len(), cols}
    }

    pub fn filled(rows: usize, cols: usize, cell: u8) -> Grid {
        Grid {cells: vec![cell; rows * cols], rows, cols}
    }

    pub fn len(&self) -> usize {self.cells.len()}

    pub fn index_of(&self, (r, c): Pos) -> usize {r * self.cols + c}

    pub fn step(&self, (r, c): Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let r = r.checked_add_signed(dr)?;
        let c = c.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    pub fn at(&self, pos: Pos, delta: (isize, isize)) -> Option<u8> {
        self.step(pos, delta).map(|pos| self[pos])
    }

    pub fn find(&self, cell: u8) -> Option<Pos> {
        self.cells.iter().position(|&x| x == cell).map(|i| (i / self.cols, i % self.cols))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0 .. self.rows).flat_map(move |r| (0 .. cols).map(move |c| (r, c)))
    }

    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        DIRS.iter().filter_map(move |&dir| self.step(pos, dir))
    }

    /// Steps from `start` to every cell reachable through cells accepted by `open`,
    /// indexed like `index_of`.
    pub fn bfs(&self, start: Pos, open: impl Fn(u8) -> bool) -> Vec<u32> {
        let mut dist = vec![UNREACHABLE; self.len()];
        dist[self.index_of(start)] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            let d = dist[self.index_of(pos)];
            for next in self.neighbours(pos) {
                let ni = self.index_of(next);
                if dist[ni] == UNREACHABLE && open(self[next]) {
                    dist[ni] = d + 1;
                    queue.push_back(next);
                }
            }
        }
        dist
    }
}

impl Index<Pos> for Grid {
    type Output = u8;
    fn index(&self, pos: Pos) -> &u8 {&self.cells[self.index_of(pos)]}
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut u8 {
        let i = self.index_of(pos);
        &mut self.cells[i]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (ri, row) in self.cells.chunks(self.cols).enumerate() {
            if ri > 0 {writeln!(f)?}
            f.write_str(&String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid {}x{}\n{}", self.rows, self.cols, self)
    }
}
