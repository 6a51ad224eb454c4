use std::iter::{once, repeat};

use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

type Keypad = [&'static [u8]];
type Route = ArrayVec<u8, 6>;

const NUMERIC: &Keypad = &[b"789", b"456", b"123", b" 0A"];
const DIRECTIONAL: &Keypad = &[b" ^A", b"<v>"];

fn locate(pad: &Keypad, key: u8) -> (usize, usize) {
    pad.iter().enumerate()
        .find_map(|(r, row)| row.iter().position(|&k| k == key).map(|c| (r, c)))
        .unwrap_or_else(|| panic!("no key '{}' on the keypad", key as char))
}

/// Arrow presses that move an arm from `from` to `to` and press it. Only the two L-shaped
/// routes can be optimal: zigzagging makes every keypad upstream travel further.
fn routes(pad: &Keypad, from: u8, to: u8) -> ArrayVec<Route, 2> {
    let ((fr, fc), (tr, tc)) = (locate(pad, from), locate(pad, to));
    let gap = locate(pad, b' ');
    let vertical = repeat(if tr > fr {b'v'} else {b'^'}).take(fr.abs_diff(tr));
    let horizontal = repeat(if tc > fc {b'>'} else {b'<'}).take(fc.abs_diff(tc));

    let mut routes = ArrayVec::<Route, 2>::new();
    if (fr, tc) != gap {
        routes.push(horizontal.clone().chain(vertical.clone()).chain(once(b'A')).collect());
    }
    if (tr, fc) != gap {
        let route = vertical.chain(horizontal).chain(once(b'A')).collect::<Route>();
        if !routes.contains(&route) {routes.push(route)}
    }
    routes
}

#[derive(Default)]
struct Presses {memo: FxHashMap<(u8, u8, usize), u64>}

impl Presses {
    /// Human presses needed for the arm behind `robots` directional keypads to type `keys`,
    /// every arm starting on `A`.
    fn typing(&mut self, keys: &[u8], robots: usize) -> u64 {
        if robots == 0 {return keys.len() as u64}
        once(b'A').chain(keys.iter().copied()).zip(keys.iter().copied())
            .map(|(from, to)| self.moving(from, to, robots))
            .sum()
    }

    fn moving(&mut self, from: u8, to: u8, robots: usize) -> u64 {
        if let Some(&presses) = self.memo.get(&(from, to, robots)) {return presses}
        let presses = routes(DIRECTIONAL, from, to).iter()
            .map(|route| self.typing(route, robots - 1))
            .min()
            .unwrap_or(u64::MAX);
        self.memo.insert((from, to, robots), presses);
        presses
    }

    fn code(&mut self, code: &str, robots: usize) -> u64 {
        once(b'A').chain(code.bytes()).zip(code.bytes()).map(|(from, to)|
            routes(NUMERIC, from, to).iter().map(|route| self.typing(route, robots)).min().unwrap_or(u64::MAX)
        ).sum()
    }
}

fn complexity(presses: &mut Presses, code: &str, robots: usize) -> u64 {
    let numeric = code.bytes().filter(u8::is_ascii_digit).fold(0, |n, digit| 10 * n + (digit - b'0') as u64);
    presses.code(code, robots) * numeric
}

pub fn solve(part: u8, input: &str) -> String {
    let robots = if part == 1 {2} else {25};
    let mut presses = Presses::default();
    input.split_whitespace().map(|code| complexity(&mut presses, code, robots)).sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "029A\n980A\n179A\n456A\n379A\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE), "126384");
        assert_eq!(solve(2, EXAMPLE), "154115708116294");
    }

    #[test]
    fn press_counts() {
        let mut presses = Presses::default();
        assert_eq!(presses.code("029A", 0), 12);
        assert_eq!(presses.code("029A", 1), 28);
        assert_eq!(presses.code("029A", 2), 68);
        assert_eq!(complexity(&mut presses, "029A", 2), 68 * 29);
    }

    #[test]
    fn routes_avoid_the_gap() {
        assert_eq!(routes(NUMERIC, b'A', b'1').as_slice(), [Route::from_iter(*b"^<<A")]);
        assert_eq!(routes(NUMERIC, b'1', b'0').as_slice(), [Route::from_iter(*b">vA")]);
        assert_eq!(routes(DIRECTIONAL, b'<', b'A').as_slice(), [Route::from_iter(*b">>^A")]);
        assert_eq!(routes(DIRECTIONAL, b'A', b'A').as_slice(), [Route::from_iter(*b"A")]);
        assert_eq!(routes(DIRECTIONAL, b'A', b'v').len(), 2);
    }
}
