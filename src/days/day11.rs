use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

fn children(stone: u64) -> ArrayVec<u64, 2> {
    let mut next = ArrayVec::new();
    if stone == 0 {
        next.push(1);
        return next;
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        next.push(stone / half);
        next.push(stone % half);
    } else {
        next.push(stone * 2024);
    }
    next
}

/// Stones never interact, so only the count per engraved number matters.
fn stones_after(input: &str, blinks: usize) -> u64 {
    let mut stones: FxHashMap<u64, u64> = FxHashMap::default();
    for stone in input.split_whitespace() {
        *stones.entry(stone.parse().expect(stone)).or_insert(0) += 1;
    }
    for _ in 0 .. blinks {
        let mut next = FxHashMap::default();
        for (stone, count) in stones {
            for child in children(stone) {*next.entry(child).or_insert(0) += count}
        }
        stones = next;
    }
    stones.values().sum()
}

pub fn solve(part: u8, input: &str) -> String {
    stones_after(input, if part == 1 {25} else {75}).to_string()
}
