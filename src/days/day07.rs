fn parse(input: &str) -> Vec<(u64, Vec<u64>)> {
    input.trim().lines().map(|line| {
        let Some((target, nums)) = line.split_once(':') else {panic!("cannot parse {}", line)};
        (target.trim().parse().expect(line), nums.split_whitespace().map(|n| n.parse().expect(line)).collect())
    }).collect()
}

fn decade_above(n: u64) -> u64 {
    10u64.pow(n.checked_ilog10().unwrap_or(0) + 1)
}

/// Operators apply left to right, so peel them off the right end of the equation.
fn solvable(target: u64, nums: &[u64], concat: bool) -> bool {
    let Some((&last, rest)) = nums.split_last() else {return false};
    if rest.is_empty() {return target == last}
    if last == 0 && target == 0 {return true}
    target >= last && solvable(target - last, rest, concat) ||
    last != 0 && target % last == 0 && solvable(target / last, rest, concat) ||
    concat && target % decade_above(last) == last && solvable(target / decade_above(last), rest, concat)
}

pub fn solve(part: u8, input: &str) -> String {
    parse(input).iter()
        .filter(|(target, nums)| solvable(*target, nums, part == 2))
        .map(|(target, _)| target)
        .sum::<u64>().to_string()
}
