use std::iter::zip;

use rustc_hash::FxHashMap;
use tracing::warn;

fn parse_lists(input: &str) -> (Vec<i64>, Vec<i64>) {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        let pair = line.split_whitespace().map(str::parse).collect::<Result<Vec<i64>, _>>();
        match pair.as_deref() {
            Ok(&[left, right]) => {
                lefts.push(left);
                rights.push(right);
            },
            _ => warn!("skipping invalid line {:?}", line),
        }
    }
    (lefts, rights)
}

pub fn solve(part: u8, input: &str) -> String {
    let (mut lefts, mut rights) = parse_lists(input);
    if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        zip(lefts, rights).map(|(left, right)| left.abs_diff(right)).sum::<u64>().to_string()
    } else {
        let mut counts: FxHashMap<i64, i64> = FxHashMap::default();
        for right in rights {*counts.entry(right).or_insert(0) += 1}
        lefts.iter().map(|left| left * counts.get(left).unwrap_or(&0)).sum::<i64>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE), "11");
        assert_eq!(solve(2, EXAMPLE), "31");
    }

    #[test]
    fn skips_malformed_lines() {
        let input = "3   4\nthree four\n4   3 7\n\n2   5\n";
        assert_eq!(parse_lists(input), (vec![3, 2], vec![4, 5]));
        assert_eq!(solve(1, input), "4");
    }
}
