use itertools::Itertools;

fn parse_reports(input: &str) -> Vec<Vec<i32>> {
    input.trim().lines().map(|line|
        line.split_whitespace().map(|n| n.parse().expect(line)).collect()
    ).collect()
}

fn is_safe(levels: &[i32]) -> bool {
    let mut diffs = levels.iter().tuple_windows().map(|(x, y)| y - x);
    diffs.clone().all(|d| (1 ..= 3).contains(&d)) || diffs.all(|d| (-3 ..= -1).contains(&d))
}

fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels) || (0 .. levels.len()).any(|skip| {
        let mut rest = levels.to_vec();
        rest.remove(skip);
        is_safe(&rest)
    })
}

pub fn solve(part: u8, input: &str) -> String {
    let check = if part == 1 {is_safe} else {is_safe_dampened};
    parse_reports(input).iter().filter(|report| check(report.as_slice())).count().to_string()
}
