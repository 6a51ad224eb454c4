fn parse(input: &str) -> (Vec<&str>, Vec<&str>) {
    let mut lines = input.lines().map(str::trim);
    let towels = lines.next().unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|towel| !towel.is_empty())
        .collect();
    let designs = lines.filter(|line| !line.is_empty()).collect();
    (towels, designs)
}

/// Ways to lay `design` out of towels, counted over every prefix length.
fn arrangements(design: &str, towels: &[&str]) -> u64 {
    let mut ways = vec![0; design.len() + 1];
    ways[0] = 1;
    for at in 0 .. design.len() {
        if ways[at] == 0 {continue}
        for towel in towels.iter().filter(|towel| design[at ..].starts_with(*towel)) {
            ways[at + towel.len()] += ways[at];
        }
    }
    ways[design.len()]
}

pub fn solve(part: u8, input: &str) -> String {
    let (towels, designs) = parse(input);
    let ways = designs.iter().map(|design| arrangements(design, &towels));
    let answer = if part == 1 {ways.filter(|&n| n > 0).count() as u64} else {ways.sum()};
    answer.to_string()
}
