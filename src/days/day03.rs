use regex::Regex;

pub fn solve(part: u8, input: &str) -> String {
    let instruction = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern");
    let mut enabled = true;
    instruction.captures_iter(input).map(|m| {
        match &m[0] {
            "do()" => {enabled = true; 0},
            "don't()" => {enabled = part == 1; 0},
            _ if enabled => m[1].parse::<u64>().unwrap() * m[2].parse::<u64>().unwrap(),
            _ => 0
        }
    }).sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let memory = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(solve(1, memory), "161");
        let memory = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(solve(1, memory), "161");
        assert_eq!(solve(2, memory), "48");
    }

    #[test]
    fn operands_have_at_most_three_digits() {
        assert_eq!(solve(1, "mul(1000,2)mul(123,4)mul( 1,2)"), "492");
    }
}
