use regex::Regex;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug)]
struct Machine {a: (i64, i64), b: (i64, i64), prize: (i64, i64)}

impl Machine {
    /// Cheapest win, if any. Two independent buttons give at most one combination.
    fn tokens(&self, offset: i64) -> Option<i64> {
        let Machine {a, b, prize} = self;
        let (px, py) = (prize.0 + offset, prize.1 + offset);
        let det = a.0 * b.1 - a.1 * b.0;
        if det == 0 {return None}
        let (a_det, b_det) = (px * b.1 - py * b.0, py * a.0 - px * a.1);
        if a_det % det != 0 || b_det % det != 0 {return None}
        let (presses_a, presses_b) = (a_det / det, b_det / det);
        (presses_a >= 0 && presses_b >= 0).then_some(3 * presses_a + presses_b)
    }
}

fn parse(input: &str) -> Vec<Machine> {
    Regex::new(r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)")
        .expect("machine pattern")
        .captures_iter(input)
        .map(|m| {
            let n = |i: usize| m[i].parse::<i64>().unwrap();
            Machine {a: (n(1), n(2)), b: (n(3), n(4)), prize: (n(5), n(6))}
        })
        .collect()
}

pub fn solve(part: u8, input: &str) -> String {
    let offset = if part == 1 {0} else {PRIZE_OFFSET};
    parse(input).iter().filter_map(|machine| machine.tokens(offset)).sum::<i64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE), "480");
        assert_eq!(solve(2, EXAMPLE), "875318608908");
    }

    #[test]
    fn far_prizes_change_winners() {
        let machines = parse(EXAMPLE);
        assert_eq!(machines.len(), 4);
        assert_eq!(machines[0].tokens(0), Some(280));
        assert_eq!(machines[1].tokens(0), None);
        assert!(machines[0].tokens(PRIZE_OFFSET).is_none());
        assert!(machines[1].tokens(PRIZE_OFFSET).is_some());
    }
}
