use regex::Regex;

const FLOOR: (i64, i64) = (101, 103);

#[derive(Clone, Copy, Debug)]
struct Robot {pos: (i64, i64), vel: (i64, i64)}

impl Robot {
    fn at(&self, seconds: i64, (width, height): (i64, i64)) -> (i64, i64) {
        (
            (self.pos.0 + self.vel.0 * seconds).rem_euclid(width),
            (self.pos.1 + self.vel.1 * seconds).rem_euclid(height),
        )
    }
}

fn parse(input: &str) -> Vec<Robot> {
    Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)")
        .expect("robot pattern")
        .captures_iter(input)
        .map(|m| {
            let n = |i: usize| m[i].parse::<i64>().unwrap();
            Robot {pos: (n(1), n(2)), vel: (n(3), n(4))}
        })
        .collect()
}

fn safety_factor(robots: &[Robot], floor: (i64, i64), seconds: i64) -> usize {
    let (mid_x, mid_y) = (floor.0 / 2, floor.1 / 2);
    let mut quadrants = [0; 4];
    for robot in robots {
        let (x, y) = robot.at(seconds, floor);
        if x == mid_x || y == mid_y {continue}
        quadrants[usize::from(x > mid_x) + 2 * usize::from(y > mid_y)] += 1;
    }
    quadrants.iter().product()
}

/// The picture shows up when most robots crowd the middle half of the floor on both axes.
/// Positions repeat after `width * height` seconds, so that bounds the search.
fn picture_time(robots: &[Robot], floor: (i64, i64)) -> Option<i64> {
    let (xs, ys) = (floor.0 / 4 ..= floor.0 * 3 / 4, floor.1 / 4 ..= floor.1 * 3 / 4);
    (0 .. floor.0 * floor.1).find(|&seconds| {
        robots.iter().filter(|robot| {
            let (x, y) = robot.at(seconds, floor);
            xs.contains(&x) && ys.contains(&y)
        }).count() > robots.len() / 2
    })
}

pub fn solve(part: u8, input: &str) -> String {
    let robots = parse(input);
    if part == 1 {
        safety_factor(&robots, FLOOR, 100).to_string()
    } else {
        picture_time(&robots, FLOOR).map_or_else(|| "none".to_string(), |seconds| seconds.to_string())
    }
}
