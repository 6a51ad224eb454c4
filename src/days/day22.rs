use std::iter::successors;

use itertools::Itertools;

const PRUNE: u64 = (1 << 24) - 1;
/// Four price changes in -9..=9, packed base 19.
const SEQUENCES: usize = 19 * 19 * 19 * 19;

fn next_secret(secret: u64) -> u64 {
    let secret = (secret ^ secret << 6) & PRUNE;
    let secret = (secret ^ secret >> 5) & PRUNE;
    (secret ^ secret << 11) & PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    successors(Some(seed), |&secret| Some(next_secret(secret))).take(2001)
}

fn parse(input: &str) -> Vec<u64> {
    input.split_whitespace().map(|n| n.parse().expect(n)).collect()
}

/// Bananas earned by the best selling sequence; each buyer sells on its first occurrence.
fn best_bananas(seeds: &[u64]) -> u32 {
    let mut bananas = vec![0; SEQUENCES];
    let mut last_buyer = vec![usize::MAX; SEQUENCES];
    for (buyer, &seed) in seeds.iter().enumerate() {
        let prices = secrets(seed).map(|secret| (secret % 10) as usize);
        for (a, b, c, d, e) in prices.tuple_windows() {
            let sequence = [b + 9 - a, c + 9 - b, d + 9 - c, e + 9 - d].iter().fold(0, |key, change| key * 19 + change);
            if last_buyer[sequence] != buyer {
                last_buyer[sequence] = buyer;
                bananas[sequence] += e as u32;
            }
        }
    }
    bananas.into_iter().max().unwrap_or(0)
}

pub fn solve(part: u8, input: &str) -> String {
    let seeds = parse(input);
    if part == 1 {
        seeds.iter().filter_map(|&seed| secrets(seed).last()).sum::<u64>().to_string()
    } else {
        best_bananas(&seeds).to_string()
    }
}
