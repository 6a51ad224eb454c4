use bitvec::prelude::*;

/// Page numbers are two digits, so `rules[100 * x + y]` means x goes before y.
fn parse(input: &str) -> (BitVec, Vec<Vec<usize>>) {
    let mut lines = input.trim().lines().map(str::trim);
    let mut rules = bitvec![0; 100 * 100];
    for line in lines.by_ref().take_while(|line| !line.is_empty()) {
        let Some((x, y)) = line.split_once('|') else {panic!("cannot parse rule {}", line)};
        let (x, y) = (x.parse::<usize>().expect(line), y.parse::<usize>().expect(line));
        assert!(x < 100 && y < 100, "page numbers out of range in {}", line);
        rules.set(100 * x + y, true);
    }
    let updates = lines.map(|line|
        line.split(',').map(|page| page.parse().expect(line)).collect()
    ).collect();
    (rules, updates)
}

fn is_ordered(rules: &BitSlice, update: &[usize]) -> bool {
    (0 .. update.len()).all(|x| (x + 1 .. update.len()).all(|y| !rules[100 * update[y] + update[x]]))
}

fn reorder(rules: &BitSlice, update: &[usize]) -> Vec<usize> {
    let mut unsorted = update.to_vec();
    let mut sorted = Vec::with_capacity(unsorted.len());
    while !unsorted.is_empty() {
        let first_at = unsorted.iter().position(|&x|
            unsorted.iter().all(|&y| !rules[100 * y + x])
        ).expect("ordering rules form a cycle");
        sorted.push(unsorted.remove(first_at));
    }
    sorted
}

pub fn solve(part: u8, input: &str) -> String {
    let (rules, updates) = parse(input);
    updates.iter().filter_map(|update| {
        match (part, is_ordered(&rules, update)) {
            (1, true) => Some(update[update.len() / 2]),
            (2, false) => Some(reorder(&rules, update)[update.len() / 2]),
            _ => None
        }
    }).sum::<usize>().to_string()
}
