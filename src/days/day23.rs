use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

type Network<'a> = FxHashMap<&'a str, FxHashSet<&'a str>>;

fn parse(input: &str) -> Network {
    let mut network = Network::default();
    for line in input.split_whitespace() {
        let Some((a, b)) = line.split_once('-') else {panic!("cannot parse link {}", line)};
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }
    network
}

fn triangles<'a>(network: &Network<'a>) -> Vec<[&'a str; 3]> {
    let mut found = vec![];
    for (&a, links) in network {
        for &b in links.iter().filter(|&&b| b > a) {
            for &c in network[b].iter().filter(|&&c| c > b && links.contains(c)) {
                found.push([a, b, c]);
            }
        }
    }
    found
}

/// Bron-Kerbosch with pivoting, keeping the largest clique seen.
fn grow_clique<'a>(
    network: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: FxHashSet<&'a str>,
    mut excluded: FxHashSet<&'a str>,
    largest: &mut Vec<&'a str>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if clique.len() > largest.len() {largest.clone_from(clique)}
        return;
    }
    let pivot = candidates.union(&excluded).max_by_key(|&&v| network[v].len()).copied();
    let branches = candidates.iter()
        .filter(|&&v| pivot.map_or(true, |pivot| !network[pivot].contains(v)))
        .copied()
        .collect::<Vec<_>>();
    for v in branches {
        let links = &network[v];
        clique.push(v);
        grow_clique(
            network,
            clique,
            candidates.intersection(links).copied().collect(),
            excluded.intersection(links).copied().collect(),
            largest,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

fn password(network: &Network) -> String {
    let mut largest = vec![];
    grow_clique(network, &mut vec![], network.keys().copied().collect(), FxHashSet::default(), &mut largest);
    largest.sort_unstable();
    largest.iter().join(",")
}

pub fn solve(part: u8, input: &str) -> String {
    let network = parse(input);
    if part == 1 {
        triangles(&network).iter()
            .filter(|computers| computers.iter().any(|name| name.starts_with('t')))
            .count().to_string()
    } else {
        password(&network)
    }
}
