// src/graph/cycle.rs

//! Cycle detection over raw dependency lists.

use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Find a dependency cycle, if any.
///
/// `deps` maps every asset to its direct dependencies and must be closed
/// (every dependency is itself a key). Start nodes and dependencies are walked
/// in ascending name order, so the reported cycle is deterministic.
///
/// The returned path starts and ends with the re-visited asset, following
/// dependency edges: for `A` depending on `B` and `B` on `A` it is
/// `["A", "B", "A"]`.
pub(crate) fn find_cycle(deps: &BTreeMap<&str, BTreeSet<&str>>) -> Option<Vec<String>> {
    let empty = BTreeSet::new();
    let deps_of = |name: &str| deps.get(name).unwrap_or(&empty).iter();

    // Nodes whose whole dependency closure is known to be acyclic.
    let mut finished: HashSet<&str> = HashSet::new();

    for &start in deps.keys() {
        if finished.contains(start) {
            continue;
        }

        let mut path: Vec<&str> = vec![start];
        let mut visiting: HashSet<&str> = HashSet::from([start]);
        let mut frames = vec![deps_of(start)];

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(&next) => {
                    if visiting.contains(next) {
                        let from = path.iter().position(|n| *n == next).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            path[from..].iter().map(|n| n.to_string()).collect();
                        cycle.push(next.to_string());
                        return Some(cycle);
                    }
                    if finished.contains(next) {
                        continue;
                    }
                    visiting.insert(next);
                    path.push(next);
                    frames.push(deps_of(next));
                }
                None => {
                    frames.pop();
                    if let Some(done) = path.pop() {
                        visiting.remove(done);
                        finished.insert(done);
                    }
                }
            }
        }
    }

    None
}
