use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use assetroute::errors::AssetrouteError;
use assetroute::graph::{AssetGraph, NodeDescription};

fn asset_name(i: usize) -> String {
    format!("asset_{:02}", i)
}

// Strategy to generate an acyclic set of node descriptions.
// Asset N may only depend on assets 0..N-1, which rules out cycles.
fn acyclic_descriptions(max_assets: usize) -> impl Strategy<Value = Vec<NodeDescription>> {
    (1..=max_assets).prop_flat_map(|num_assets| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_assets),
            num_assets,
        )
        .prop_map(move |raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    let deps: BTreeSet<String> = if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential.into_iter().map(|d| asset_name(d % i)).collect()
                    };
                    NodeDescription::new(asset_name(i)).with_deps(deps)
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn acyclic_input_builds_and_orders_dependencies_first(
        descs in acyclic_descriptions(12)
    ) {
        let graph = AssetGraph::build(descs.clone()).unwrap();
        let order: Vec<&str> = graph.topological_order().collect();
        prop_assert_eq!(order.len(), descs.len());

        let position: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        for desc in &descs {
            for dep in &desc.deps {
                prop_assert!(
                    position[dep.as_str()] < position[desc.name.as_str()],
                    "{} ordered before its dependency {}", desc.name, dep
                );
            }
        }
    }

    #[test]
    fn order_is_deterministic_regardless_of_input_order(
        descs in acyclic_descriptions(12)
    ) {
        let mut reversed = descs.clone();
        reversed.reverse();

        let a = AssetGraph::build(descs).unwrap();
        let b = AssetGraph::build(reversed).unwrap();

        let first: Vec<&str> = a.topological_order().collect();
        let again: Vec<&str> = a.topological_order().collect();
        let other: Vec<&str> = b.topological_order().collect();
        prop_assert_eq!(&first, &again);
        prop_assert_eq!(&first, &other);
    }

    #[test]
    fn upstream_and_downstream_agree(descs in acyclic_descriptions(10)) {
        let graph = AssetGraph::build(descs).unwrap();
        let names: Vec<&str> = graph.names().collect();

        for &x in &names {
            let up = graph.upstream_of(x).unwrap();
            prop_assert!(!up.contains(x));
            for &y in &names {
                let down = graph.downstream_of(y).unwrap();
                prop_assert_eq!(up.contains(y), down.contains(x));
            }
        }
    }

    #[test]
    fn cyclic_input_reports_a_real_cycle(
        descs in acyclic_descriptions(10),
        pick in any::<usize>(),
    ) {
        prop_assume!(descs.len() >= 2);

        // Close a loop: asset j depends on asset 0, and asset 0 on asset j.
        let j = 1 + pick % (descs.len() - 1);
        let mut descs = descs;
        descs[j].deps.push(asset_name(0));
        descs[0].deps.push(asset_name(j));

        let deps: HashMap<String, Vec<String>> = descs
            .iter()
            .map(|d| (d.name.clone(), d.deps.clone()))
            .collect();

        match AssetGraph::build(descs) {
            Err(AssetrouteError::CycleDetected { path }) => {
                prop_assert!(path.len() >= 2);
                prop_assert_eq!(path.first(), path.last());
                for pair in path.windows(2) {
                    prop_assert!(
                        deps[&pair[0]].contains(&pair[1]),
                        "{} does not depend on {}", pair[0], pair[1]
                    );
                }
            }
            other => prop_assert!(false, "Expected CycleDetected, got: {:?}", other),
        }
    }
}
