//! Shared builders and invariant checks for the integration tests.
#![allow(dead_code)]

use std::cmp::Ordering;

use webring::domain::{site_order, Ring, RingTree};

/// Builds a network by inserting rings in the given order.
pub fn network(rings: &[(&str, &[&str])]) -> RingTree {
    let mut tree = RingTree::new();
    for (name, sites) in rings {
        tree.insert(Ring::with_sites(*name, sites.iter().copied()));
    }
    tree
}

/// Left descendants sort strictly before a node, right descendants at or after it.
pub fn assert_bst(tree: &RingTree) {
    let mut stack = Vec::new();
    if let Some(root) = tree.root() {
        stack.push((root, None::<String>, None::<String>));
    }
    let mut visited = 0;
    while let Some((idx, lower, upper)) = stack.pop() {
        let node = tree.get_node(idx).expect("linked node must be live");
        let name = node.ring().name().to_string();
        if let Some(lower) = &lower {
            assert!(name.as_str() >= lower.as_str(), "{name} must not sort before {lower}");
        }
        if let Some(upper) = &upper {
            assert!(name.as_str() < upper.as_str(), "{name} must sort before {upper}");
        }
        if let Some(left) = node.left() {
            stack.push((left, lower.clone(), Some(name.clone())));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(name), upper));
        }
        visited += 1;
    }
    assert_eq!(visited, tree.len(), "every stored ring must be reachable");
}

/// Every chain is strictly ascending by (length, name) and starts at its minimum.
pub fn assert_chains_sorted(tree: &RingTree) {
    for (_, node) in tree.iter() {
        let sites: Vec<&str> = node.ring().sites().iter().collect();
        assert_eq!(sites.len(), node.ring().site_count());
        for pair in sites.windows(2) {
            assert_eq!(
                site_order(pair[0], pair[1]),
                Ordering::Less,
                "ring {} out of order: {:?}",
                node.ring().name(),
                sites
            );
        }
        assert_eq!(node.ring().sites().head(), sites.first().copied());
    }
}

pub fn sites_of<'a>(tree: &'a RingTree, ring: &str) -> Vec<&'a str> {
    let idx = tree.find(ring).unwrap_or_else(|| panic!("ring {ring} not found"));
    tree.get(idx).unwrap().sites().iter().collect()
}

pub fn count_of(tree: &RingTree, ring: &str) -> usize {
    sites_of(tree, ring).len()
}
