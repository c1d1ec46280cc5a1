//! Summary statistics of a ring network.

use std::fmt;

use crate::domain::RingTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkReport {
    pub rings: usize,
    pub sites: usize,
    pub depth: usize,
    /// `(ring name, site count)` in ascending name order
    pub per_ring: Vec<(String, usize)>,
}

impl NetworkReport {
    pub fn from_tree(tree: &RingTree) -> Self {
        let sites = if tree.is_empty() {
            0
        } else {
            tree.total_surf_chain_length()
        };
        Self {
            rings: tree.len(),
            sites,
            depth: tree.depth(),
            per_ring: tree
                .iter_inorder()
                .map(|(_, node)| (node.ring().name().to_string(), node.ring().site_count()))
                .collect(),
        }
    }
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rings: {}", self.rings)?;
        writeln!(f, "sites: {}", self.sites)?;
        writeln!(f, "depth: {}", self.depth)?;
        for (name, count) in &self.per_ring {
            writeln!(f, "  {name}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ring;

    #[test]
    fn given_empty_network_when_reporting_then_all_zero() {
        let report = NetworkReport::from_tree(&RingTree::new());
        assert_eq!(report.rings, 0);
        assert_eq!(report.sites, 0);
        assert_eq!(report.depth, 0);
        assert!(report.per_ring.is_empty());
    }

    #[test]
    fn given_network_when_reporting_then_counts_in_name_order() {
        let mut tree = RingTree::new();
        tree.insert(Ring::with_sites("m", ["a", "b"]));
        tree.insert(Ring::with_sites("c", ["x"]));

        let report = NetworkReport::from_tree(&tree);

        assert_eq!(report.sites, 3);
        assert_eq!(report.depth, 2);
        assert_eq!(
            report.to_string(),
            "rings: 2\nsites: 3\ndepth: 2\n  c: 1\n  m: 2\n"
        );
    }
}
