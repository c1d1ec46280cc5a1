/*
Rendering of the ring network as a `termtree::Tree`.

Each ring is labelled `name (count): site, site, ...`; children carry an
`L`/`R` marker so a lone child still shows which side it hangs from.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::ring_tree::RingTree;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for RingTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root().and_then(|root| self.get(root).map(|ring| (root, ring))) {
            Some((root_idx, ring)) => {
                let mut tree = Tree::new(ring.to_string());
                build_tree_representation(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty network".to_string()),
        }
    }
}

pub fn build_tree_representation(tree: &RingTree, node_idx: Index, parent_tree: &mut Tree<String>) {
    if let Some(node) = tree.get_node(node_idx) {
        for (side, child) in [("L", node.left()), ("R", node.right())] {
            let Some(child_idx) = child else {
                continue;
            };
            if let Some(ring) = tree.get(child_idx) {
                let mut child_tree = Tree::new(format!("[{side}] {ring}"));
                build_tree_representation(tree, child_idx, &mut child_tree);
                parent_tree.push(child_tree);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ring;

    #[test]
    fn given_network_when_rendered_then_children_marked_by_side() {
        let mut tree = RingTree::new();
        tree.insert(Ring::with_sites("m", ["a.io"]));
        tree.insert(Ring::new("z"));

        let rendered = tree.to_tree_string().to_string();

        assert_eq!(rendered, "m (1): a.io\n└── [R] z (0)\n");
    }

    #[test]
    fn given_empty_network_when_rendered_then_placeholder() {
        assert_eq!(RingTree::new().to_tree_string().to_string(), "Empty network\n");
    }
}
