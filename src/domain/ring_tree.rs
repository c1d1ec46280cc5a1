use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::ring::Ring;

/// Tree node in the arena-backed ring network.
#[derive(Debug)]
pub struct RingNode {
    ring: Ring,
    left: Option<Index>,
    right: Option<Index>,
}

impl RingNode {
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn left(&self) -> Option<Index> {
        self.left
    }

    pub fn right(&self) -> Option<Index> {
        self.right
    }
}

/// Where a node hangs: the root reference or one side of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Left(Index),
    Right(Index),
}

/// Unbalanced binary search tree of rings keyed by name.
///
/// Nodes live in a generational arena owned by the tree, so a handle to a
/// removed ring can never resolve to a different ring later. Names that
/// compare equal or greater descend right.
///
/// Not thread-safe; all mutation goes through `&mut self`.
#[derive(Debug, Default)]
pub struct RingTree {
    arena: Arena<RingNode>,
    root: Option<Index>,
}

impl RingTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of rings in the network.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&RingNode> {
        self.arena.get(idx)
    }

    pub fn get(&self, idx: Index) -> Option<&Ring> {
        self.arena.get(idx).map(|node| &node.ring)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Ring> {
        self.arena.get_mut(idx).map(|node| &mut node.ring)
    }

    /// Inserts a ring by strict name comparison: less goes left, anything else right.
    #[instrument(level = "debug", skip(self, ring), fields(ring = %ring.name()))]
    pub fn insert(&mut self, ring: Ring) -> Index {
        let mut slot = Slot::Root;
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.arena[idx];
            if ring.name() < node.ring.name() {
                slot = Slot::Left(idx);
                curr = node.left;
            } else {
                slot = Slot::Right(idx);
                curr = node.right;
            }
        }

        let node_idx = self.arena.insert(RingNode {
            ring,
            left: None,
            right: None,
        });
        self.set_child(slot, Some(node_idx));
        trace!(?slot, "ring linked");
        node_idx
    }

    /// Locates a ring by exact name.
    pub fn find(&self, name: &str) -> Option<Index> {
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.arena[idx];
            if name == node.ring.name() {
                return Some(idx);
            }
            curr = if name < node.ring.name() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// Pre-order traversal: node, left subtree, right subtree.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// In-order traversal, i.e. ascending by ring name.
    pub fn iter_inorder(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Post-order traversal: children before their parent.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    pub fn ring_names(&self) -> Vec<&str> {
        self.iter_inorder()
            .map(|(_, node)| node.ring.name())
            .collect()
    }

    /// Number of levels on the longest root-to-leaf path.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.arena.get(idx) {
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }
        max_depth
    }

    pub(crate) fn rings_mut(&mut self) -> impl Iterator<Item = &mut Ring> {
        self.arena.iter_mut().map(|(_, node)| &mut node.ring)
    }

    /// Every node paired with the slot it hangs from, children before parents.
    ///
    /// A slot stays valid until its node is processed: removals only relink
    /// slots inside the subtree being processed or the removed node's own slot.
    pub(crate) fn postorder_slots(&self) -> Vec<(Index, Slot)> {
        let mut order = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, Slot::Root, false));
        }

        while let Some((idx, slot, visited)) = stack.pop() {
            if visited {
                order.push((idx, slot));
                continue;
            }
            if let Some(node) = self.arena.get(idx) {
                stack.push((idx, slot, true));
                if let Some(right) = node.right {
                    stack.push((right, Slot::Right(idx), false));
                }
                if let Some(left) = node.left {
                    stack.push((left, Slot::Left(idx), false));
                }
            }
        }
        order
    }

    pub(crate) fn set_child(&mut self, slot: Slot, child: Option<Index>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Left(parent) => {
                if let Some(node) = self.arena.get_mut(parent) {
                    node.left = child;
                }
            }
            Slot::Right(parent) => {
                if let Some(node) = self.arena.get_mut(parent) {
                    node.right = child;
                }
            }
        }
    }

    /// Removes the ring at `idx`, which hangs from `slot`, keeping BST order.
    ///
    /// With two children the in-order successor's ring is moved into `idx`
    /// and the successor's node is the one freed, so `idx` stays live.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn remove_node(&mut self, idx: Index, slot: Slot) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };

        match (node.left, node.right) {
            (None, None) => {
                self.arena.remove(idx);
                self.set_child(slot, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                self.arena.remove(idx);
                self.set_child(slot, Some(child));
            }
            (Some(_), Some(right)) => {
                let mut parent = idx;
                let mut successor = right;
                while let Some(left) = self.arena[successor].left {
                    parent = successor;
                    successor = left;
                }

                let successor_right = self.arena[successor].right;
                if parent == idx {
                    self.arena[parent].right = successor_right;
                } else {
                    self.arena[parent].left = successor_right;
                }

                if let Some(absorbed) = self.arena.remove(successor) {
                    let replaced = std::mem::replace(&mut self.arena[idx].ring, absorbed.ring);
                    debug!(
                        removed = replaced.name(),
                        successor = self.arena[idx].ring.name(),
                        "successor moved into removed ring's node"
                    );
                }
            }
        }
    }

    /// Drops a node from the arena without relinking anything.
    pub(crate) fn free(&mut self, idx: Index) -> Option<Ring> {
        self.arena.remove(idx).map(|node| node.ring)
    }
}

/// Pre-order iterator over `(handle, node)` pairs.
#[derive(Debug)]
pub struct TreeIterator<'a> {
    tree: &'a RingTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a RingTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a RingNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.tree.get_node(current_idx)?;
        // Right pushed first so the left subtree is visited first
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some((current_idx, node))
    }
}

#[derive(Debug)]
pub struct InOrderIterator<'a> {
    tree: &'a RingTree,
    stack: Vec<Index>,
    curr: Option<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a RingTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            curr: tree.root(),
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (Index, &'a RingNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.curr {
            self.stack.push(idx);
            self.curr = self.tree.get_node(idx).and_then(|node| node.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.get_node(idx)?;
        self.curr = node.right;
        Some((idx, node))
    }
}

#[derive(Debug)]
pub struct PostOrderIterator<'a> {
    tree: &'a RingTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a RingTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a RingNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                if let Some(right) = node.right {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}
