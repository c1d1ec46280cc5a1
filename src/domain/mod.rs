//! Domain layer: the ring network data structure and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod network;
pub mod ring;
pub mod ring_tree;
pub mod site_chain;
pub mod tree_traits;

pub use ring::Ring;
pub use ring_tree::{InOrderIterator, PostOrderIterator, RingNode, RingTree, TreeIterator};
pub use site_chain::{site_order, SiteChain, SiteIter};
pub use tree_traits::TreeNodeConvert;
