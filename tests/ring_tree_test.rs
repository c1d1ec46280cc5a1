//! Tests for RingTree insertion, lookup and traversal

mod common;

use common::{assert_bst, network};
use webring::domain::{Ring, RingTree, TreeNodeConvert};

#[test]
fn given_m_a_z_when_inserted_then_root_m_with_a_left_and_z_right() {
    let tree = network(&[("m", &[]), ("a", &[]), ("z", &[])]);

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(root.ring().name(), "m");
    assert_eq!(tree.get(root.left().unwrap()).unwrap().name(), "a");
    assert_eq!(tree.get(root.right().unwrap()).unwrap().name(), "z");
    assert_bst(&tree);
}

#[test]
fn given_insertion_orders_when_building_then_bst_holds_after_each_insert() {
    let mut tree = RingTree::new();
    for name in ["news", "art", "zines", "blogs", "music", "retro", "games", "code", "xyz"] {
        tree.insert(Ring::new(name));
        assert_bst(&tree);
    }

    assert_eq!(tree.len(), 9);
    assert_eq!(
        tree.ring_names(),
        vec!["art", "blogs", "code", "games", "music", "news", "retro", "xyz", "zines"]
    );
}

#[test]
fn given_uppercase_names_when_inserted_then_byte_order_applies() {
    let tree = network(&[("a", &[]), ("B", &[])]);
    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(tree.get(root.left().unwrap()).unwrap().name(), "B");
}

#[test]
fn given_network_when_finding_then_descends_to_ring() {
    let mut tree = network(&[("m", &["a"]), ("c", &[]), ("t", &[])]);

    assert!(tree.find("t").is_some());
    assert!(tree.find("q").is_none());

    let c = tree.find("c").unwrap();
    assert!(tree.get_mut(c).unwrap().add_site("new.site"));
    assert_eq!(tree.get(tree.find("c").unwrap()).unwrap().site_count(), 1);
}

#[test]
fn given_empty_tree_then_no_root_no_depth() {
    let tree = RingTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.iter().count(), 0);
    assert_eq!(tree.iter_inorder().count(), 0);
    assert_eq!(tree.iter_postorder().count(), 0);
}

#[test]
fn given_network_when_rendered_then_tree_lists_rings_with_sides() {
    let tree = network(&[("m", &["b.io", "a.io"]), ("c", &["x"]), ("t", &[])]);

    let expected = "m (2): a.io, b.io\n├── [L] c (1): x\n└── [R] t (0)\n";
    assert_eq!(tree.to_tree_string().to_string(), expected);
}
