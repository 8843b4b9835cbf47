//! Tests for the name-keyed FamilyTree operations

use rstest::{fixture, rstest};

use famtree::domain::FamilyTree;
use famtree::util::testing;

/// Alice
/// ├── Bob
/// │   ├── Dan
/// │   └── Eve
/// └── Carol
///     └── Finn
#[fixture]
fn family() -> FamilyTree {
    testing::init_test_setup();
    let mut tree = FamilyTree::new("Alice", "1960");
    assert!(tree.add_child("Alice", "Bob", "1985"));
    assert!(tree.add_child("Alice", "Carol", "1988"));
    assert!(tree.add_child("Bob", "Dan", "2010"));
    assert!(tree.add_child("Bob", "Eve", "2012"));
    assert!(tree.add_child("Carol", "Finn", "2015"));
    tree
}

// ============================================================
// FindIndividual
// ============================================================

#[rstest]
#[case("Alice")]
#[case("Bob")]
#[case("Eve")]
#[case("Finn")]
fn given_present_name_when_finding_then_returns_matching_node(family: FamilyTree, #[case] name: &str) {
    let idx = family.find_individual(name).expect("member should be found");
    assert_eq!(family.individual(idx).unwrap().name, name);
}

#[rstest]
#[case("Zoe")]
#[case("alice")]
#[case("Bob ")]
#[case("")]
fn given_absent_name_when_finding_then_returns_none(family: FamilyTree, #[case] name: &str) {
    assert!(family.find_individual(name).is_none());
}

// ============================================================
// AddChild
// ============================================================

#[rstest]
fn given_absent_parent_when_adding_then_fails_and_tree_unchanged(mut family: FamilyTree) {
    let before = family.names();

    assert!(!family.add_child("Zoe", "Gus", "2020"));

    assert_eq!(family.names(), before);
}

#[rstest]
fn given_present_parent_when_adding_then_child_appended_last(mut family: FamilyTree) {
    let bob = family.find_individual("Bob").unwrap();
    let before = family.children(bob).len();

    assert!(family.add_child("Bob", "Gus", "2020"));

    let children = family.children(bob);
    assert_eq!(children.len(), before + 1);
    let last = family.individual(*children.last().unwrap()).unwrap();
    assert_eq!(last.name, "Gus");
    assert_eq!(last.birthdate, "2020");
}

#[rstest]
fn given_same_child_twice_when_adding_then_creates_two_members(mut family: FamilyTree) {
    assert!(family.add_child("Dan", "Gus", "2040"));
    assert!(family.add_child("Dan", "Gus", "2040"));

    assert_eq!(family.find_all("Gus").len(), 2);
}

#[rstest]
fn given_duplicate_parent_names_when_adding_then_first_preorder_match_receives_child(
    mut family: FamilyTree,
) {
    // a second "Dan" under Carol, after Bob's Dan in pre-order
    assert!(family.add_child("Carol", "Dan", "2018"));
    assert!(family.add_child("Dan", "Gus", "2040"));

    let dans = family.find_all("Dan");
    assert_eq!(dans.len(), 2);
    assert_eq!(family.children(dans[0]).len(), 1);
    assert!(family.children(dans[1]).is_empty());
}

#[test]
fn given_unvalidated_input_when_adding_then_accepts_it() {
    let mut tree = FamilyTree::new("", "not a date");
    assert!(tree.add_child("", "", ""));
    assert_eq!(tree.len(), 2);
}

// ============================================================
// DeleteMember
// ============================================================

#[rstest]
fn given_root_name_when_deleting_then_fails_and_tree_unchanged(mut family: FamilyTree) {
    let before = family.names();

    assert!(!family.delete_member("Alice"));

    assert_eq!(family.names(), before);
}

#[test]
fn given_descendant_sharing_root_name_when_deleting_then_still_refused() {
    let mut tree = FamilyTree::new("Alice", "1960");
    tree.add_child("Alice", "Alice", "1990");

    assert!(!tree.delete_member("Alice"));
    assert_eq!(tree.len(), 2);
}

#[rstest]
fn given_inner_member_when_deleting_then_subtree_removed_and_siblings_kept(mut family: FamilyTree) {
    assert!(family.delete_member("Bob"));

    for gone in ["Bob", "Dan", "Eve"] {
        assert!(family.find_individual(gone).is_none(), "{gone} should be gone");
    }
    assert_eq!(family.names(), vec!["Alice", "Carol", "Finn"]);
    assert_eq!(family.len(), 3);
}

#[rstest]
fn given_middle_sibling_when_deleting_then_others_keep_order(mut family: FamilyTree) {
    family.add_child("Bob", "Gus", "2014");

    assert!(family.delete_member("Eve"));

    let bob = family.find_individual("Bob").unwrap();
    let names: Vec<_> = family
        .children(bob)
        .iter()
        .map(|&idx| family.individual(idx).unwrap().name.clone())
        .collect();
    assert_eq!(names, vec!["Dan", "Gus"]);
}

#[rstest]
fn given_absent_name_when_deleting_then_fails_and_tree_unchanged(mut family: FamilyTree) {
    let before = family.names();

    assert!(!family.delete_member("Zoe"));

    assert_eq!(family.names(), before);
}

#[rstest]
fn given_duplicate_names_when_deleting_then_first_preorder_match_removed(mut family: FamilyTree) {
    // Bob's subtree comes before Carol's in pre-order
    family.add_child("Carol", "Dan", "2018");
    family.add_child("Dan", "Gus", "2040");

    assert!(family.delete_member("Dan"));

    let dans = family.find_all("Dan");
    assert_eq!(dans.len(), 1);
    let carol = family.find_individual("Carol").unwrap();
    assert_eq!(family.parent(dans[0]), Some(carol));
    assert!(family.find_individual("Gus").is_none());
}

// ============================================================
// Scenario
// ============================================================

#[test]
fn given_fresh_tree_when_running_add_delete_scenario_then_results_match() {
    testing::init_test_setup();
    let mut tree = FamilyTree::new("Alice", "1990");

    assert!(tree.add_child("Alice", "Bob", "2015"));
    assert!(!tree.add_child("Carol", "Dan", "2020"));
    assert!(tree.delete_member("Bob"));
    assert!(!tree.delete_member("Bob"));
    assert!(!tree.delete_member("Alice"));

    assert_eq!(tree.names(), vec!["Alice"]);
}

#[rstest]
fn given_tree_when_querying_shape_then_reports_depth_and_leaves(family: FamilyTree) {
    assert_eq!(family.depth(), 3);
    assert_eq!(family.leaf_names(), vec!["Dan", "Eve", "Finn"]);
    let postorder: Vec<_> = family
        .iter_postorder()
        .map(|(_, node)| node.data.name.as_str())
        .collect();
    assert_eq!(postorder, vec!["Dan", "Eve", "Bob", "Finn", "Carol", "Alice"]);
}
