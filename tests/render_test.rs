//! Tests for the text outlines

use rstest::rstest;

use famtree::domain::{FamilyTree, OutlineStyle};

fn family() -> FamilyTree {
    let mut tree = FamilyTree::new("Alice", "1");
    tree.add_child("Alice", "Bob", "2");
    tree.add_child("Alice", "Carol", "5");
    tree.add_child("Bob", "Dan", "3");
    tree.add_child("Bob", "Eve", "4");
    tree.add_child("Carol", "Finn", "6");
    tree
}

#[test]
fn given_root_with_sole_child_when_rendering_then_child_gets_closing_connector() {
    let mut tree = FamilyTree::new("Alice", "1990-01-01");
    tree.add_child("Alice", "Bob", "2015-05-05");

    assert_eq!(
        tree.render_text(Some(tree.root())),
        "├── Alice (1990-01-01)\n│   └── Bob (2015-05-05)\n"
    );
}

#[test]
fn given_nested_tree_when_rendering_then_prefixes_follow_last_child_rule() {
    let tree = family();

    let expected = concat!(
        "├── Alice (1)\n",
        "│   ├── Bob (2)\n",
        "│   │   ├── Dan (3)\n",
        "│   │   └── Eve (4)\n",
        "│   └── Carol (5)\n",
        "│       └── Finn (6)\n",
    );
    assert_eq!(tree.render_text(Some(tree.root())), expected);
    assert_eq!(tree.outline(OutlineStyle::Classic), expected);
}

#[test]
fn given_subtree_target_when_rendering_then_target_gets_branch_connector() {
    let tree = family();
    let carol = tree.find_individual("Carol");

    assert_eq!(tree.render_text(carol), "├── Carol (5)\n│   └── Finn (6)\n");
}

#[rstest]
#[case("Bob")]
#[case("Finn")]
fn given_removed_member_when_rendering_its_index_then_empty(#[case] name: &str) {
    let mut tree = family();
    let idx = tree.find_individual(name);

    assert!(tree.delete_member(name));

    assert_eq!(tree.render_text(idx), "");
    assert!(!tree.render_text(Some(tree.root())).contains(name));
}

#[test]
fn given_raw_text_when_rendering_then_inserted_verbatim() {
    let mut tree = FamilyTree::new("Ann (the elder)", "");
    tree.add_child("Ann (the elder)", "%s {x}", "??/??");

    assert_eq!(
        tree.render_text(Some(tree.root())),
        "├── Ann (the elder) ()\n│   └── %s {x} (??/??)\n"
    );
}

#[test]
fn given_tree_style_when_rendering_then_root_has_no_connector() {
    let tree = family();

    let outline = tree.outline(OutlineStyle::Tree);

    let lines: Vec<_> = outline.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Alice (1)",
            "├── Bob (2)",
            "│   ├── Dan (3)",
            "│   └── Eve (4)",
            "└── Carol (5)",
            "    └── Finn (6)",
        ]
    );
}
