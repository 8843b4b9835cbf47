//! Text outlines of a family tree.
//!
//! The classic outline is the historical format and must stay byte-for-byte
//! stable: saved snapshots are compared against it.

use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::tree::FamilyTree;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// How [`FamilyTree::outline`] draws the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineStyle {
    /// Every line carries a connector, the root included.
    #[default]
    Classic,
    /// Root on its own line, children drawn by `termtree`.
    Tree,
}

impl fmt::Display for OutlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineStyle::Classic => write!(f, "classic"),
            OutlineStyle::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for OutlineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(OutlineStyle::Classic),
            "tree" => Ok(OutlineStyle::Tree),
            other => Err(format!("unknown outline style: {other}")),
        }
    }
}

impl FamilyTree {
    /// Renders the whole tree in the given style.
    pub fn outline(&self, style: OutlineStyle) -> String {
        match style {
            OutlineStyle::Classic => self.render_text(Some(self.root())),
            OutlineStyle::Tree => self.to_termtree().to_string(),
        }
    }

    /// Classic outline of the subtree at `node`; empty for `None` or a stale index.
    ///
    /// Each line is `<prefix><connector><name> (<birthdate>)\n`. The target
    /// itself always gets `├── `; below it, only a last child gets `└── `.
    /// A child's prefix extends its parent's with `│   `, or with blanks when
    /// the parent was drawn as a last child.
    #[instrument(level = "debug", skip(self))]
    pub fn render_text(&self, node: Option<Index>) -> String {
        let mut out = String::new();
        if let Some(idx) = node {
            self.render_into(idx, "", true, &mut out);
        }
        out
    }

    fn render_into(&self, idx: Index, prefix: &str, is_left: bool, out: &mut String) {
        let Some(node) = self.node(idx) else {
            return;
        };
        out.push_str(prefix);
        out.push_str(if is_left { BRANCH } else { LAST_BRANCH });
        out.push_str(&node.data.to_string());
        out.push('\n');

        let next_prefix = format!("{prefix}{}", if is_left { PIPE } else { BLANK });
        let last = node.children.len().saturating_sub(1);
        for (i, &child) in node.children.iter().enumerate() {
            self.render_into(child, &next_prefix, i < last, out);
        }
    }

    /// Converts the tree into a `termtree::Tree` of `name (birthdate)` labels.
    pub fn to_termtree(&self) -> Tree<String> {
        fn build(tree: &FamilyTree, idx: Index) -> Tree<String> {
            let label = tree
                .individual(idx)
                .map(ToString::to_string)
                .unwrap_or_default();
            let leaves: Vec<_> = tree
                .children(idx)
                .iter()
                .map(|&child| build(tree, child))
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        build(self, self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_root_only_when_rendering_then_single_branch_line() {
        let tree = FamilyTree::new("Alice", "1990");
        assert_eq!(tree.render_text(Some(tree.root())), "├── Alice (1990)\n");
    }

    #[test]
    fn given_absent_node_when_rendering_then_empty() {
        let tree = FamilyTree::new("Alice", "1990");
        assert_eq!(tree.render_text(None), "");
    }

    #[test]
    fn given_style_names_when_parsing_then_round_trips_display() {
        for style in [OutlineStyle::Classic, OutlineStyle::Tree] {
            assert_eq!(style.to_string().parse::<OutlineStyle>(), Ok(style));
        }
        assert!("fancy".parse::<OutlineStyle>().is_err());
    }
}
