use crate::splitter::SplitInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of a fitted tree.
///
/// Serializes as a plain nested record: a split node becomes
/// `{"feature_index", "threshold", "left", "right"}` and a leaf is its bare
/// label value.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature_index: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf(f64),
}

/// A node whose partition has been chosen but whose children have not been
/// built yet.
#[derive(Debug)]
pub struct SplittableNode<'a> {
    pub depth: usize,
    pub split_info: SplitInfo<'a>,
}

impl<'a> SplittableNode<'a> {
    pub fn new(split_info: SplitInfo<'a>, depth: usize) -> Self {
        SplittableNode { depth, split_info }
    }
}

impl Node {
    pub fn split(feature_index: usize, threshold: f64, left: Node, right: Node) -> Self {
        Node::Split {
            feature_index,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Get the child that should be traveled down, given a row.
    /// Leaves have no children.
    pub fn get_child(&self, row: &[f64]) -> Option<&Node> {
        match self {
            Node::Leaf(_) => None,
            Node::Split {
                feature_index,
                threshold,
                left,
                right,
            } => {
                if row[*feature_index] < *threshold {
                    Some(left.as_ref())
                } else {
                    Some(right.as_ref())
                }
            }
        }
    }

    /// Number of split levels on the longest path below and including this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        match self {
            Node::Leaf(label) => writeln!(f, "{:indent$}leaf={}", "", label, indent = indent * 2),
            Node::Split {
                feature_index,
                threshold,
                left,
                right,
            } => {
                writeln!(
                    f,
                    "{:indent$}[X{} < {}]",
                    "",
                    feature_index,
                    threshold,
                    indent = indent * 2
                )?;
                left.fmt_indented(f, indent + 1)?;
                right.fmt_indented(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
