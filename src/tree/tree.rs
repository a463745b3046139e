use crate::config::TreeConfig;
use crate::data::{to_terminal, Dataset, Row};
use crate::errors::CartError;
use crate::node::{Node, SplittableNode};
use crate::splitter::{best_split, SplitInfo};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A fitted classification tree. Immutable once built.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Tree {
    pub root: Node,
    /// Split levels on the longest root-to-leaf path.
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Grow a tree on `data`.
    ///
    /// The root split is searched over every row at depth 1, then each node is
    /// expanded with the following rules, in order:
    ///
    /// 1. If either side of the partition is empty, both children become the
    ///    majority label of all of the node's rows.
    /// 2. If the node's depth exceeds `max_depth`, the same happens.
    /// 3. Otherwise each side with fewer than `min_size` rows becomes a leaf of
    ///    its own majority label, and each remaining side is split again at the
    ///    next depth.
    pub fn fit(data: &Dataset, config: &TreeConfig) -> Result<Self, CartError> {
        config.validate()?;
        let rows = data.row_views();
        let split_info = best_split(&rows).ok_or(CartError::EmptyDataset)?;
        let root = expand(SplittableNode::new(split_info, 1), config)?;

        if let Node::Split { left, right, .. } = &root {
            if left.is_leaf() && left == right {
                warn!("Tree collapsed to a single label at the root, no split separates the data.");
            }
        }

        let tree = Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            root,
        };
        info!(
            "Fitted tree on {} rows and {} features, depth {}, {} leaves.",
            data.n_rows(),
            data.n_features(),
            tree.depth,
            tree.n_leaves
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Replace a provisional node with its finished subtree.
fn expand(node: SplittableNode<'_>, config: &TreeConfig) -> Result<Node, CartError> {
    let SplittableNode { depth, split_info } = node;
    let SplitInfo {
        split_feature,
        split_value,
        split_score,
        left_rows,
        right_rows,
    } = split_info;

    if left_rows.is_empty() || right_rows.is_empty() || depth > config.max_depth {
        let label = to_terminal(&[left_rows, right_rows].concat())?;
        debug!(
            "Depth {}: [X{} < {}] terminated with leaf={} on both sides.",
            depth, split_feature, split_value, label
        );
        return Ok(Node::split(split_feature, split_value, Node::Leaf(label), Node::Leaf(label)));
    }

    debug!(
        "Depth {}: [X{} < {}] gini={}, {} left rows, {} right rows.",
        depth,
        split_feature,
        split_value,
        split_score,
        left_rows.len(),
        right_rows.len()
    );
    let left = grow_side(left_rows, depth, config)?;
    let right = grow_side(right_rows, depth, config)?;
    Ok(Node::split(split_feature, split_value, left, right))
}

fn grow_side(rows: Vec<Row<'_>>, depth: usize, config: &TreeConfig) -> Result<Node, CartError> {
    if rows.len() < config.min_size {
        return Ok(Node::Leaf(to_terminal(&rows)?));
    }
    let split_info = best_split(&rows).ok_or(CartError::EmptyGroup)?;
    expand(SplittableNode::new(split_info, depth + 1), config)
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
