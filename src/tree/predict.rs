//! Tree Prediction Methods
//!
//! Row-by-row traversal of a fitted tree.
use super::tree::Tree;
use crate::node::Node;

impl Node {
    /// Follow split tests from this node down to a leaf and return its label.
    ///
    /// `row` must share the training schema, a row too short for a split's
    /// feature index panics.
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let mut node = self;
        while let Some(child) = node.get_child(row) {
            node = child;
        }
        match node {
            Node::Leaf(label) => *label,
            Node::Split { .. } => unreachable!("get_child routes every split node"),
        }
    }
}

impl Tree {
    /// Predict the class label of a single row.
    pub fn predict(&self, row: &[f64]) -> f64 {
        self.root.predict_row(row)
    }
}
