//! Splitter
//!
//! Exhaustive search for the (feature, threshold) test that minimizes the
//! weighted Gini impurity of a node's rows.
use crate::data::{split_rows, LabelSet, Row};
use crate::impurity::gini_index;

/// The best test found for a node, together with the partition it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo<'a> {
    pub split_feature: usize,
    pub split_value: f64,
    pub split_score: f64,
    pub left_rows: Vec<Row<'a>>,
    pub right_rows: Vec<Row<'a>>,
}

impl<'a> SplitInfo<'a> {
    /// Whether one side of the partition received no rows.
    pub fn is_degenerate(&self) -> bool {
        self.left_rows.is_empty() || self.right_rows.is_empty()
    }

    /// Total rows across both sides.
    pub fn n_rows(&self) -> usize {
        self.left_rows.len() + self.right_rows.len()
    }
}

/// Find the split of `rows` with the lowest Gini impurity.
///
/// Every feature is tried with every observed value at that feature as the
/// threshold, feature-major then row-major. A candidate only replaces the
/// current best when its score is strictly lower, so the first of several
/// equally good candidates is kept. Impurity is scored against the labels of
/// all of `rows`.
///
/// Each candidate costs a full partition and scoring pass, so a node with `n`
/// rows and `f` features costs `O(f * n^2)`.
///
/// Returns `None` if `rows` is empty or holds no feature columns.
pub fn best_split<'a>(rows: &[Row<'a>]) -> Option<SplitInfo<'a>> {
    let n_features = rows.first()?.len().checked_sub(1)?;
    let labels = LabelSet::from_rows(rows);
    let mut best: Option<SplitInfo<'a>> = None;
    for index in 0..n_features {
        for row in rows {
            let value = row[index];
            let (left, right) = split_rows(index, value, rows);
            let score = gini_index(&[&left[..], &right[..]], &labels);
            if best.as_ref().map_or(true, |b| score < b.split_score) {
                best = Some(SplitInfo {
                    split_feature: index,
                    split_value: value,
                    split_score: score,
                    left_rows: left,
                    right_rows: right,
                });
            }
        }
    }
    best
}
