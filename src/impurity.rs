//! Impurity
//!
//! Weighted Gini impurity of a candidate partition.
use crate::data::{LabelSet, Row};

/// Calculate the Gini impurity of a partition, weighting each group by its
/// share of the rows.
///
/// Every label in `labels` contributes a term for every group, so a group
/// missing one of the node's labels still scores it with probability zero.
/// Empty groups are skipped, and a partition with no rows at all scores `0.0`.
///
/// * `groups` - The groups of rows making up the partition.
/// * `labels` - The labels known at the node being split.
pub fn gini_index(groups: &[&[Row]], labels: &LabelSet) -> f64 {
    let n_instances: usize = groups.iter().map(|g| g.len()).sum();
    if n_instances == 0 {
        return 0.0;
    }
    let n_instances = n_instances as f64;
    let mut gini = 0.0;
    for group in groups {
        if group.is_empty() {
            continue;
        }
        let size = group.len() as f64;
        let score: f64 = labels
            .counts(group)
            .into_iter()
            .map(|c| {
                let p = c as f64 / size;
                p * p
            })
            .sum();
        gini += (1.0 - score) * (size / n_instances);
    }
    gini
}
