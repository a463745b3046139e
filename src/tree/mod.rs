pub mod predict;
pub mod tree;

use crate::config::TreeConfig;
use crate::data::Dataset;
use crate::errors::CartError;
use tree::Tree;

/// Build a tree on `data` with the given stopping rules.
///
/// * `max_depth` - Depth past which children become leaves, at least 1.
/// * `min_size` - Sides with fewer rows become leaves, at least 1.
pub fn build_tree(data: &Dataset, max_depth: usize, min_size: usize) -> Result<Tree, CartError> {
    Tree::fit(data, &TreeConfig::new(max_depth, min_size)?)
}

/// Predict the class label of a single row.
pub fn predict(tree: &Tree, row: &[f64]) -> f64 {
    tree.predict(row)
}

// Unit-testing
#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample() -> Dataset {
        Dataset::new(&[
            vec![2.7, 1.0],
            vec![1.9, 0.0],
            vec![7.0, 1.0],
            vec![7.5, 1.0],
            vec![0.9, 0.0],
        ])
        .unwrap()
    }

    fn random_dataset(rng: &mut StdRng, rows: usize, features: usize, classes: usize) -> Dataset {
        let rows: Vec<Vec<f64>> = (0..rows)
            .map(|_| {
                let mut row: Vec<f64> = (0..features).map(|_| rng.gen_range(0.0..10.0)).collect();
                row.push(rng.gen_range(0..classes) as f64);
                row
            })
            .collect();
        Dataset::new(&rows).unwrap()
    }

    fn leaves_are(node: &Node, f: &dyn Fn(&Node) -> bool) -> bool {
        match node {
            Node::Leaf(_) => f(node),
            Node::Split { left, right, .. } => leaves_are(left, f) && leaves_are(right, f),
        }
    }

    #[test]
    fn test_tree_fit_and_predict() {
        let tree = build_tree(&sample(), 1, 1).unwrap();
        println!("{}", tree);
        match tree.root() {
            Node::Split {
                feature_index,
                threshold,
                ..
            } => {
                assert_eq!(*feature_index, 0);
                assert_eq!(*threshold, 2.7);
            }
            Node::Leaf(_) => panic!("root should be a split"),
        }
        assert_eq!(predict(&tree, &[8.0]), 1.0);
        assert_eq!(predict(&tree, &[1.0]), 0.0);
    }

    #[test]
    fn test_min_size_turns_sides_into_leaves() {
        let tree = build_tree(&sample(), 5, 10).unwrap();
        assert_eq!(tree.root, Node::split(0, 2.7, Node::Leaf(0.0), Node::Leaf(1.0)));
        assert_eq!(tree.depth, 1);
        assert_eq!(tree.n_leaves, 2);
    }

    #[test]
    fn test_min_size_applies_to_each_side() {
        // The root sends one row left and four mixed rows right.
        let data = Dataset::new(&[
            vec![1.0, 0.0],
            vec![2.0, 1.0],
            vec![3.0, 1.0],
            vec![4.0, 1.0],
            vec![5.0, 0.0],
        ])
        .unwrap();
        let tree = build_tree(&data, 3, 2).unwrap();
        let expected = Node::split(
            0,
            2.0,
            Node::Leaf(0.0),
            Node::split(0, 5.0, Node::split(0, 2.0, Node::Leaf(1.0), Node::Leaf(1.0)), Node::Leaf(0.0)),
        );
        assert_eq!(tree.root, expected);
        assert_eq!(tree.predict(&[1.5]), 0.0);
        assert_eq!(tree.predict(&[3.5]), 1.0);
        assert_eq!(tree.predict(&[6.0]), 0.0);
    }

    #[test]
    fn test_max_depth_collapses_children() {
        let data = Dataset::new(&[vec![1.0, 0.0], vec![2.0, 1.0], vec![3.0, 1.0], vec![4.0, 0.0]]).unwrap();

        let shallow = build_tree(&data, 1, 1).unwrap();
        let expected = Node::split(
            0,
            2.0,
            Node::split(0, 1.0, Node::Leaf(0.0), Node::Leaf(0.0)),
            Node::split(0, 4.0, Node::Leaf(1.0), Node::Leaf(1.0)),
        );
        assert_eq!(shallow.root, expected);
        assert_eq!(shallow.predict(&[4.5]), 1.0);

        let deeper = build_tree(&data, 2, 1).unwrap();
        assert_eq!(deeper.predict(&[4.5]), 0.0);
        assert_eq!(deeper.predict(&[2.5]), 1.0);
        assert_eq!(deeper.predict(&[0.5]), 0.0);
    }

    #[test]
    fn test_single_row_dataset() {
        let data = Dataset::new(&[vec![3.0, 2.0, 7.0]]).unwrap();
        let tree = build_tree(&data, 3, 1).unwrap();
        assert_eq!(tree.root, Node::split(0, 3.0, Node::Leaf(7.0), Node::Leaf(7.0)));
        assert_eq!(tree.predict(&[-100.0, 0.0]), 7.0);
        assert_eq!(tree.predict(&[100.0, 0.0]), 7.0);
    }

    #[test]
    fn test_depth_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        for max_depth in 1..=4 {
            let data = random_dataset(&mut rng, 60, 3, 3);
            let tree = build_tree(&data, max_depth, 1).unwrap();
            assert!(tree.depth <= max_depth + 1);
            assert_eq!(tree.depth, tree.root.depth());
        }
    }

    #[test]
    fn test_leaves_hold_known_labels() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = random_dataset(&mut rng, 40, 2, 4);
        let labels = data.labels();
        let tree = build_tree(&data, 6, 2).unwrap();
        assert!(leaves_are(&tree.root, &|n: &Node| match n {
            Node::Leaf(label) => labels.position(*label).is_some(),
            _ => false,
        }));
    }

    #[test]
    fn test_predict_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = random_dataset(&mut rng, 50, 4, 2);
        let tree = build_tree(&data, 5, 1).unwrap();
        let snapshot = tree.clone();
        for i in 0..data.n_rows() {
            let row = data.get_row(i);
            assert_eq!(tree.predict(row), tree.predict(row));
        }
        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = random_dataset(&mut rng, 30, 3, 3);
        let first = build_tree(&data, 4, 2).unwrap();
        let second = build_tree(&data, 4, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_separable_data_is_fit_exactly() {
        let data = Dataset::new(&[
            vec![1.0, 5.0, 0.0],
            vec![2.0, 1.0, 0.0],
            vec![3.0, 4.0, 1.0],
            vec![4.0, 2.0, 1.0],
            vec![5.0, 3.0, 2.0],
            vec![6.0, 6.0, 2.0],
        ])
        .unwrap();
        let tree = build_tree(&data, 3, 1).unwrap();
        for i in 0..data.n_rows() {
            let row = data.get_row(i);
            assert_eq!(tree.predict(row), row[2]);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(build_tree(&sample(), 0, 1), Err(CartError::InvalidParameter(..))));
        assert!(matches!(build_tree(&sample(), 1, 0), Err(CartError::InvalidParameter(..))));
    }

    #[test]
    fn test_tree_json() {
        let tree = build_tree(&sample(), 2, 1).unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        let back: Tree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.predict(&[8.0]), 1.0);
    }
}
