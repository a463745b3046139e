//! CART classification trees.
//!
//! Trees are grown greedily by exhaustive search for the split minimizing
//! weighted Gini impurity, with majority-vote leaves.
mod node;

// Modules
pub mod config;
pub mod data;
pub mod errors;
pub mod impurity;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use config::TreeConfig;
pub use data::{to_terminal, Dataset};
pub use errors::CartError;
pub use impurity::gini_index;
pub use node::Node;
pub use splitter::best_split;
pub use tree::tree::Tree;
pub use tree::{build_tree, predict};
