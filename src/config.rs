//! Tree Configuration
//!
//! Hyperparameters controlling how far a tree is grown. There are no
//! defaults: the caller always chooses both values.
use crate::errors::CartError;
use crate::utils::validate_min_usize_parameter;
use serde::{Deserialize, Serialize};

/// Stopping rules for tree construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Depth past which both children of a node become leaves. The root is at depth 1.
    pub max_depth: usize,
    /// Sides of a split with fewer rows than this become leaves.
    pub min_size: usize,
}

impl TreeConfig {
    /// Create a validated configuration.
    ///
    /// * `max_depth` - Must be at least 1.
    /// * `min_size` - Must be at least 1.
    pub fn new(max_depth: usize, min_size: usize) -> Result<Self, CartError> {
        let cfg = TreeConfig { max_depth, min_size };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration from a json string, then validate it.
    ///
    /// * `json_str` - String object, which can be deserialized to a config.
    pub fn from_json(json_str: &str) -> Result<Self, CartError> {
        let cfg =
            serde_json::from_str::<TreeConfig>(json_str).map_err(|e| CartError::UnableToRead(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), CartError> {
        validate_min_usize_parameter(self.max_depth, 1, "max_depth")?;
        validate_min_usize_parameter(self.min_size, 1, "min_size")
    }

    /// Set the maximum depth.
    /// * `max_depth` - Depth past which children become leaves.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the minimum size.
    /// * `min_size` - Row count below which a side becomes a leaf.
    pub fn set_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }
}
