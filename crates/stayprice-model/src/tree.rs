//! Regression Tree
//!
//! Binary decision tree stored as a flat node array. Node 0 is the root.
//! A split sends a row left when `row[feature] <= threshold`, otherwise
//! right. Children always have larger indices than their parent, so a
//! validated tree is acyclic and every walk ends at a leaf.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// One node of a regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node
    Split {
        /// Feature index tested
        feature: usize,
        /// Rows with `row[feature] <= threshold` go left
        threshold: f64,
        /// Index of the left child
        left: usize,
        /// Index of the right child
        right: usize,
    },
    /// Terminal node
    Leaf {
        /// Predicted value
        value: f64,
    },
}

/// Regression tree over fixed-width rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Build a tree and check its structure against the row width.
    ///
    /// # Errors
    /// Returns [`ModelError::Invalid`] if the tree is empty, references a
    /// feature outside `n_features`, or has a child that does not come after
    /// its parent.
    pub fn new(nodes: Vec<TreeNode>, n_features: usize) -> Result<Self> {
        let tree = Self { nodes };
        tree.validate(n_features)?;
        Ok(tree)
    }

    /// Tree consisting of a single leaf.
    pub fn leaf(value: f64) -> Self {
        Self {
            nodes: vec![TreeNode::Leaf { value }],
        }
    }

    /// Nodes in storage order.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, TreeNode::Leaf { .. }))
            .count()
    }

    pub(crate) fn validate(&self, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid("tree has no nodes".to_string()));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(ModelError::Invalid(format!(
                            "node {idx} splits on feature {feature}, model has {n_features}"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(ModelError::Invalid(format!(
                            "node {idx} has a NaN threshold"
                        )));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(ModelError::Invalid(format!(
                                "node {idx} has out-of-order child {child}"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(ModelError::Invalid(format!(
                            "leaf {idx} has non-finite value {value}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk the tree for one row.
    ///
    /// The row must be at least as wide as the largest feature index; this
    /// holds for any row of the validated width.
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }
}
