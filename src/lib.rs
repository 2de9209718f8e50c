//! # cart-tree
//!
//! `cart-tree` trains binary decision tree classifiers (CART, Gini impurity) on numeric
//! tabular data and classifies new rows with them.
//!
//! ## Example Usage
//!
//! Train on a small dataset whose last column is the class label and predict a row:
//!
//! ```rust
//! use cart_tree::data::dataset::Dataset;
//! use cart_tree::trees::builder::build_tree;
//!
//! let dataset = Dataset::from_rows(&[
//!     vec![2.77, 1.78, 0.0],
//!     vec![1.73, 1.17, 0.0],
//!     vec![7.50, 3.16, 1.0],
//!     vec![9.00, 3.34, 1.0],
//! ])
//! .unwrap();
//!
//! let tree = build_tree(&dataset, 3, 1).unwrap();
//!
//! assert_eq!(tree.predict(&[8.0, 2.0]), 1.0);
//! println!("{}", tree);
//! ```

/// Datasets and CSV loading
pub mod data;
/// Error type
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// HTML export
pub mod report;
/// Decision trees
pub mod trees;

pub use error::{Result, TreeError};
