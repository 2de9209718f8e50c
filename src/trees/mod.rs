/// Recursive tree construction
pub mod builder;
/// Decision tree classifier
pub mod classifier;
/// Gini impurity
pub mod impurity;
/// Tree nodes and prediction
pub mod node;
/// Build parameters
pub mod params;
/// Text and JSON output
pub mod render;
/// Split selection
pub mod splitter;
