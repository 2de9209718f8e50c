/// Datasets and numeric trait aliases
pub mod dataset;
/// Reading datasets from CSV files
pub mod loader;
