//! Exhaustive search for the best binary split
use crate::data::dataset::{ClassLabel, Dataset, Number};
use crate::error::{Result, TreeError};
use crate::trees::impurity::gini_index;
use log::debug;

/// Best partition of a dataset found by [`best_split`].
#[derive(Debug)]
pub struct SplitData<XT: Number, YT: ClassLabel> {
    pub feature_index: usize,
    pub threshold: XT,
    pub left: Dataset<XT, YT>,
    pub right: Dataset<XT, YT>,
    pub score: f64,
}

/// Finds the `(feature, threshold)` pair whose partition has the lowest Gini impurity.
///
/// Every value of every feature column is tried as a threshold, scanning features in
/// order and rows in dataset order; rows with `value < threshold` go left. The first
/// candidate reaching the minimum score wins. The class set is taken from the labels
/// of `dataset` itself, so it narrows as the tree grows.
///
/// Cost is `O(rows^2 * features)` per call: each of the `rows * features` candidates
/// scans all rows once to partition and score them.
///
/// # Errors
///
/// Returns an error when the dataset has no rows or no feature columns.
pub fn best_split<XT: Number, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
) -> Result<SplitData<XT, YT>> {
    let (num_samples, num_features) = dataset.shape();
    if num_samples == 0 {
        return Err(TreeError::EmptyDataset);
    }
    if num_features == 0 {
        return Err(TreeError::TooFewColumns(1));
    }

    let classes = dataset.classes();
    let labels = dataset.labels();

    let mut best: Option<(usize, XT, f64)> = None;
    let mut left = Vec::with_capacity(num_samples);
    let mut right = Vec::with_capacity(num_samples);

    for feature_index in 0..num_features {
        let column = dataset.x.column(feature_index);
        for &threshold in column.iter() {
            left.clear();
            right.clear();
            for (value, label) in column.iter().zip(labels) {
                if *value < threshold {
                    left.push(*label);
                } else {
                    right.push(*label);
                }
            }

            let score = gini_index(&[&left[..], &right[..]], &classes);
            if best.map_or(true, |(_, _, best_score)| score < best_score) {
                best = Some((feature_index, threshold, score));
            }
        }
    }

    let (feature_index, threshold, score) = best.ok_or(TreeError::EmptyDataset)?;
    let (left, right) = dataset.split_on_threshold(feature_index, threshold);
    debug!(
        "Split on X{} < {} scores {:.4} ({} | {} rows)",
        feature_index + 1,
        threshold,
        score,
        left.nrows(),
        right.nrows()
    );

    Ok(SplitData {
        feature_index,
        threshold,
        left,
        right,
        score,
    })
}
