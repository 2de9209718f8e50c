//! Recursive tree construction
use crate::data::dataset::{ClassLabel, Dataset, Number};
use crate::error::{Result, TreeError};
use crate::trees::node::TreeNode;
use crate::trees::splitter::{best_split, SplitData};
use log::trace;

/// Grows a tree from `dataset`.
///
/// The root split counts as depth 1. A node stops growing when
/// * one side of its split is empty: both children become the same leaf, labelled with
///   the majority class of all its rows,
/// * it sits at `max_depth`: both children become leaves,
/// * a side has at most `min_size` rows: that side becomes a leaf.
///
/// There is no purity check, a pure node above `min_size` is split again until one of
/// the rules above applies.
///
/// # Errors
///
/// Fails on an empty dataset, a dataset without features, or `max_depth == 0`.
pub fn build_tree<XT: Number, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
    max_depth: u16,
    min_size: usize,
) -> Result<TreeNode<XT, YT>> {
    if max_depth < 1 {
        return Err(TreeError::InvalidParameter(
            "max_depth".into(),
            "must be greater than 0".into(),
        ));
    }
    let root = best_split(dataset)?;
    split_node(root, max_depth, min_size, 1)
}

fn split_node<XT: Number, YT: ClassLabel>(
    split: SplitData<XT, YT>,
    max_depth: u16,
    min_size: usize,
    depth: u16,
) -> Result<TreeNode<XT, YT>> {
    let SplitData {
        feature_index,
        threshold,
        left,
        right,
        ..
    } = split;

    if left.nrows() == 0 || right.nrows() == 0 {
        let value = majority_label(left.labels().iter().chain(right.labels()))?;
        trace!(
            "Degenerate split on X{} at depth {}, collapsing to {}",
            feature_index + 1,
            depth,
            value
        );
        return Ok(TreeNode::internal(
            feature_index,
            threshold,
            TreeNode::terminal(value),
            TreeNode::terminal(value),
        ));
    }

    if depth >= max_depth {
        return Ok(TreeNode::internal(
            feature_index,
            threshold,
            TreeNode::terminal(majority_label(left.labels())?),
            TreeNode::terminal(majority_label(right.labels())?),
        ));
    }

    let left_node = grow_child(&left, max_depth, min_size, depth)?;
    let right_node = grow_child(&right, max_depth, min_size, depth)?;
    Ok(TreeNode::internal(
        feature_index,
        threshold,
        left_node,
        right_node,
    ))
}

fn grow_child<XT: Number, YT: ClassLabel>(
    group: &Dataset<XT, YT>,
    max_depth: u16,
    min_size: usize,
    depth: u16,
) -> Result<TreeNode<XT, YT>> {
    if group.nrows() <= min_size {
        return Ok(TreeNode::terminal(majority_label(group.labels())?));
    }
    split_node(best_split(group)?, max_depth, min_size, depth + 1)
}

/// Most frequent label; on a tie the label seen first wins.
///
/// # Errors
///
/// Returns [`TreeError::EmptyDataset`] when there are no labels.
pub fn majority_label<'a, YT, I>(labels: I) -> Result<YT>
where
    YT: ClassLabel,
    I: IntoIterator<Item = &'a YT>,
{
    let mut counts: Vec<(YT, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(class, _)| class == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((*label, 1)),
        }
    }

    let mut best: Option<(YT, usize)> = None;
    for (class, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((class, count));
        }
    }
    best.map(|(class, _)| class).ok_or(TreeError::EmptyDataset)
}
