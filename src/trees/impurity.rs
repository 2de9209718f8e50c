//! Gini impurity of a candidate partition
use crate::data::dataset::ClassLabel;

/// Size-weighted Gini impurity of `groups`.
///
/// Every group contributes `(1 - sum_c p(c)^2) * |group| / total`, where `p(c)` is
/// the share of the group labelled `c`. Empty groups are skipped and classes missing
/// from a group simply add nothing to its sum. 0 means every group is pure.
pub fn gini_index<YT: ClassLabel>(groups: &[&[YT]], classes: &[YT]) -> f64 {
    let n_instances: usize = groups.iter().map(|group| group.len()).sum();
    let mut gini = 0.0;

    for group in groups {
        let size = group.len() as f64;
        if group.is_empty() {
            continue;
        }

        let score: f64 = classes
            .iter()
            .map(|class| {
                let p = group.iter().filter(|&label| label == class).count() as f64 / size;
                p * p
            })
            .sum();

        gini += (1.0 - score) * (size / n_instances as f64);
    }
    gini
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gini_mixed_groups() {
        let left = [1.0, 0.0];
        let right = [1.0, 0.0];
        assert_relative_eq!(gini_index(&[&left[..], &right[..]], &[0.0, 1.0]), 0.5);
    }

    #[test]
    fn test_gini_pure_groups() {
        let left = [0.0, 0.0];
        let right = [1.0, 1.0];
        assert_eq!(gini_index(&[&left[..], &right[..]], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_gini_weights_by_group_size() {
        // pure group of 2, 50/50 group of 2 -> 0.5 * 2/4
        let left = [0.0, 0.0];
        let right = [0.0, 1.0];
        assert_relative_eq!(gini_index(&[&left[..], &right[..]], &[0.0, 1.0]), 0.25);
    }

    #[test]
    fn test_gini_skips_empty_group() {
        let left: [f64; 0] = [];
        let right = [0.0, 1.0, 0.0, 1.0];
        assert_relative_eq!(gini_index(&[&left[..], &right[..]], &[0.0, 1.0]), 0.5);
    }

    #[test]
    fn test_gini_class_absent_from_group() {
        let left = [2, 2, 2];
        let right = [0, 1];
        let gini = gini_index(&[&left[..], &right[..]], &[0, 1, 2]);
        assert_relative_eq!(gini, 0.5 * 2.0 / 5.0);
    }

    #[test]
    fn test_gini_generalizes_to_more_groups() {
        let a = [0, 0];
        let b = [1, 1];
        let c = [2, 2];
        assert_eq!(gini_index(&[&a[..], &b[..], &c[..]], &[0, 1, 2]), 0.0);
    }
}
