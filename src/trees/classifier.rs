//! Decision Tree Classifier
use super::{builder::build_tree, node::TreeNode, params::TreeParams, render};
use crate::{
    data::dataset::{ClassLabel, Dataset, Number},
    error::{Result, TreeError},
    metrics::confusion::ClassificationMetrics,
};
use log::info;
use nalgebra::{DMatrix, DVector};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Decision Tree Classifier
///
/// CART tree grown with Gini impurity, see [`build_tree`](super::builder::build_tree).
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<XT: Number, YT: ClassLabel> {
    root: Option<TreeNode<XT, YT>>,
    tree_params: TreeParams,
    n_features: usize,
    feature_names: Option<Vec<String>>,
}

impl<XT: Number, YT: ClassLabel> Default for DecisionTreeClassifier<XT, YT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<XT: Number, YT: ClassLabel> ClassificationMetrics<YT> for DecisionTreeClassifier<XT, YT> {}

impl<XT: Number, YT: ClassLabel> DecisionTreeClassifier<XT, YT> {
    /// Creates a new classifier with default parameters.
    pub fn new() -> Self {
        Self {
            root: None,
            tree_params: TreeParams::new(),
            n_features: 0,
            feature_names: None,
        }
    }

    /// Creates a new classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - The maximum depth of the tree, the root split being depth 1.
    /// * `min_size` - Nodes with at most this many rows become leaves.
    ///
    /// # Errors
    ///
    /// This method will return an error if the maximum depth is less than 1.
    pub fn with_params(max_depth: Option<u16>, min_size: Option<usize>) -> Result<Self> {
        let mut tree = Self::new();

        if let Some(max_depth) = max_depth {
            tree.set_max_depth(max_depth)?;
        }
        if let Some(min_size) = min_size {
            tree.set_min_size(min_size);
        }
        Ok(tree)
    }

    /// Attaches feature names used when rendering the tree.
    pub fn with_feature_names(mut self, feature_names: Vec<String>) -> Self {
        self.feature_names = Some(feature_names);
        self
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<()> {
        self.tree_params.set_max_depth(max_depth)
    }

    pub fn set_min_size(&mut self, min_size: usize) {
        self.tree_params.set_min_size(min_size)
    }

    pub fn max_depth(&self) -> u16 {
        self.tree_params.max_depth()
    }

    pub fn min_size(&self) -> usize {
        self.tree_params.min_size()
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Root of the fitted tree.
    pub fn root(&self) -> Option<&TreeNode<XT, YT>> {
        self.root.as_ref()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Errors
    ///
    /// Fails if the dataset is empty or has no feature columns.
    pub fn fit(&mut self, dataset: &Dataset<XT, YT>) -> Result<()> {
        let root = build_tree(dataset, self.max_depth(), self.min_size())?;
        info!(
            "Built tree on {} rows: depth {}, {} leaves",
            dataset.nrows(),
            root.depth(),
            root.n_leaves()
        );
        self.n_features = dataset.nfeatures();
        self.root = Some(root);
        Ok(())
    }

    fn fitted_root(&self, n_features: usize) -> Result<&TreeNode<XT, YT>> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        if n_features != self.n_features {
            return Err(TreeError::FeatureCountMismatch {
                expected: self.n_features,
                found: n_features,
            });
        }
        Ok(root)
    }

    /// Predicts the class of a single feature row.
    pub fn predict_row(&self, features: &[XT]) -> Result<YT> {
        Ok(self.fitted_root(features.len())?.predict(features))
    }

    /// Predicts the labels for new data, one row per sample.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet or the number of
    /// columns differs from the training data.
    pub fn predict(&self, features: &DMatrix<XT>) -> Result<DVector<YT>> {
        let root = self.fitted_root(features.ncols())?;
        let predictions: Vec<YT> = (0..features.nrows())
            .into_par_iter()
            .map(|index| {
                let row: Vec<XT> = features.row(index).iter().copied().collect();
                root.predict(&row)
            })
            .collect();

        Ok(DVector::from_vec(predictions))
    }

    /// Indented text rendering of the tree.
    pub fn render_text(&self) -> Result<String> {
        Ok(self.root.as_ref().ok_or(TreeError::NotFitted)?.to_string())
    }

    /// JSON node graph of the tree, using the attached feature names if any.
    pub fn to_json(&self) -> Result<String> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        render::to_json_string(root, self.feature_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn toy_dataset() -> Dataset<f64, f64> {
        Dataset::from_rows(&[
            vec![2.771244718, 1.784783929, 0.0],
            vec![1.728571309, 1.169761413, 0.0],
            vec![3.678319846, 2.81281357, 0.0],
            vec![3.961043357, 2.61995032, 0.0],
            vec![2.999208922, 2.209014212, 0.0],
            vec![7.497545867, 3.162953546, 1.0],
            vec![9.00220326, 3.339047188, 1.0],
            vec![7.444542326, 0.476683375, 1.0],
            vec![10.12493903, 3.234550982, 1.0],
            vec![6.642287351, 3.319983761, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_with_params() {
        let classifier = DecisionTreeClassifier::<f64, f64>::with_params(Some(3), Some(2)).unwrap();
        assert_eq!(classifier.max_depth(), 3);
        assert_eq!(classifier.min_size(), 2);
        assert!(DecisionTreeClassifier::<f64, f64>::with_params(Some(0), None).is_err());
    }

    #[test]
    fn test_fit_and_predict() {
        let dataset = toy_dataset();
        let mut classifier = DecisionTreeClassifier::with_params(Some(3), Some(1)).unwrap();
        classifier.fit(&dataset).unwrap();

        let predictions = classifier.predict(&dataset.x).unwrap();
        assert_eq!(predictions, dataset.y);
        assert_relative_eq!(classifier.accuracy(&dataset.y, &predictions).unwrap(), 1.0);
    }

    #[test]
    fn test_predict_before_fit() {
        let classifier: DecisionTreeClassifier<f64, f64> = DecisionTreeClassifier::new();
        let x = DMatrix::from_row_slice(1, 2, &[1.0, 2.0]);
        assert!(matches!(classifier.predict(&x), Err(TreeError::NotFitted)));
        assert!(matches!(classifier.render_text(), Err(TreeError::NotFitted)));
    }

    #[test]
    fn test_predict_wrong_feature_count() {
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&toy_dataset()).unwrap();

        let x = DMatrix::from_row_slice(1, 3, &[1.0, 2.0, 3.0]);
        assert!(matches!(
            classifier.predict(&x),
            Err(TreeError::FeatureCountMismatch {
                expected: 2,
                found: 3
            })
        ));
        assert!(classifier.predict_row(&[1.0]).is_err());
        assert_eq!(classifier.predict_row(&[8.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_to_json_uses_feature_names() {
        let mut classifier = DecisionTreeClassifier::with_params(Some(1), None)
            .unwrap()
            .with_feature_names(vec!["width".into(), "height".into()]);
        classifier.fit(&toy_dataset()).unwrap();

        assert_eq!(
            classifier.to_json().unwrap(),
            r#"{"name":"width < 6.642","children":[{"name":"0"},{"name":"1"}]}"#
        );
        assert_eq!(classifier.render_text().unwrap(), "[X1 < 6.642]\n [0]\n [1]\n");
    }
}
