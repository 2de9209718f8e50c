use std::cmp::Ordering;

use nalgebra::{DMatrix, DVector};

use crate::data::dataset::{unique_values, ClassLabel};
use crate::error::{Result, TreeError};

type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics<T: ClassLabel> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Rows are true classes, columns predicted classes, both in ascending order.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    fn confusion_matrix(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch(y_true.len(), y_pred.len()));
        }

        let mut classes = unique_values(y_true.iter().chain(y_pred.iter()));
        classes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let position = |label: &T| {
            classes
                .iter()
                .position(|class| class == label)
                .ok_or_else(|| {
                    TreeError::InvalidParameter("label".into(), format!("{} can't be compared", label))
                })
        };

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(position(y_t)?, position(y_p)?)] += 1;
        }

        Ok(matrix)
    }

    /// Share of positions where the prediction matches the true label.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    fn accuracy(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Err(TreeError::EmptyDataset);
        }

        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }
}
