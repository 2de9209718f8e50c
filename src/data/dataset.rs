use crate::error::{Result, TreeError};
use approx::abs_diff_eq;
use nalgebra::{DMatrix, DVector};
use num_traits::{FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Display};
use std::fmt::{Debug, Formatter};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

pub trait DataValue:
    Debug
    + Clone
    + Copy
    + Num
    + FromPrimitive
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + Display
    + 'static
{
}

impl<T> DataValue for T where
    T: Debug
        + Clone
        + Copy
        + Num
        + FromPrimitive
        + ToPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Send
        + Sync
        + Display
        + 'static
{
}

/// Ordered numeric value, used for features.
pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

/// Class value. Labels are compared by equality only, so real numbers work as keys.
pub trait ClassLabel: Number {}
impl<T> ClassLabel for T where T: Number {}

/// Returns the distinct values of `values` in the order they first appear.
///
/// Uses equality instead of hashing so that floating point labels can be used.
pub fn unique_values<'a, T, I>(values: I) -> Vec<T>
where
    T: PartialEq + Copy + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out: Vec<T> = Vec::new();
    for value in values {
        if !out.contains(value) {
            out.push(*value);
        }
    }
    out
}

/// Feature matrix together with one class label per row.
pub struct Dataset<XT: Number, YT: ClassLabel> {
    pub x: DMatrix<XT>,
    pub y: DVector<YT>,
}

impl<XT: Number, YT: ClassLabel> Debug for Dataset<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        for (row, label) in self.x.row_iter().zip(self.y.iter()) {
            write!(f, "    [")?;
            for value in row.iter() {
                write!(f, "{:?}, ", value)?;
            }
            writeln!(f, "| {:?}],", label)?;
        }
        write!(f, "}}")
    }
}

impl<XT: Number, YT: ClassLabel> Clone for Dataset<XT, YT> {
    fn clone(&self) -> Self {
        Self::new(self.x.clone(), self.y.clone())
    }
}

impl<XT: Number, YT: ClassLabel> Dataset<XT, YT> {
    pub fn new(x: DMatrix<XT>, y: DVector<YT>) -> Self {
        Self { x, y }
    }

    pub fn nrows(&self) -> usize {
        self.y.len()
    }

    /// Number of feature columns (the label is not counted).
    pub fn nfeatures(&self) -> usize {
        self.x.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.nfeatures())
    }

    pub fn labels(&self) -> &[YT] {
        self.y.as_slice()
    }

    /// Feature column `index` as a vector.
    pub fn column(&self, index: usize) -> DVector<XT> {
        self.x.column(index).into_owned()
    }

    /// Distinct labels in first-occurrence order.
    pub fn classes(&self) -> Vec<YT> {
        unique_values(self.y.iter())
    }

    /// Builds a new dataset holding the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self::new(
            self.x.select_rows(indices.iter()),
            self.y.select_rows(indices.iter()),
        )
    }

    /// Partitions the rows on `x[feature_index] < threshold`.
    ///
    /// Rows keep their relative order on both sides; a row whose value equals the
    /// threshold goes right.
    pub fn split_on_threshold(&self, feature_index: usize, threshold: XT) -> (Self, Self) {
        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = (0..self.nrows())
            .partition(|&index| self.x[(index, feature_index)] < threshold);

        (self.select(&left_indices), self.select(&right_indices))
    }

    /// Shuffles the rows and splits them into train and test parts.
    pub fn train_test_split(&self, train_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::InvalidParameter(
                "train_size".into(),
                "should be between 0.0 and 1.0".into(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.nrows() as f64 * train_size).floor() as usize;

        Ok((
            self.select(&indices[..train_size]),
            self.select(&indices[train_size..]),
        ))
    }

    /// Elementwise comparison of features and labels within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        if self.x.shape() != other.x.shape() || self.y.len() != other.y.len() {
            return false;
        }
        let close = |a: f64, b: f64| abs_diff_eq!(a, b, epsilon = epsilon);

        self.x
            .iter()
            .zip(other.x.iter())
            .all(|(a, b)| match (a.to_f64(), b.to_f64()) {
                (Some(a), Some(b)) => close(a, b),
                _ => false,
            })
            && self
                .y
                .iter()
                .zip(other.y.iter())
                .all(|(a, b)| match (a.to_f64(), b.to_f64()) {
                    (Some(a), Some(b)) => close(a, b),
                    _ => false,
                })
    }
}

impl<T: Number> Dataset<T, T> {
    /// Builds a dataset from rows whose last element is the label.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let ncols = rows.first().ok_or(TreeError::EmptyDataset)?.len();
        if ncols < 2 {
            return Err(TreeError::TooFewColumns(ncols));
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(TreeError::RaggedRow {
                row,
                expected: ncols,
                found,
            });
        }

        let nfeatures = ncols - 1;
        let x = DMatrix::from_fn(rows.len(), nfeatures, |i, j| rows[i][j]);
        let y = DVector::from_iterator(rows.len(), rows.iter().map(|row| row[nfeatures]));
        Ok(Self::new(x, y))
    }

    /// Rows with the label appended as the last element.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.x
            .row_iter()
            .zip(self.y.iter())
            .map(|(row, label)| row.iter().copied().chain(std::iter::once(*label)).collect())
            .collect()
    }
}
