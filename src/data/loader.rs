//! CSV ingestion
use crate::data::dataset::Dataset;
use crate::error::{Result, TreeError};
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use nalgebra::DMatrix;
use std::path::Path;

/// How to read a delimited file.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// The first record holds column names.
    pub has_headers: bool,
    /// Number of leading columns (e.g. passenger ids) to ignore.
    pub skip_columns: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            skip_columns: 0,
        }
    }
}

/// A labelled dataset and, when the file had a header, the feature names.
#[derive(Debug)]
pub struct LoadedData {
    pub dataset: Dataset<f64, f64>,
    pub feature_names: Option<Vec<String>>,
}

/// Loads a CSV file whose last column is the class label.
///
/// # Errors
///
/// Fails on unreadable files, malformed CSV, non-numeric or non-finite cells and files
/// without rows.
pub fn load_csv<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<LoadedData> {
    let records = read_records(path.as_ref(), options)?;
    let dataset = Dataset::from_rows(&records.rows)?;

    let feature_names = records.header.map(|names| {
        let nfeatures = dataset.nfeatures();
        names.into_iter().take(nfeatures).collect()
    });

    debug!(
        "Loaded {} rows with {} features from {}",
        dataset.nrows(),
        dataset.nfeatures(),
        path.as_ref().display()
    );

    Ok(LoadedData {
        dataset,
        feature_names,
    })
}

/// Unlabelled rows to classify, with an identifier per row.
#[derive(Debug)]
pub struct LoadedFeatures {
    /// First skipped column when `skip_columns > 0`, otherwise the 1-based row number.
    pub ids: Vec<String>,
    pub x: DMatrix<f64>,
}

/// Loads an unlabelled CSV file into a feature matrix.
pub fn load_features<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<LoadedFeatures> {
    let records = read_records(path.as_ref(), options)?;
    // the csv reader already rejects records of unequal length
    let ncols = records.rows.first().ok_or(TreeError::EmptyDataset)?.len();
    let rows = &records.rows;
    Ok(LoadedFeatures {
        ids: records.ids,
        x: DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j]),
    })
}

struct Records {
    header: Option<Vec<String>>,
    ids: Vec<String>,
    rows: Vec<Vec<f64>>,
}

fn read_records(path: &Path, options: &LoadOptions) -> Result<Records> {
    let mut reader = ReaderBuilder::new()
        .has_headers(options.has_headers)
        .from_path(path)?;

    let header = if options.has_headers {
        Some(
            reader
                .headers()?
                .iter()
                .skip(options.skip_columns)
                .map(|name| name.trim().to_string())
                .collect(),
        )
    } else {
        None
    };

    let mut ids = Vec::new();
    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index + 1;
        let id = match options.skip_columns {
            0 => row.to_string(),
            _ => record.get(0).unwrap_or_default().trim().to_string(),
        };
        ids.push(id);
        rows.push(parse_record(&record, row, options.skip_columns)?);
    }
    Ok(Records { header, ids, rows })
}

fn parse_record(record: &StringRecord, row: usize, skip_columns: usize) -> Result<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .skip(skip_columns)
        .map(|(column, cell)| match cell.trim().parse::<f64>() {
            // NaN and infinities parse fine but can't be compared or used as classes
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(TreeError::Parse {
                row,
                column: column + 1,
                value: cell.to_string(),
            }),
        })
        .collect()
}
