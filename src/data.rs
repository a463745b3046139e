//! Data
//!
//! Row-major dataset container, label bookkeeping and the row helpers shared
//! by the split search and the tree builder.
use crate::errors::CartError;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A borrowed row, feature values followed by the class label.
pub type Row<'a> = &'a [f64];

/// A rectangular, validated table of rows stored contiguously in row-major
/// order. The last column of every row holds the class label.
///
/// Construction is the boundary at which malformed input is rejected, so
/// everything downstream can assume at least one row, at least one feature
/// and no NaN values. Deserialization goes through the same checks, from a
/// list of rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Dataset {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<Vec<Vec<f64>>> for Dataset {
    type Error = CartError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Dataset::new(&rows)
    }
}

impl From<Dataset> for Vec<Vec<f64>> {
    fn from(dataset: Dataset) -> Self {
        dataset.row_views().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Dataset {
    /// Validate and copy a set of rows into a dataset.
    ///
    /// * `rows` - Rows of equal length, the last value of each being its label.
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, CartError> {
        let first = rows.first().ok_or(CartError::EmptyDataset)?;
        let cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() < 2 {
                return Err(CartError::RowTooShort(i, row.len()));
            }
            if row.len() != cols {
                return Err(CartError::RaggedRow(i, cols, row.len()));
            }
            if let Some(j) = row.iter().position(|v| v.is_nan()) {
                return Err(CartError::NanValueFound(i, j));
            }
            data.extend_from_slice(row);
        }
        Ok(Dataset {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Get a single reference to an item in the dataset.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &f64 {
        &self.data[i * self.cols + j]
    }

    /// Get a row of the data, label included.
    pub fn get_row(&self, row: usize) -> Row<'_> {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Borrowed views of every row, in order.
    pub fn row_views(&self) -> Vec<Row<'_>> {
        self.data.chunks_exact(self.cols).collect()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, label included.
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.cols - 1
    }

    /// The distinct labels of the dataset.
    pub fn labels(&self) -> LabelSet {
        LabelSet::from_rows(&self.row_views())
    }
}

/// The label column value of a row.
#[inline]
pub fn label_of(row: Row) -> f64 {
    row[row.len() - 1]
}

// -0.0 and 0.0 compare equal, so they must share a key.
#[inline]
fn label_key(label: f64) -> u64 {
    if label == 0.0 {
        0.0_f64.to_bits()
    } else {
        label.to_bits()
    }
}

/// Distinct labels in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: Vec<f64>,
    index: HashMap<u64, usize>,
}

impl LabelSet {
    /// Collect the labels occurring in the label column of `rows`.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut set = LabelSet::default();
        for row in rows {
            set.insert(label_of(row));
        }
        set
    }

    /// Add a label, returning its position in the set.
    pub fn insert(&mut self, label: f64) -> usize {
        let key = label_key(label);
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.labels.len();
        self.index.insert(key, i);
        self.labels.push(label);
        i
    }

    /// Position of a label in the set, if present.
    pub fn position(&self, label: f64) -> Option<usize> {
        self.index.get(&label_key(label)).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.labels
    }

    /// Count the rows of a group carrying each label of the set. Labels outside
    /// the set are not counted.
    pub fn counts(&self, rows: &[Row]) -> Vec<usize> {
        let mut counts = vec![0; self.labels.len()];
        for row in rows {
            if let Some(i) = self.position(label_of(row)) {
                counts[i] += 1;
            }
        }
        counts
    }
}

/// Partition rows on a single feature test. Rows with `row[index] < value` go
/// left, the rest go right. Order within each side follows `rows`.
pub fn split_rows<'a>(index: usize, value: f64, rows: &[Row<'a>]) -> (Vec<Row<'a>>, Vec<Row<'a>>) {
    rows.iter().copied().partition(|row| row[index] < value)
}

/// The most frequent label of a group. When several labels share the highest
/// count, the smallest of them wins.
pub fn to_terminal(rows: &[Row]) -> Result<f64, CartError> {
    let labels = LabelSet::from_rows(rows);
    let counts = labels.counts(rows);
    let mut best: Option<(f64, usize)> = None;
    for (&label, &count) in labels.as_slice().iter().zip(counts.iter()) {
        match best {
            Some((l, c)) if c > count || (c == count && l <= label) => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label).ok_or(CartError::EmptyGroup)
}
