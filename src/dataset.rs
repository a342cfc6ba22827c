use crate::foundation::error::{HeatspecError, HeatspecResult};

/// Matrix values plus their row and column labels.
///
/// `values[r][c]` is the cell for `row_labels[r]` and `col_labels[c]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
    /// Explicit `[min, max]` for the color scale. Observed extremes are used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<[f64; 2]>,
}

impl Dataset {
    /// Build and validate in one step.
    pub fn new(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> HeatspecResult<Self> {
        let ds = Self {
            row_labels,
            col_labels,
            values,
            value_range: None,
        };
        ds.validate()?;
        Ok(ds)
    }

    /// Square matrix sharing one label list for rows and columns.
    pub fn square(labels: Vec<String>, values: Vec<Vec<f64>>) -> HeatspecResult<Self> {
        Self::new(labels.clone(), labels, values)
    }

    pub fn with_value_range(mut self, min: f64, max: f64) -> HeatspecResult<Self> {
        self.value_range = Some([min, max]);
        self.validate()?;
        Ok(self)
    }

    pub fn from_json_str(s: &str) -> HeatspecResult<Self> {
        let ds: Dataset = serde_json::from_str(s)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn cols(&self) -> usize {
        self.col_labels.len()
    }

    pub fn validate(&self) -> HeatspecResult<()> {
        if self.row_labels.is_empty() || self.col_labels.is_empty() {
            return Err(HeatspecError::dataset_shape(format!(
                "dataset must have at least one row and one column (got {}x{})",
                self.rows(),
                self.cols()
            )));
        }
        if self.values.len() != self.rows() {
            return Err(HeatspecError::dataset_shape(format!(
                "{} row label(s) but {} row(s) of values",
                self.rows(),
                self.values.len()
            )));
        }
        for (r, row) in self.values.iter().enumerate() {
            if row.len() != self.cols() {
                return Err(HeatspecError::dataset_shape(format!(
                    "row {r} ('{}') has {} value(s), expected {}",
                    self.row_labels[r],
                    row.len(),
                    self.cols()
                )));
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(HeatspecError::dataset_shape(format!(
                    "value at row {r}, column {c} is not a finite number"
                )));
            }
        }
        if let Some([min, max]) = self.value_range
            && (!min.is_finite() || !max.is_finite() || min > max)
        {
            return Err(HeatspecError::dataset_shape(format!(
                "value range [{min}, {max}] must be finite with min <= max"
            )));
        }
        Ok(())
    }

    /// `[min, max]` for the color scale. A constant grid is widened by 0.5 each
    /// way so the scale never has zero width.
    pub fn value_range(&self) -> [f64; 2] {
        if let Some(range) = self.value_range {
            return range;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.values.iter().flatten() {
            min = min.min(*v);
            max = max.max(*v);
        }
        if min == max {
            return [min - 0.5, max + 0.5];
        }
        [min, max]
    }

    /// Cells as `[column, row, value]` triples, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (c, r, *v)))
    }
}
