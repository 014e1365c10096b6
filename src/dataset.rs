use crate::Matrix;
use ndarray::ArrayView1;

/// An immutable point set: one row per point, one column per coordinate.
///
/// A `Dataset` is fixed for the lifetime of whichever fitting or clustering
/// run consumes it; every component takes ownership of its own copy.
#[derive(Clone, Debug)]
pub struct Dataset {
    points: Matrix,
}

impl Dataset {
    pub fn new(points: Matrix) -> Result<Self, String> {
        if points.nrows() == 0 || points.ncols() == 0 {
            return Err("Dataset must have at least one point and one coordinate".to_string());
        }

        Ok(Self { points })
    }

    /// Builds a 2-D dataset from row literals, handy for fixtures.
    pub fn from_rows(rows: &[[f64; 2]]) -> Result<Self, String> {
        let mut points = Matrix::zeros((rows.len(), 2));
        for (i, row) in rows.iter().enumerate() {
            points[[i, 0]] = row[0];
            points[[i, 1]] = row[1];
        }
        Self::new(points)
    }

    pub fn n_samples(&self) -> usize {
        self.points.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.points.ncols()
    }

    pub fn point(&self, i: usize) -> ArrayView1<'_, f64> {
        self.points.row(i)
    }

    pub fn points(&self) -> &Matrix {
        &self.points
    }
}
