use crate::dataset::Dataset;
use crate::metrics::cross_entropy;
use crate::Vector;

/// Snapshot of the 2-feature logistic model with logit `a + b*x + c*y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Batch gradient descent for binary logistic regression over 2-D points.
///
/// The dataset's rows are `(x, y)` feature pairs and `labels` holds the
/// matching 0/1 targets. Each `step()` applies one full-batch update to
/// `(a, b, c)`; `loss()` is the mean binary cross-entropy with predictions
/// clamped away from 0 and 1 (see `metrics::CLAMP_EPSILON`).
#[derive(Clone, Debug)]
pub struct LogisticGradientDescent {
    data: Dataset,
    labels: Vector,
    learning_rate: f64,
    a: f64,
    b: f64,
    c: f64,
}

impl LogisticGradientDescent {
    pub fn new(data: Dataset, labels: Vector, learning_rate: f64) -> Result<Self, String> {
        if data.n_features() != 2 {
            return Err(format!(
                "Logistic regression expects (x, y) feature rows, got {} columns",
                data.n_features()
            ));
        }
        if labels.len() != data.n_samples() {
            return Err(format!(
                "Number of labels ({}) must match number of samples ({})",
                labels.len(),
                data.n_samples()
            ));
        }
        for &label in labels.iter() {
            if label != 0.0 && label != 1.0 {
                return Err("Labels must be 0 or 1 for binary classification".to_string());
            }
        }
        if learning_rate <= 0.0 {
            return Err(format!("learning_rate must be > 0, got {}", learning_rate));
        }

        Ok(Self {
            data,
            labels,
            learning_rate,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        })
    }

    /// Starts optimization from the given parameters instead of zero.
    pub fn with_parameters(mut self, a: f64, b: f64, c: f64) -> Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self
    }

    /// One batch update of all three parameters, computed from the
    /// start-of-step values.
    pub fn step(&mut self) -> LogisticParameters {
        let m = self.data.n_samples() as f64;
        let mut grad_a = 0.0;
        let mut grad_b = 0.0;
        let mut grad_c = 0.0;

        for i in 0..self.data.n_samples() {
            let point = self.data.point(i);
            let (x, y) = (point[0], point[1]);
            let error = self.predict_proba(x, y) - self.labels[i];

            grad_a += error;
            grad_b += error * x;
            grad_c += error * y;
        }

        self.a -= self.learning_rate * grad_a / m;
        self.b -= self.learning_rate * grad_b / m;
        self.c -= self.learning_rate * grad_c / m;

        self.parameters()
    }

    /// Mean binary cross-entropy of the current parameters.
    pub fn loss(&self) -> f64 {
        let n = self.data.n_samples();
        let mut y_pred = Vector::zeros(n);
        for i in 0..n {
            let point = self.data.point(i);
            y_pred[i] = self.predict_proba(point[0], point[1]);
        }

        cross_entropy(&self.labels, &y_pred).unwrap_or(f64::NAN)
    }

    /// Sigmoid of the logit `a + b*x + c*y` at the current parameters.
    pub fn predict_proba(&self, x: f64, y: f64) -> f64 {
        let logit = self.a + self.b * x + self.c * y;
        1.0 / (1.0 + (-logit).exp())
    }

    pub fn parameters(&self) -> LogisticParameters {
        LogisticParameters {
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }
}
