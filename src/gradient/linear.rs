use crate::dataset::Dataset;
use crate::metrics::mean_squared_error;
use crate::Vector;

/// Snapshot of the simple linear model `y = weight * x + bias`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearParameters {
    pub bias: f64,
    pub weight: f64,
}

/// Batch gradient descent for simple linear regression.
///
/// The dataset's rows are `(x, y)` samples. Each `step()` performs one full
/// pass over the dataset and applies one simultaneous update to bias and
/// weight; there is no internal stopping rule.
#[derive(Clone, Debug)]
pub struct LinearGradientDescent {
    data: Dataset,
    learning_rate: f64,
    bias: f64,
    weight: f64,
}

impl LinearGradientDescent {
    pub fn new(data: Dataset, learning_rate: f64) -> Result<Self, String> {
        if data.n_features() != 2 {
            return Err(format!(
                "Linear regression expects (x, y) rows, got {} columns",
                data.n_features()
            ));
        }
        if learning_rate <= 0.0 {
            return Err(format!("learning_rate must be > 0, got {}", learning_rate));
        }

        Ok(Self {
            data,
            learning_rate,
            bias: 0.0,
            weight: 0.0,
        })
    }

    /// Starts optimization from the given parameters instead of zero.
    pub fn with_parameters(mut self, bias: f64, weight: f64) -> Self {
        self.bias = bias;
        self.weight = weight;
        self
    }

    /// One batch update. Gradients are computed entirely from the
    /// parameters held at the start of the step, then both are updated
    /// at once.
    pub fn step(&mut self) -> LinearParameters {
        let m = self.data.n_samples() as f64;
        let mut bias_gradient = 0.0;
        let mut weight_gradient = 0.0;

        for i in 0..self.data.n_samples() {
            let point = self.data.point(i);
            let (x, y) = (point[0], point[1]);
            let residual = (self.weight * x + self.bias) - y;

            bias_gradient += (2.0 / m) * residual;
            weight_gradient += (2.0 / m) * x * residual;
        }

        self.bias -= self.learning_rate * bias_gradient;
        self.weight -= self.learning_rate * weight_gradient;

        self.parameters()
    }

    /// Mean squared error of the current parameters over the full dataset.
    pub fn loss(&self) -> f64 {
        let n = self.data.n_samples();
        let mut y_true = Vector::zeros(n);
        let mut y_pred = Vector::zeros(n);
        for i in 0..n {
            let point = self.data.point(i);
            y_true[i] = point[1];
            y_pred[i] = self.weight * point[0] + self.bias;
        }

        // Lengths always match; the error arm is unreachable here.
        mean_squared_error(&y_true, &y_pred).unwrap_or(f64::NAN)
    }

    pub fn parameters(&self) -> LinearParameters {
        LinearParameters {
            bias: self.bias,
            weight: self.weight,
        }
    }
}
