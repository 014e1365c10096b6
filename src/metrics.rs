use crate::Vector;

/// Probabilities are clamped to `[CLAMP_EPSILON, 1 - CLAMP_EPSILON]` before
/// any logarithm is taken, so a perfectly separated prediction yields a large
/// finite loss instead of infinity. The value shifts loss magnitudes near
/// perfect separation but not gradient direction.
pub const CLAMP_EPSILON: f64 = 1e-12;

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, String> {
    if y_true.len() != y_pred.len() {
        return Err("y_true and y_pred must have the same length".to_string());
    }

    let diff = y_true - y_pred;
    let mse = diff.mapv(|x| x * x).mean().unwrap();
    Ok(mse)
}

pub fn cross_entropy(y_true: &Vector, y_pred: &Vector) -> Result<f64, String> {
    if y_true.len() != y_pred.len() {
        return Err("y_true and y_pred must have the same length".to_string());
    }

    let loss = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&y, &p)| {
            let p = p.max(CLAMP_EPSILON).min(1.0 - CLAMP_EPSILON);
            -y * p.ln() - (1.0 - y) * (1.0 - p).ln()
        })
        .sum::<f64>();

    Ok(loss / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error_zero() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_squared_error_value() {
        let y_true = array![0.0, 0.0];
        let y_pred = array![2.0, 4.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_squared_error_length_mismatch() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0];

        assert!(mean_squared_error(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_cross_entropy_at_half() {
        // p = 0.5 for every sample gives -ln(0.5) regardless of labels.
        let y_true = array![1.0, 0.0, 1.0];
        let y_pred = array![0.5, 0.5, 0.5];

        let loss = cross_entropy(&y_true, &y_pred).unwrap();
        assert!((loss - 0.5f64.ln().abs()).abs() < 1e-10);
    }

    #[test]
    fn test_cross_entropy_clamps_extremes() {
        let y_true = array![1.0, 0.0];
        let y_pred = array![0.0, 1.0]; // would be -ln(0) without the clamp

        let loss = cross_entropy(&y_true, &y_pred).unwrap();
        assert!(loss.is_finite());
        assert!(loss > 10.0);
    }
}
