//! Batch gradient descent optimizers.
//!
//! This module provides step-wise gradient descent over a fixed dataset:
//! - `LinearGradientDescent`: fits `y = w*x + b` by minimizing mean squared error
//! - `LogisticGradientDescent`: fits a 2-feature sigmoid classifier by
//!   minimizing mean binary cross-entropy
//!
//! Both optimizers own their dataset and parameters and expose one batch
//! update per `step()` call, so a driving loop can inspect (or render) the
//! parameter trajectory between updates. Neither auto-stops: the caller
//! decides when to quit, typically after a fixed iteration budget or when
//! `loss()` stops improving.
//!
//! # Examples
//!
//! ```rust
//! use stepfit::{Dataset, LinearGradientDescent};
//! use ndarray::array;
//!
//! // rows are (x, y) samples of y = 2x
//! let data = Dataset::new(array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]).unwrap();
//! let mut optimizer = LinearGradientDescent::new(data, 0.01).unwrap();
//!
//! for _ in 0..1000 {
//!     optimizer.step();
//! }
//! let params = optimizer.parameters();
//! assert!((params.weight - 2.0).abs() < 0.1);
//! ```

mod linear;
mod logistic;

pub use linear::{LinearGradientDescent, LinearParameters};
pub use logistic::{LogisticGradientDescent, LogisticParameters};
