//! Iterative clustering algorithms exposed one step at a time.
//!
//! This module provides two clusterers that a driving loop advances
//! explicitly, inspecting a complete state snapshot between steps:
//! - `KMeans`: Lloyd's algorithm with a fixed cluster count k
//! - `MeanShift`: kernel density mode seeking with no predetermined k
//!
//! # Examples
//!
//! ## K-Means
//! ```rust
//! use stepfit::{Dataset, KMeans};
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let data = Dataset::new(array![
//!     [1.0, 1.0],
//!     [1.5, 2.0],
//!     [8.0, 8.0],
//!     [8.5, 8.2]
//! ]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut kmeans = KMeans::new(data, 2, &mut rng).unwrap();
//! loop {
//!     let snapshot = kmeans.step();
//!     if !snapshot.changed {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Mean-shift
//! ```rust
//! use stepfit::{Dataset, MeanShift};
//! use ndarray::array;
//!
//! let data = Dataset::new(array![
//!     [1.0, 1.0],
//!     [1.2, 0.9],
//!     [9.0, 9.0],
//!     [9.1, 8.8]
//! ]).unwrap();
//!
//! let mut ms = MeanShift::new(data, 2.0).unwrap();
//! while !ms.step() {}
//! let labels = ms.labels();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod kmeans;
mod mean_shift;

pub use kmeans::{KMeans, KMeansStep};
pub use mean_shift::MeanShift;
