pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod gradient;
pub mod metrics;

pub use cluster::{KMeans, KMeansStep, MeanShift};
pub use dataset::Dataset;
pub use gradient::{
    LinearGradientDescent, LinearParameters, LogisticGradientDescent, LogisticParameters,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
