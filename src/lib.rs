pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod distance;
pub mod error;
pub mod spatial;

pub use cluster::{DBSCAN, Label};
pub use error::{Error, Result};
pub use spatial::KdTree;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
