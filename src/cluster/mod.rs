//! Density-based clustering.
//!
//! [`DBSCAN`] groups points that sit in dense neighborhoods and flags
//! everything else as noise. Neighborhood lookups go through a
//! [`KdTree`](crate::KdTree) built over the input, so a whole run costs
//! `O(n)` range queries rather than `O(n^2)` pairwise distances.
//!
//! # Examples
//!
//! ```rust
//! use kdscan::{DBSCAN, Label};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0] // Outlier
//! ];
//!
//! let mut dbscan = DBSCAN::new(1.0, 2); // eps=1.0, min_samples=2
//! let labels = dbscan.fit_predict(&x).unwrap();
//!
//! assert_eq!(labels[0], Label::Cluster(0));
//! assert_eq!(labels[3], Label::Cluster(1));
//! assert_eq!(labels[6], Label::Noise);
//!
//! println!("clusters: {:?}", dbscan.n_clusters());
//! println!("noise points: {:?}", dbscan.n_noise_points());
//! ```

mod dbscan;

pub use dbscan::{DBSCAN, Label};
