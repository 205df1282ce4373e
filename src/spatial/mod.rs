//! Spatial indexing for fast neighborhood queries.
//!
//! The only index provided is [`KdTree`], an immutable k-d tree built once
//! over a borrowed point matrix. It answers exact fixed-radius queries and is
//! what makes repeated region queries (as DBSCAN issues them) cheap compared
//! to a linear scan.
//!
//! # Examples
//!
//! ```rust
//! use kdscan::KdTree;
//! use ndarray::array;
//!
//! let points = array![
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [10.0, 10.0]
//! ];
//!
//! let tree = KdTree::new(&points);
//! let mut near_origin = tree.range_query(array![0.0, 0.0].view(), 1.5).unwrap();
//! near_origin.sort_unstable();
//! assert_eq!(near_origin, vec![0, 1]);
//! ```

mod kdtree;

pub use kdtree::KdTree;
