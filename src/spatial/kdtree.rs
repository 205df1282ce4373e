use crate::distance;
use crate::error::{Error, Result};
use crate::{ArrayView1, Matrix};

/// One node of the tree. Each node owns its children and stores the row
/// position of the pivot point it splits on.
struct Node {
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    axis: usize,
    index: usize,
}

/// An immutable k-d tree over a borrowed point matrix.
///
/// Rows of the matrix are points; the tree refers to them by row position
/// only and never copies coordinates. The borrow ties the tree's lifetime to
/// the data, so the matrix cannot be dropped or mutated while the tree is
/// alive.
///
/// Built once; there is no insertion or removal after construction.
pub struct KdTree<'a> {
    data: &'a Matrix,
    root: Option<Box<Node>>,
}

impl<'a> KdTree<'a> {
    /// Builds the tree by recursive median splits. The splitting axis cycles
    /// through the columns by depth, and the median along the axis is found
    /// with a linear-time selection rather than a sort. A matrix with no
    /// rows or no columns produces an empty tree.
    pub fn new(data: &'a Matrix) -> Self {
        let root = if data.nrows() == 0 || data.ncols() == 0 {
            None
        } else {
            let mut order: Vec<usize> = (0..data.nrows()).collect();
            build_range(data, &mut order, 0)
        };

        Self { data, root }
    }

    /// Returns the row positions of all points within `radius` of `point`,
    /// measured by Euclidean distance.
    pub fn range_query(&self, point: ArrayView1<f64>, radius: f64) -> Result<Vec<usize>> {
        self.range_query_with(point, radius, distance::euclidean)
    }

    /// Returns the row positions of all points within `radius` of `point`,
    /// measured by `dist_fn`. The metric must be non-negative and satisfy
    /// the triangle inequality or the pruning step discards valid results.
    ///
    /// Result order follows the traversal and is not sorted by distance.
    pub fn range_query_with<F>(
        &self,
        point: ArrayView1<f64>,
        radius: f64,
        dist_fn: F,
    ) -> Result<Vec<usize>>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };

        if point.len() != self.data.ncols() {
            return Err(Error::InvalidInput(format!(
                "query point has {} coordinates but the indexed data has {}",
                point.len(),
                self.data.ncols()
            )));
        }

        let mut found = Vec::new();
        self.query_node(root, point, radius, &dist_fn, &mut found);
        Ok(found)
    }

    fn query_node<F>(
        &self,
        node: &Node,
        point: ArrayView1<f64>,
        radius: f64,
        dist_fn: &F,
        found: &mut Vec<usize>,
    ) where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        let pivot = self.data.row(node.index);

        if dist_fn(pivot, point) <= radius {
            found.push(node.index);
        }

        // Distance from the query point to the splitting hyperplane. The
        // subtree on the query's side is always searched; the far side only
        // when the hyperplane is close enough that it could still hold hits.
        let plane_dist = (point[node.axis] - pivot[node.axis]).abs();

        let (near, far) = if point[node.axis] <= pivot[node.axis] {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };

        if let Some(child) = near {
            self.query_node(child, point, radius, dist_fn, found);
        }
        if plane_dist <= radius {
            if let Some(child) = far {
                self.query_node(child, point, radius, dist_fn, found);
            }
        }
    }
}

fn build_range(data: &Matrix, order: &mut [usize], depth: usize) -> Option<Box<Node>> {
    if order.is_empty() {
        return None;
    }

    let axis = depth % data.ncols();
    let mid = order.len() / 2;

    // Partial ordering: everything left of `mid` is <= the pivot on this
    // axis, everything right is >=. Ties land on either side.
    order.select_nth_unstable_by(mid, |&l, &r| data[[l, axis]].total_cmp(&data[[r, axis]]));
    let index = order[mid];

    let (lo, rest) = order.split_at_mut(mid);
    Some(Box::new(Node {
        left: build_range(data, lo, depth + 1),
        right: build_range(data, &mut rest[1..], depth + 1),
        axis,
        index,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{euclidean, manhattan};
    use ndarray::array;
    use ndarray_rand::RandomExt;
    use ndarray_rand::rand_distr::Uniform;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn brute_force<F>(data: &Matrix, point: ArrayView1<f64>, radius: f64, dist_fn: F) -> Vec<usize>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        (0..data.nrows())
            .filter(|&i| dist_fn(data.row(i), point) <= radius)
            .collect()
    }

    #[test]
    fn test_empty_matrix() {
        let data = Matrix::zeros((0, 3));
        let tree = KdTree::new(&data);
        let found = tree.range_query(array![0.0, 0.0, 0.0].view(), 10.0).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_zero_columns() {
        let data = Matrix::zeros((4, 0));
        let tree = KdTree::new(&data);
        let found = tree.range_query(array![0.0].view(), 10.0).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_single_point() {
        let data = array![[2.0, 3.0]];
        let tree = KdTree::new(&data);

        let hit = tree.range_query(array![2.0, 3.5].view(), 1.0).unwrap();
        assert_eq!(hit, vec![0]);

        let miss = tree.range_query(array![5.0, 5.0].view(), 1.0).unwrap();
        assert!(miss.is_empty());
    }

    #[test]
    fn test_query_includes_exact_match() {
        let data = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let tree = KdTree::new(&data);

        // Radius zero still finds the point itself.
        let found = tree.range_query(array![2.0, 2.0].view(), 0.0).unwrap();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let data = array![[0.0, 0.0], [3.0, 4.0]];
        let tree = KdTree::new(&data);

        // (3,4) sits at exactly distance 5.
        let mut found = tree.range_query(array![0.0, 0.0].view(), 5.0).unwrap();
        found.sort_unstable();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let tree = KdTree::new(&data);

        let result = tree.range_query(array![1.0].view(), 1.0);
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let result = tree.range_query(array![1.0, 2.0, 3.0].view(), 1.0);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_matches_brute_force_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = Matrix::random_using((200, 3), Uniform::new(-10.0, 10.0), &mut rng);
        let queries = Matrix::random_using((20, 3), Uniform::new(-12.0, 12.0), &mut rng);
        let tree = KdTree::new(&data);

        for radius in [0.5, 2.0, 5.0, 25.0] {
            for q in queries.rows() {
                let mut found = tree.range_query(q, radius).unwrap();
                found.sort_unstable();
                assert_eq!(found, brute_force(&data, q, radius, euclidean));
            }
        }
    }

    #[test]
    fn test_matches_brute_force_in_set_queries() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = Matrix::random_using((150, 2), Uniform::new(0.0, 1.0), &mut rng);
        let tree = KdTree::new(&data);

        for i in 0..data.nrows() {
            let mut found = tree.range_query(data.row(i), 0.1).unwrap();
            found.sort_unstable();
            assert_eq!(found, brute_force(&data, data.row(i), 0.1, euclidean));
            // The query point itself is always a hit.
            assert!(found.contains(&i));
        }
    }

    #[test]
    fn test_matches_brute_force_manhattan() {
        let mut rng = StdRng::seed_from_u64(13);
        let data = Matrix::random_using((100, 4), Uniform::new(-5.0, 5.0), &mut rng);
        let tree = KdTree::new(&data);

        for q in data.rows().into_iter().take(25) {
            let mut found = tree.range_query_with(q, 3.0, manhattan).unwrap();
            found.sort_unstable();
            assert_eq!(found, brute_force(&data, q, 3.0, manhattan));
        }
    }

    #[test]
    fn test_duplicate_coordinates() {
        let data = array![
            [1.0, 1.0],
            [1.0, 1.0],
            [1.0, 1.0],
            [4.0, 4.0]
        ];
        let tree = KdTree::new(&data);

        let mut found = tree.range_query(array![1.0, 1.0].view(), 0.5).unwrap();
        found.sort_unstable();
        assert_eq!(found, vec![0, 1, 2]);
    }
}
