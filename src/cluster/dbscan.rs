use crate::error::{Error, Result};
use crate::spatial::KdTree;
use crate::{ArrayView1, Matrix, distance};
use std::collections::HashSet;

/// Final label of one point after a clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Outlier: not density-reachable from any core point.
    Noise,
    /// Member of the cluster with the given identifier.
    Cluster(usize),
}

/// Working state during label propagation. `Queued` points sit on the seed
/// stack waiting to be finalized; neither transient state survives a run.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Unlabeled,
    Queued,
    Noise,
    Cluster(usize),
}

#[derive(Clone, Debug)]
pub struct DBSCAN {
    pub labels: Option<Vec<Label>>,
    pub core_sample_indices: Option<Vec<usize>>,
    eps: f64,
    min_samples: usize,
}

impl DBSCAN {
    /// Creates an unfitted estimator. `eps` is the neighborhood radius and
    /// `min_samples` the neighborhood size (the point itself included) needed
    /// to make a point a core point. Parameters are validated by `fit`.
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self {
            labels: None,
            core_sample_indices: None,
            eps,
            min_samples,
        }
    }

    /// Clusters the rows of `x` using Euclidean distance.
    ///
    /// Every row ends up either in exactly one cluster or labeled
    /// [`Label::Noise`]. A point's own position counts toward its
    /// neighborhood size, so `min_samples = 1` puts every point in some
    /// cluster. An empty matrix yields an empty label vector.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        self.fit_with(x, distance::euclidean)
    }

    /// Like [`fit`](Self::fit) with a caller-supplied distance metric.
    pub fn fit_with<F>(&mut self, x: &Matrix, dist_fn: F) -> Result<()>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        if !(self.eps > 0.0) || !self.eps.is_finite() {
            return Err(Error::InvalidInput(format!(
                "eps must be a positive finite number, got {}",
                self.eps
            )));
        }
        if self.min_samples == 0 {
            return Err(Error::InvalidInput(
                "min_samples must be at least 1, got 0".to_string(),
            ));
        }

        let n_samples = x.nrows();
        let tree = KdTree::new(x);

        let mut states = vec![State::Unlabeled; n_samples];
        let mut is_core = vec![false; n_samples];
        let mut cluster_id: usize = 0;

        for i in 0..n_samples {
            if states[i] != State::Unlabeled {
                continue;
            }

            // Seed stack for the expansion below. The query includes row i
            // itself at distance zero.
            let mut seeds = tree.range_query_with(x.row(i), self.eps, &dist_fn)?;

            if seeds.len() < self.min_samples {
                // Possibly promoted to a border point later; noise is not
                // a final verdict until the scan completes.
                states[i] = State::Noise;
                continue;
            }

            is_core[i] = true;
            states[i] = State::Cluster(cluster_id);

            for &j in &seeds {
                match states[j] {
                    State::Noise => states[j] = State::Cluster(cluster_id),
                    State::Unlabeled => states[j] = State::Queued,
                    _ => {}
                }
            }

            while let Some(q) = seeds.pop() {
                if states[q] != State::Queued {
                    continue;
                }
                states[q] = State::Cluster(cluster_id);

                let neighbors = tree.range_query_with(x.row(q), self.eps, &dist_fn)?;
                if neighbors.len() < self.min_samples {
                    continue;
                }
                is_core[q] = true;

                for j in neighbors {
                    match states[j] {
                        State::Noise => states[j] = State::Cluster(cluster_id),
                        State::Unlabeled => {
                            states[j] = State::Queued;
                            seeds.push(j);
                        }
                        _ => {}
                    }
                }
            }

            match cluster_id.checked_add(1) {
                Some(next) => cluster_id = next,
                // Wrapping with rows still ahead of the scan would reuse an
                // identifier; after the last row the increment is unused.
                None if i + 1 < n_samples => {
                    return Err(Error::Overflow {
                        remaining: n_samples - 1 - i,
                    });
                }
                None => {}
            }
        }

        self.labels = Some(
            states
                .into_iter()
                .map(|state| match state {
                    State::Noise => Label::Noise,
                    State::Cluster(k) => Label::Cluster(k),
                    State::Unlabeled | State::Queued => {
                        unreachable!("every point is finalized before the scan ends")
                    }
                })
                .collect(),
        );
        self.core_sample_indices = Some(
            is_core
                .iter()
                .enumerate()
                .filter(|&(_, &core)| core)
                .map(|(i, _)| i)
                .collect(),
        );

        Ok(())
    }

    /// Fits and returns the labels in row order.
    pub fn fit_predict(&mut self, x: &Matrix) -> Result<Vec<Label>> {
        self.fit(x)?;
        Ok(self.labels.clone().unwrap_or_default())
    }

    /// Fits with a caller-supplied metric and returns the labels.
    pub fn fit_predict_with<F>(&mut self, x: &Matrix, dist_fn: F) -> Result<Vec<Label>>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
    {
        self.fit_with(x, dist_fn)?;
        Ok(self.labels.clone().unwrap_or_default())
    }

    /// Number of clusters found, or `None` before a fit.
    pub fn n_clusters(&self) -> Option<usize> {
        self.labels.as_ref().map(|labels| {
            let unique: HashSet<usize> = labels
                .iter()
                .filter_map(|label| match label {
                    Label::Cluster(k) => Some(*k),
                    Label::Noise => None,
                })
                .collect();
            unique.len()
        })
    }

    /// Number of points labeled noise, or `None` before a fit.
    pub fn n_noise_points(&self) -> Option<usize> {
        self.labels
            .as_ref()
            .map(|labels| labels.iter().filter(|&&l| l == Label::Noise).count())
    }

    /// Whether row `sample_idx` was a core point, or `None` before a fit.
    pub fn is_core_sample(&self, sample_idx: usize) -> Option<bool> {
        self.core_sample_indices
            .as_ref()
            .map(|core| core.binary_search(&sample_idx).is_ok())
    }
}
