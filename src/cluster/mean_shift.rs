use crate::dataset::Dataset;
use crate::Matrix;
use ndarray::ArrayView1;

/// Displacement below which a mode is considered settled for the step, in
/// dataset coordinate units. Callers working on very small or very large
/// scales should override it with `shift_tolerance`.
const DEFAULT_SHIFT_TOLERANCE: f64 = 0.01;

/// Mode-seeking clustering under a flat-cutoff Gaussian kernel.
///
/// Every input point carries its own mode, initialized at the point itself.
/// Each `step()` moves every mode to the kernel-weighted centroid of the
/// dataset points within one bandwidth, and reports `true` once no mode
/// moved more than the shift tolerance. `labels()` then merges modes lying
/// within half a bandwidth of each other into discrete clusters.
#[derive(Clone, Debug)]
pub struct MeanShift {
    data: Dataset,
    modes: Matrix,
    bandwidth: f64,
    shift_tolerance: f64,
    converged: bool,
    iterations: usize,
}

impl MeanShift {
    pub fn new(data: Dataset, bandwidth: f64) -> Result<Self, String> {
        if bandwidth <= 0.0 {
            return Err(format!("bandwidth must be > 0, got {}", bandwidth));
        }

        let modes = data.points().clone();
        Ok(Self {
            data,
            modes,
            bandwidth,
            shift_tolerance: DEFAULT_SHIFT_TOLERANCE,
            converged: false,
            iterations: 0,
        })
    }

    pub fn shift_tolerance(mut self, tolerance: f64) -> Result<Self, String> {
        if tolerance <= 0.0 {
            return Err(format!("shift tolerance must be > 0, got {}", tolerance));
        }
        self.shift_tolerance = tolerance;
        Ok(self)
    }

    /// One shift pass over every mode. Returns `true` once every mode's
    /// displacement is within the shift tolerance; after that the clusterer
    /// is converged and further calls are no-ops.
    pub fn step(&mut self) -> bool {
        if self.converged {
            return true;
        }

        let n = self.data.n_samples();
        let d = self.data.n_features();
        let bandwidth_sq = self.bandwidth * self.bandwidth;
        let mut all_settled = true;

        for i in 0..n {
            let mode = self.modes.row(i).to_owned();
            let mut weighted_sum = vec![0.0; d];
            let mut total_weight = 0.0;

            for p in 0..n {
                let point = self.data.point(p);
                let dist_sq = squared_distance(&mode.view(), &point);
                if dist_sq <= bandwidth_sq {
                    let weight = (-dist_sq / (2.0 * bandwidth_sq)).exp();
                    for j in 0..d {
                        weighted_sum[j] += point[j] * weight;
                    }
                    total_weight += weight;
                }
            }

            // Zero weight means no point lies within the bandwidth; the
            // mode stays where it is.
            if total_weight > 0.0 {
                let mut displacement_sq = 0.0;
                for j in 0..d {
                    let new_coord = weighted_sum[j] / total_weight;
                    let delta = new_coord - mode[j];
                    displacement_sq += delta * delta;
                    weighted_sum[j] = new_coord;
                }

                // A settled mode keeps its old position; only moves beyond
                // the tolerance are written back.
                if displacement_sq.sqrt() > self.shift_tolerance {
                    for j in 0..d {
                        self.modes[[i, j]] = weighted_sum[j];
                    }
                    all_settled = false;
                }
            }
        }

        self.iterations += 1;
        if all_settled {
            self.converged = true;
        }
        all_settled
    }

    /// Greedy ordered merge of the current modes into cluster ids.
    ///
    /// Points are scanned in index order; each mode joins the first
    /// previously created representative within `bandwidth / 2`, or founds
    /// a new cluster. The scan order is part of the contract: it makes the
    /// labeling deterministic for a given dataset. Meaningful labels are
    /// only promised once `step()` has reported convergence, but the merge
    /// itself is a pure function of the current modes.
    pub fn labels(&self) -> Vec<usize> {
        let n = self.data.n_samples();
        let merge_radius = self.bandwidth / 2.0;
        let mut representatives: Vec<usize> = Vec::new();
        let mut labels = vec![0; n];

        for i in 0..n {
            let mode = self.modes.row(i);
            let mut assigned = None;

            for (cluster, &rep) in representatives.iter().enumerate() {
                let rep_mode = self.modes.row(rep);
                if squared_distance(&mode, &rep_mode).sqrt() < merge_radius {
                    assigned = Some(cluster);
                    break;
                }
            }

            labels[i] = match assigned {
                Some(cluster) => cluster,
                None => {
                    representatives.push(i);
                    representatives.len() - 1
                }
            };
        }

        labels
    }

    pub fn modes(&self) -> &Matrix {
        &self.modes
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

fn squared_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
}
