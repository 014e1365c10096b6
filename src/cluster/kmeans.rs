use crate::dataset::Dataset;
use crate::Matrix;
use ndarray::ArrayView1;
use rand::Rng;

/// Complete state snapshot returned by one k-means step.
#[derive(Clone, Debug)]
pub struct KMeansStep {
    pub assignments: Vec<usize>,
    pub centroids: Matrix,
    pub changed: bool,
}

/// Step-wise Lloyd's algorithm with a fixed cluster count.
///
/// Each `step()` reassigns every point to its nearest centroid and then
/// moves each centroid to the mean of its assigned points. A step whose
/// assignments match the previous step's reports `changed = false`; the
/// clusterer is then converged and further steps are no-ops returning the
/// same snapshot.
#[derive(Clone, Debug)]
pub struct KMeans {
    data: Dataset,
    k: usize,
    centroids: Matrix,
    assignments: Vec<usize>,
    converged: bool,
    iterations: usize,
}

impl KMeans {
    /// Initial centroids are sampled uniformly at random from the dataset,
    /// with replacement. The caller supplies the random source so runs can
    /// be made deterministic.
    pub fn new(data: Dataset, k: usize, rng: &mut impl Rng) -> Result<Self, String> {
        if k == 0 {
            return Err("k must be >= 1".to_string());
        }
        let mut centroids = Matrix::zeros((k, data.n_features()));
        for c in 0..k {
            let idx = rng.gen_range(0..data.n_samples());
            centroids.row_mut(c).assign(&data.point(idx));
        }
        Self::with_centroids(data, centroids)
    }

    /// Builds a clusterer from explicit initial centroids (k is the number
    /// of centroid rows).
    pub fn with_centroids(data: Dataset, centroids: Matrix) -> Result<Self, String> {
        let k = centroids.nrows();
        if k == 0 {
            return Err("k must be >= 1".to_string());
        }
        if k > data.n_samples() {
            return Err(format!(
                "k={} exceeds dataset size {}",
                k,
                data.n_samples()
            ));
        }
        if centroids.ncols() != data.n_features() {
            return Err(format!(
                "Centroids have {} coordinates but points have {}",
                centroids.ncols(),
                data.n_features()
            ));
        }

        let n = data.n_samples();
        Ok(Self {
            data,
            k,
            centroids,
            assignments: vec![0; n],
            converged: false,
            iterations: 0,
        })
    }

    /// One Lloyd iteration. No-op once converged.
    pub fn step(&mut self) -> KMeansStep {
        if self.converged {
            return self.snapshot(false);
        }

        let changed = self.assign();
        self.update_centroids();
        self.iterations += 1;
        if !changed {
            self.converged = true;
        }

        self.snapshot(changed)
    }

    /// Nearest-centroid assignment pass. Ties keep the point's previous
    /// cluster when it is among the minimal-distance set; otherwise the
    /// lowest centroid index wins.
    fn assign(&mut self) -> bool {
        let mut changed = false;

        for i in 0..self.data.n_samples() {
            let point = self.data.point(i);
            let previous = self.assignments[i];

            let mut min_distance = f64::INFINITY;
            let mut closest = 0;
            for c in 0..self.k {
                let distance = euclidean_distance(&point, &self.centroids.row(c));
                if distance < min_distance {
                    min_distance = distance;
                    closest = c;
                }
            }

            if euclidean_distance(&point, &self.centroids.row(previous)) <= min_distance {
                closest = previous;
            }

            if closest != previous {
                self.assignments[i] = closest;
                changed = true;
            }
        }

        changed
    }

    /// Moves each centroid to the mean of its assigned points. A centroid
    /// with no points keeps its previous position.
    fn update_centroids(&mut self) {
        let d = self.data.n_features();
        let mut sums = Matrix::zeros((self.k, d));
        let mut counts = vec![0usize; self.k];

        for (i, &cluster) in self.assignments.iter().enumerate() {
            let point = self.data.point(i);
            for j in 0..d {
                sums[[cluster, j]] += point[j];
            }
            counts[cluster] += 1;
        }

        for c in 0..self.k {
            if counts[c] > 0 {
                for j in 0..d {
                    self.centroids[[c, j]] = sums[[c, j]] / counts[c] as f64;
                }
            }
        }
    }

    fn snapshot(&self, changed: bool) -> KMeansStep {
        KMeansStep {
            assignments: self.assignments.clone(),
            centroids: self.centroids.clone(),
            changed,
        }
    }

    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    pub fn centroids(&self) -> &Matrix {
        &self.centroids
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_blob_data() -> Dataset {
        Dataset::new(array![
            [1.0, 1.0],
            [1.5, 2.0],
            [1.2, 1.4],
            [8.0, 8.0],
            [8.5, 8.2],
            [7.8, 8.4]
        ])
        .unwrap()
    }

    fn run_to_convergence(kmeans: &mut KMeans) -> KMeansStep {
        loop {
            let snapshot = kmeans.step();
            if !snapshot.changed {
                return snapshot;
            }
        }
    }

    #[test]
    fn test_invalid_configuration() {
        let data = Dataset::new(array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(KMeans::new(data.clone(), 0, &mut rng).is_err());
        assert!(KMeans::new(data.clone(), 3, &mut rng).is_err());
        assert!(KMeans::with_centroids(data, array![[1.0, 2.0, 3.0]]).is_err());
    }

    #[test]
    fn test_two_blobs_separate() {
        let centroids = array![[0.0, 0.0], [9.0, 9.0]];
        let mut kmeans = KMeans::with_centroids(two_blob_data(), centroids).unwrap();

        let snapshot = run_to_convergence(&mut kmeans);
        assert_eq!(snapshot.assignments[..3], [0, 0, 0]);
        assert_eq!(snapshot.assignments[3..], [1, 1, 1]);
    }

    #[test]
    fn test_assignment_partition_invariant() {
        let data = two_blob_data();
        let n = data.n_samples();
        let mut rng = StdRng::seed_from_u64(3);
        let mut kmeans = KMeans::new(data, 3, &mut rng).unwrap();

        for _ in 0..20 {
            let snapshot = kmeans.step();

            let mut counts = vec![0usize; 3];
            for &a in &snapshot.assignments {
                assert!(a < 3);
                counts[a] += 1;
            }
            assert_eq!(counts.iter().sum::<usize>(), n);

            if !snapshot.changed {
                break;
            }
        }
    }

    #[test]
    fn test_idempotent_after_convergence() {
        let centroids = array![[0.0, 0.0], [9.0, 9.0]];
        let mut kmeans = KMeans::with_centroids(two_blob_data(), centroids).unwrap();

        let converged = run_to_convergence(&mut kmeans);
        let again = kmeans.step();

        assert!(!again.changed);
        assert_eq!(converged.assignments, again.assignments);
        assert_eq!(converged.centroids, again.centroids);
    }

    #[test]
    fn test_k1_converges_to_mean_in_one_step() {
        let data = Dataset::new(array![[0.0, 0.0], [2.0, 0.0], [4.0, 6.0]]).unwrap();
        let mut kmeans = KMeans::with_centroids(data, array![[100.0, -50.0]]).unwrap();

        // All points already carry assignment 0, so the first step reports
        // no change and lands the centroid on the dataset mean.
        let snapshot = kmeans.step();
        assert!(!snapshot.changed);
        assert!(kmeans.converged());
        assert_eq!(snapshot.centroids, array![[2.0, 2.0]]);
    }

    #[test]
    fn test_empty_cluster_keeps_centroid() {
        // Second centroid is too far away to win any point and must not move.
        let data = Dataset::new(array![[0.0, 0.0], [1.0, 0.0]]).unwrap();
        let centroids = array![[0.5, 0.0], [100.0, 100.0]];
        let mut kmeans = KMeans::with_centroids(data, centroids).unwrap();

        let snapshot = kmeans.step();
        assert_eq!(snapshot.centroids.row(1), array![100.0, 100.0]);
    }

    #[test]
    fn test_tie_break_keeps_previous_assignment() {
        let data = Dataset::new(array![[0.0, 0.0], [2.0, 0.0], [1.0, 0.0]]).unwrap();
        let centroids = array![[0.0, 0.0], [2.0, 0.0]];
        let mut kmeans = KMeans::with_centroids(data, centroids).unwrap();

        let snapshot = kmeans.step();
        // Point 2 is equidistant from both centroids; its previous
        // assignment (0) must survive.
        assert_eq!(snapshot.assignments[2], 0);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut kmeans = KMeans::new(two_blob_data(), 2, &mut rng).unwrap();
            run_to_convergence(&mut kmeans)
        };

        let a = run(11);
        let b = run(11);
        assert_eq!(a.assignments, b.assignments);
        assert_eq!(a.centroids, b.centroids);
    }
}
