use ndarray::Array2;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepfit::{Dataset, KMeans, MeanShift};

/// Scatters Gaussian blobs around uniformly placed centers, the shape of
/// data both clusterers are built for.
fn clustered_points(total: usize, clusters: usize, rng: &mut StdRng) -> Dataset {
    let center_dist = Uniform::new(20.0, 80.0);
    let noise = Normal::new(0.0, 4.0).unwrap();

    let mut points = Array2::zeros((total, 2));
    let per_cluster = total / clusters;
    let mut row = 0;

    for _ in 0..clusters {
        let cx: f64 = rng.sample(center_dist);
        let cy: f64 = rng.sample(center_dist);
        for _ in 0..per_cluster {
            points[[row, 0]] = cx + rng.sample(noise);
            points[[row, 1]] = cy + rng.sample(noise);
            row += 1;
        }
    }
    // Pad the remainder with background noise.
    let background = Uniform::new(10.0, 90.0);
    while row < total {
        points[[row, 0]] = rng.sample(background);
        points[[row, 1]] = rng.sample(background);
        row += 1;
    }

    Dataset::new(points).unwrap()
}

fn main() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(7);
    let data = clustered_points(300, 5, &mut rng);

    println!("=== K-means (k=5) ===");
    let mut kmeans = KMeans::new(data.clone(), 5, &mut rng)?;
    loop {
        let snapshot = kmeans.step();
        let mut sizes = vec![0usize; 5];
        for &a in &snapshot.assignments {
            sizes[a] += 1;
        }
        println!(
            "Iteration {}: cluster sizes {:?}{}",
            kmeans.iterations(),
            sizes,
            if snapshot.changed { "" } else { " - converged" }
        );
        if !snapshot.changed {
            break;
        }
    }

    println!("\n=== Mean-shift (bandwidth=8.0) ===");
    let mut mean_shift = MeanShift::new(data, 8.0)?;
    while !mean_shift.step() {
        println!("Iteration {}: shifting modes...", mean_shift.iterations());
    }

    let labels = mean_shift.labels();
    let n_clusters = labels.iter().max().map_or(0, |&m| m + 1);
    println!(
        "Converged after {} iterations into {} clusters",
        mean_shift.iterations(),
        n_clusters
    );
    for cluster in 0..n_clusters {
        let size = labels.iter().filter(|&&l| l == cluster).count();
        println!("  cluster {}: {} points", cluster, size);
    }

    Ok(())
}
