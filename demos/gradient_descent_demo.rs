use ndarray::Array2;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepfit::{Dataset, LinearGradientDescent, LogisticGradientDescent, Vector};

/// Samples (x, y) pairs from y = 1.477x + 0.089 plus N(0, 0.01) noise.
fn sampled_line(n: usize, rng: &mut StdRng) -> Dataset {
    let x_dist = Uniform::new(-10.0, 10.0);
    let noise = Normal::new(0.0, 0.01).unwrap();

    let mut points = Array2::zeros((n, 2));
    for i in 0..n {
        let x: f64 = rng.sample(x_dist);
        points[[i, 0]] = x;
        points[[i, 1]] = 1.477 * x + 0.089 + rng.sample(noise);
    }
    Dataset::new(points).unwrap()
}

/// Samples 2-D points labeled by which side of y = x + 1 they fall on,
/// with uniform jitter so the classes overlap slightly.
fn sampled_classes(n: usize, rng: &mut StdRng) -> (Dataset, Vector) {
    let coord = Uniform::new(-5.0, 5.0);
    let jitter = Uniform::new(-0.5, 0.5);

    let mut points = Array2::zeros((n, 2));
    let mut labels = Vector::zeros(n);
    for i in 0..n {
        let x: f64 = rng.sample(coord);
        let y: f64 = rng.sample(coord);
        points[[i, 0]] = x;
        points[[i, 1]] = y;
        labels[i] = if y + rng.sample::<f64, _>(jitter) > x + 1.0 {
            1.0
        } else {
            0.0
        };
    }
    (Dataset::new(points).unwrap(), labels)
}

fn main() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(42);

    println!("=== Linear regression via batch gradient descent ===");
    let data = sampled_line(5000, &mut rng);
    let mut linear = LinearGradientDescent::new(data, 0.01)?;

    for iteration in 0..1000 {
        let params = linear.step();
        if iteration % 50 == 0 {
            println!(
                "Iteration:{}, loss:{:.6}, w:{:.6}, b:{:.6}",
                iteration,
                linear.loss(),
                params.weight,
                params.bias
            );
        }
    }
    let params = linear.parameters();
    println!(
        "Final loss:{:.6}, w:{:.6}, b:{:.6} (true w=1.477, b=0.089)\n",
        linear.loss(),
        params.weight,
        params.bias
    );

    println!("=== Logistic regression via batch gradient descent ===");
    let (data, labels) = sampled_classes(500, &mut rng);
    let mut logistic = LogisticGradientDescent::new(data, labels, 0.1)?;

    for iteration in 0..2000 {
        logistic.step();
        if iteration % 100 == 0 {
            println!("Iteration:{}, loss:{:.6}", iteration, logistic.loss());
        }
    }
    let params = logistic.parameters();
    println!(
        "Final loss:{:.6}, a:{:.4}, b:{:.4}, c:{:.4}",
        logistic.loss(),
        params.a,
        params.b,
        params.c
    );
    println!(
        "p(0, 5) = {:.4} (above the boundary), p(5, 0) = {:.4} (below)",
        logistic.predict_proba(0.0, 5.0),
        logistic.predict_proba(5.0, 0.0)
    );

    Ok(())
}
