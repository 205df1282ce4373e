use kdscan::{DBSCAN, Label, Matrix, distance};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DBSCAN parameter sweep ===\n");

    // Three natural clusters plus a few stray points
    let x = array![
        // Cluster around (2, 2)
        [1.5, 1.8], [2.0, 2.2], [2.3, 1.9], [1.8, 2.5], [2.1, 1.7],
        // Cluster around (8, 8)
        [7.8, 8.2], [8.1, 7.9], [8.3, 8.1], [7.9, 8.4], [8.2, 7.7],
        // Cluster around (2, 8)
        [1.9, 7.8], [2.2, 8.1], [1.7, 8.3], [2.4, 7.9], [2.0, 8.2],
        // Noise
        [5.0, 5.0], [0.0, 0.0], [10.0, 0.0]
    ];

    println!("Dataset: {} samples, {} features\n", x.nrows(), x.ncols());

    let configs = [
        (0.5, 2, "tight"),
        (1.0, 2, "medium"),
        (2.0, 3, "loose"),
        (1.0, 4, "higher min_samples"),
    ];

    for &(eps, min_samples, description) in &configs {
        match run_dbscan(&x, eps, min_samples) {
            Ok(summary) => println!(
                "DBSCAN(eps={}, min_samples={}) [{}]: {}",
                eps, min_samples, description, summary
            ),
            Err(e) => println!(
                "DBSCAN(eps={}, min_samples={}) failed: {}",
                eps, min_samples, e
            ),
        }
    }

    println!("\n=== Custom metric ===");
    let mut dbscan = DBSCAN::new(1.5, 2);
    let labels = dbscan.fit_predict_with(&x, distance::manhattan)?;
    let noise: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l == Label::Noise)
        .map(|(i, _)| i)
        .collect();
    println!(
        "Manhattan, eps=1.5: {} clusters, noise at {:?}",
        dbscan.n_clusters().unwrap(),
        noise
    );

    Ok(())
}

fn run_dbscan(x: &Matrix, eps: f64, min_samples: usize) -> Result<String, kdscan::Error> {
    let mut dbscan = DBSCAN::new(eps, min_samples);
    dbscan.fit(x)?;
    Ok(format!(
        "{} clusters, {} noise points, {} core samples",
        dbscan.n_clusters().unwrap(),
        dbscan.n_noise_points().unwrap(),
        dbscan.core_sample_indices.as_ref().unwrap().len()
    ))
}
