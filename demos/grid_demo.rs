use kdscan::{DBSCAN, KdTree};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three columns of three points each, columns 3 apart, rows 1 apart.
    let points = array![
        [0.0, 0.0],
        [0.0, -1.0],
        [0.0, 1.0],
        [3.0, 0.0],
        [3.0, -1.0],
        [3.0, 1.0],
        [6.0, 0.0],
        [6.0, -1.0],
        [6.0, 1.0]
    ];

    let tree = KdTree::new(&points);
    let neighbors = tree.range_query(array![0.0, 0.0].view(), 2.0)?;
    println!("points within 2.0 of the origin: {:?}", neighbors);

    let mut dbscan = DBSCAN::new(2.0, 3);
    let labels = dbscan.fit_predict(&points)?;

    for (i, label) in labels.iter().enumerate() {
        println!("point {}: {:?}", i, label);
    }
    println!(
        "{} clusters, {} noise points",
        dbscan.n_clusters().unwrap(),
        dbscan.n_noise_points().unwrap()
    );

    Ok(())
}
