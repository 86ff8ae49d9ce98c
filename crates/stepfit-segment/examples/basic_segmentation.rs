//! Basic segmentation example

use rand::{rngs::StdRng, Rng, SeedableRng};
use stepfit_segment::{MergeClusterer, SegmentationConfig, Segmenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Adaptive Mean-Merge Segmentation ===\n");

    // Three noisy plateaus: idle, busy, cooldown
    let mut rng = StdRng::seed_from_u64(7);
    let mut series = Vec::with_capacity(150);
    for &(level, len) in &[(5.0, 50), (80.0, 60), (20.0, 40)] {
        for _ in 0..len {
            series.push(level + rng.gen_range(-0.5..0.5));
        }
    }

    let config = SegmentationConfig::default()
        .with_window_size(5)
        .with_cluster_budget(10);
    let clusterer = MergeClusterer::new(config);

    let segmentation = clusterer.segment(&series)?;
    println!("{}", segmentation);

    println!("Cluster means:");
    for (boundary, mean) in segmentation.boundaries().iter().zip(segmentation.means()) {
        println!("  t={:3}  mean={:8.3}", boundary, mean);
    }

    Ok(())
}
