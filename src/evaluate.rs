use std::collections::HashMap;

use ndarray::Array1;
use rayon::prelude::*;

// Map each cluster to the majority true label among its members, then assign
// that label to every member. Ties break toward the smaller label value.
// Written over arbitrary cluster counts even though the benchmark uses k=2.
pub fn majority_vote_labels(clusters: &Array1<usize>, truth: &[i32]) -> Vec<i32> {
    assert_eq!(
        clusters.len(),
        truth.len(),
        "one true label per cluster assignment"
    );

    let mut counts: HashMap<usize, HashMap<i32, usize>> = HashMap::new();
    for (&cluster, &label) in clusters.iter().zip(truth.iter()) {
        *counts.entry(cluster).or_default().entry(label).or_insert(0) += 1;
    }

    let majority: HashMap<usize, i32> = counts
        .into_iter()
        .map(|(cluster, label_counts)| {
            let winner = label_counts
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
                .map(|(label, _)| label)
                .unwrap_or(0);
            (cluster, winner)
        })
        .collect();

    clusters.iter().map(|cluster| majority[cluster]).collect()
}

// Fraction of rows whose mapped label matches the true label.
pub fn accuracy(mapped: &[i32], truth: &[i32]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let correct = mapped
        .par_iter()
        .zip(truth.par_iter())
        .filter(|(a, b)| a == b)
        .count();
    correct as f64 / truth.len() as f64
}
