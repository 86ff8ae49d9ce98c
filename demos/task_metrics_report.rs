//! Analyze resource metrics for a batch of task executions
//!
//! Each (task, metric) pair is an independent unit of work; failed units
//! are logged and skipped so one malformed series never stops the batch.

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use stepfit::{analyze, counter_deltas, SegmentationConfig};
use tracing::warn;

/// One task execution's sampled metrics
struct TaskMetrics {
    name: &'static str,
    cpu_pct: Vec<f64>,
    mem_mb: Vec<f64>,
    /// Cumulative counter, converted to per-interval deltas before analysis
    io_bytes_total: Vec<f64>,
}

fn synthetic_tasks() -> Vec<TaskMetrics> {
    let mut rng = StdRng::seed_from_u64(1234);
    let cpu_noise = Normal::new(0.0, 1.5).unwrap();
    let mem_noise = Normal::new(0.0, 10.0).unwrap();

    let mut tasks = Vec::new();
    for (i, &name) in ["task_0001_align", "task_0002_sort", "task_0003_index"]
        .iter()
        .enumerate()
    {
        let n = 120 + i * 40;
        let mut cpu = Vec::with_capacity(n);
        let mut mem = Vec::with_capacity(n);
        let mut io = Vec::with_capacity(n);
        let mut io_total = 0.0;
        for t in 0..n {
            let phase = (t * 3) / n;
            let cpu_level = [15.0, 95.0, 40.0][phase];
            let mem_level = [200.0, 1800.0, 900.0][phase];
            cpu.push(cpu_level + cpu_noise.sample(&mut rng));
            mem.push(mem_level + mem_noise.sample(&mut rng));
            io_total += rng.gen_range(0.0..4096.0);
            io.push(io_total);
        }
        tasks.push(TaskMetrics {
            name,
            cpu_pct: cpu,
            mem_mb: mem,
            io_bytes_total: io,
        });
    }

    // A degenerate unit: constant memory, baseline error is zero
    tasks.push(TaskMetrics {
        name: "task_0004_idle",
        cpu_pct: vec![0.0; 30],
        mem_mb: vec![64.0; 30],
        io_bytes_total: vec![0.0; 30],
    });

    tasks
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = SegmentationConfig::default();
    let tasks = synthetic_tasks();

    for task in &tasks {
        let io_deltas = counter_deltas(&task.io_bytes_total);
        let units: [(&str, &[f64]); 3] = [
            ("cpu", &task.cpu_pct),
            ("mem", &task.mem_mb),
            ("io", &io_deltas),
        ];

        println!("Task: {}", task.name);
        for (metric, series) in units {
            match analyze(series, &config) {
                Ok(analysis) => {
                    println!(
                        "  {:4} k={:<3} eps={:.4}",
                        metric,
                        analysis.segmentation.count(),
                        analysis.segmentation.final_epsilon()
                    );
                    for line in analysis.errors.to_string().lines() {
                        println!("    {}", line);
                    }
                }
                Err(e) => {
                    warn!(task = task.name, metric, error = %e, "skipping unit");
                }
            }
        }
    }

    Ok(())
}
