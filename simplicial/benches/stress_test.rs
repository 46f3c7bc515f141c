use ndarray::{s, Array2};
use rand::Rng;
use std::time::Instant;

use simplicial::mining::{
    enumerate_with, finalize_ranking, index_matrix_pass, mine_itemsets, rank_items,
    StreamingState, TransactionIndex,
};
use simplicial::MiningConfig;

fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

fn config_for(num_transactions: usize, fraction: f64, parallel: bool) -> MiningConfig {
    let min_count = ((num_transactions as f64 * fraction).ceil() as i64).max(1);
    MiningConfig::new(min_count).unwrap().with_parallel(parallel)
}

fn stress_test_large_tables() {
    println!("\n=== Large Table Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let config = config_for(num_tx, 0.01, false);

        let start = Instant::now();
        let index = TransactionIndex::from_matrix(transactions.view()).unwrap();
        let rank = rank_items(&index, config.min_support);
        println!("  Indexed and ranked in {:?} ({} items ranked)", start.elapsed(), rank.len());

        let start = Instant::now();
        let results = enumerate_with(&rank, &config).unwrap();
        println!("  Traversal in {:?}", start.elapsed());
        println!("  Found {} itemsets", results.len());
    }
}

fn stress_test_streaming_vs_batch() {
    println!("\n=== Streaming vs Batch Comparison ===");

    let (num_tx, num_items, avg_size) = (50_000, 100, 20);
    let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
    let config = config_for(num_tx, 0.01, false);

    let start = Instant::now();
    let index = TransactionIndex::from_matrix(transactions.view()).unwrap();
    let rank = rank_items(&index, config.min_support);
    let batch = enumerate_with(&rank, &config).unwrap();
    let batch_time = start.elapsed();
    println!("  Batch: {:?}, {} itemsets", batch_time, batch.len());

    let start = Instant::now();
    let mut state = StreamingState::new();
    let chunk_size = 5000;
    for chunk_start in (0..num_tx).step_by(chunk_size) {
        let chunk_end = (chunk_start + chunk_size).min(num_tx);
        let chunk = transactions.slice(s![chunk_start..chunk_end, ..]);
        index_matrix_pass(&mut state, chunk).unwrap();
    }
    finalize_ranking(&mut state, &config).unwrap();
    let streamed = mine_itemsets(&state).unwrap();
    let streamed_time = start.elapsed();
    println!("  Streaming: {:?}, {} itemsets", streamed_time, streamed.len());

    assert_eq!(batch, streamed, "streaming and batch results diverged");
    let overhead = (streamed_time.as_secs_f64() / batch_time.as_secs_f64() - 1.0) * 100.0;
    println!("  Overhead: {:.1}%", overhead);
}

fn stress_test_dense_data() {
    println!("\n=== Dense Data Test (worst case) ===");

    let configs = vec![
        ("Dense 80%", 10_000, 50, 40, 0.8),
        ("Dense 90%", 10_000, 50, 45, 0.9),
        ("Dense 95%", 10_000, 50, 47, 0.95),
    ];

    for (name, num_tx, num_items, avg_size, density) in configs {
        println!("\nTesting: {}", name);
        let transactions = generate_transactions(num_tx, num_items, avg_size, density);
        let index = TransactionIndex::from_matrix(transactions.view()).unwrap();

        for parallel in [false, true] {
            let config = config_for(num_tx, 0.1, parallel);
            let rank = rank_items(&index, config.min_support);

            let start = Instant::now();
            let results = enumerate_with(&rank, &config).unwrap();
            println!(
                "  {}: {:?}, {} itemsets",
                if parallel { "parallel" } else { "sequential" },
                start.elapsed(),
                results.len()
            );
        }
    }
}

fn main() {
    println!("=== Cone Traversal Stress Testing Suite ===");

    stress_test_large_tables();
    stress_test_streaming_vs_batch();
    stress_test_dense_data();

    println!("\n=== Stress Testing Complete ===");
}
