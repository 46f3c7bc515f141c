use ndarray::ArrayView2;

use super::state::{ProcessingPhase, StreamingState};
use crate::config::MiningConfig;
use crate::error::{MiningError, Result};
use crate::mining::collector::FrequentItemsets;
use crate::mining::traversal::enumerate_with;
use crate::mining::Item;

/// Convert binary transaction matrix to list of item rows
pub fn matrix_to_rows(transactions: ArrayView2<i32>) -> Vec<Vec<Item>> {
    transactions
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}

/// Add a batch of rows to the index under construction
pub fn index_pass(state: &mut StreamingState, rows: &[Vec<Item>]) -> Result<()> {
    state.add_rows(rows)
}

/// Add a batch given as a binary matrix
pub fn index_matrix_pass(state: &mut StreamingState, transactions: ArrayView2<i32>) -> Result<()> {
    state.expect_phase(ProcessingPhase::Indexing, "index matrix batch")?;
    state.add_rows(&matrix_to_rows(transactions))
}

/// Close the index and compute the rank order
pub fn finalize_ranking(state: &mut StreamingState, config: &MiningConfig) -> Result<()> {
    state.finalize_ranking(config)
}

/// Run the traversal over the finalized rank order
pub fn mine_itemsets(state: &StreamingState) -> Result<FrequentItemsets> {
    state.expect_phase(ProcessingPhase::Ranked, "mine itemsets")?;

    let (Some(rank), Some(config)) = (state.rank.as_ref(), state.config.as_ref()) else {
        return Err(MiningError::InvalidPhase {
            operation: "mine itemsets",
            phase: state.phase,
        });
    };

    enumerate_with(rank, config)
}
