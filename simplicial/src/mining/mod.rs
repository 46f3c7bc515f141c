pub mod collector;
pub mod cone;
pub mod index;
pub mod rank;
pub mod reference;
pub mod streaming;
pub mod support;
pub mod traversal;


use crate::config::MiningConfig;
use crate::error::Result;

pub use collector::{Entry, FrequentItemsets};
pub use cone::Cone;
pub use index::{build_index, TransactionIndex};
pub use rank::{rank_items, rank_items_with, RankOrder};
pub use reference::enumerate_exhaustive;
pub use streaming::{StreamingState, ProcessingPhase, index_pass, index_matrix_pass, finalize_ranking, mine_itemsets};
pub use support::{count_support, intersect_sorted};
pub use traversal::{enumerate_frequent_itemsets, enumerate_parallel, enumerate_with, Step, Transition, Traversal};

pub type Item = usize;
pub type TransactionId = usize;

/// Index, rank and traverse `rows` under `config`.
pub fn mine(rows: &[Vec<Item>], config: &MiningConfig) -> Result<FrequentItemsets> {
    config.validate()?;
    let index = build_index(rows)?;
    let rank = rank_items_with(&index, config.min_support, config.rank_filter);
    enumerate_with(&rank, config)
}
