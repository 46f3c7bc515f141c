use std::collections::BTreeMap;

use tracing::debug;

use crate::config::MiningConfig;
use crate::error::{MiningError, Result};
use crate::mining::index::{append_posting, TransactionIndex};
use crate::mining::rank::{rank_items_with, RankOrder};
use crate::mining::{Item, TransactionId};

/// State for building the index batch by batch before mining.
#[derive(Debug)]
pub struct StreamingState {
    /// Posting lists accumulated so far
    pub postings: BTreeMap<Item, Vec<TransactionId>>,
    /// Rows seen so far; also the id of the next row
    pub num_transactions: usize,
    /// Configuration fixed at ranking time
    pub config: Option<MiningConfig>,
    /// Rank order after finalization
    pub rank: Option<RankOrder>,
    /// Processing phase
    pub phase: ProcessingPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPhase {
    Indexing,
    Ranked,
}

impl Default for StreamingState {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingState {
    pub fn new() -> Self {
        Self {
            postings: BTreeMap::new(),
            num_transactions: 0,
            config: None,
            rank: None,
            phase: ProcessingPhase::Indexing,
        }
    }

    /// Append a batch of rows, numbering them after the rows already seen.
    pub fn add_rows(&mut self, rows: &[Vec<Item>]) -> Result<()> {
        self.expect_phase(ProcessingPhase::Indexing, "add rows")?;

        for row in rows {
            let tx = self.num_transactions;
            for &item in row {
                append_posting(self.postings.entry(item).or_default(), tx);
            }
            self.num_transactions += 1;
        }
        Ok(())
    }

    /// Freeze the index and rank its items.
    pub fn finalize_ranking(&mut self, config: &MiningConfig) -> Result<()> {
        self.expect_phase(ProcessingPhase::Indexing, "finalize ranking")?;
        config.validate()?;
        if self.num_transactions == 0 {
            return Err(MiningError::EmptyTable);
        }

        let index = TransactionIndex::from_parts(
            std::mem::take(&mut self.postings),
            self.num_transactions,
        );
        let rank = rank_items_with(&index, config.min_support, config.rank_filter);
        debug!(
            transactions = self.num_transactions,
            ranked = rank.len(),
            "streaming index finalized"
        );

        self.rank = Some(rank);
        self.config = Some(config.clone());
        self.phase = ProcessingPhase::Ranked;
        Ok(())
    }

    pub fn expect_phase(&self, phase: ProcessingPhase, operation: &'static str) -> Result<()> {
        if self.phase != phase {
            return Err(MiningError::InvalidPhase {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }
}
