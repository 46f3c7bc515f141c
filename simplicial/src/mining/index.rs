use std::collections::BTreeMap;

use ndarray::ArrayView2;
use tracing::debug;

use super::{Item, TransactionId};
use crate::error::{MiningError, Result};

/// Inverted index from item to the ascending ids of the rows containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionIndex {
    postings: BTreeMap<Item, Vec<TransactionId>>,
    num_transactions: usize,
}

/// Build the index from raw rows; row `t` has transaction id `t`.
pub fn build_index(rows: &[Vec<Item>]) -> Result<TransactionIndex> {
    if rows.is_empty() {
        return Err(MiningError::EmptyTable);
    }

    let mut postings: BTreeMap<Item, Vec<TransactionId>> = BTreeMap::new();
    for (tx, row) in rows.iter().enumerate() {
        for &item in row {
            append_posting(postings.entry(item).or_default(), tx);
        }
    }

    let index = TransactionIndex {
        postings,
        num_transactions: rows.len(),
    };
    debug!(
        transactions = index.num_transactions,
        items = index.num_items(),
        "built transaction index"
    );
    Ok(index)
}

// Rows are visited in ascending order, so a repeated item within a row can
// only collide with the tail.
#[inline]
pub(crate) fn append_posting(list: &mut Vec<TransactionId>, tx: TransactionId) {
    if list.last() != Some(&tx) {
        list.push(tx);
    }
}

impl TransactionIndex {
    /// Wrap externally produced posting lists, checking that each one is
    /// strictly ascending and stays inside `0..num_transactions`.
    pub fn from_postings(
        postings: BTreeMap<Item, Vec<TransactionId>>,
        num_transactions: usize,
    ) -> Result<Self> {
        if num_transactions == 0 {
            return Err(MiningError::EmptyTable);
        }

        for (&item, list) in &postings {
            let ascending = list.windows(2).all(|w| w[0] < w[1]);
            let in_range = list.last().map_or(true, |&tx| tx < num_transactions);
            if !ascending || !in_range {
                return Err(MiningError::CorruptPostingList { item });
            }
        }

        Ok(Self {
            postings,
            num_transactions,
        })
    }

    /// Binary transaction matrix: column `j` is item `j`, any non-zero cell
    /// marks membership.
    pub fn from_matrix(transactions: ArrayView2<i32>) -> Result<Self> {
        let num_transactions = transactions.shape()[0];
        if num_transactions == 0 {
            return Err(MiningError::EmptyTable);
        }

        let mut postings: BTreeMap<Item, Vec<TransactionId>> = BTreeMap::new();
        for (tx, row) in transactions.outer_iter().enumerate() {
            for (item, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    postings.entry(item).or_default().push(tx);
                }
            }
        }

        Ok(Self {
            postings,
            num_transactions,
        })
    }

    pub(crate) fn from_parts(
        postings: BTreeMap<Item, Vec<TransactionId>>,
        num_transactions: usize,
    ) -> Self {
        Self {
            postings,
            num_transactions,
        }
    }

    pub fn postings(&self, item: Item) -> Option<&[TransactionId]> {
        self.postings.get(&item).map(Vec::as_slice)
    }

    pub fn support(&self, item: Item) -> usize {
        self.postings.get(&item).map_or(0, Vec::len)
    }

    /// Items in ascending id order.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.postings.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, &[TransactionId])> + '_ {
        self.postings.iter().map(|(&item, list)| (item, list.as_slice()))
    }

    pub fn num_items(&self) -> usize {
        self.postings.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }
}
