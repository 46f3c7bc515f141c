//! Frequent itemset mining by cone traversal.
//!
//! Each transaction is viewed as a closed simplex over its items; the union
//! of those simplexes is a simplicial complex, and frequent itemsets are the
//! faces shared by at least `min_support` transactions. The miner builds an
//! inverted index from items to transactions, ranks the items by support,
//! and walks the ranked order with a cone (the candidate itemset), counting
//! support by intersecting posting lists and deciding at every step whether
//! to extend the cone, restart it at a sibling, or move to the next base.
//!
//! # Example
//!
//! ```
//! use simplicial::mining::{build_index, enumerate_frequent_itemsets, rank_items};
//!
//! let rows = vec![vec![1, 2, 3], vec![1, 2], vec![2, 3], vec![1, 3]];
//! let index = build_index(&rows).unwrap();
//! let rank = rank_items(&index, 1);
//! let results = enumerate_frequent_itemsets(&index, &rank, 1).unwrap();
//!
//! let first = results.get(0).unwrap();
//! assert_eq!(first.itemset, &[1]);
//! assert_eq!(first.support, 3);
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod mining;

#[cfg(feature = "python")]
mod python;

pub use config::{MiningConfig, Threshold};
pub use error::{MiningError, Result};
pub use mining::{
    build_index, enumerate_frequent_itemsets, mine, rank_items, FrequentItemsets, RankOrder,
    TransactionIndex,
};
