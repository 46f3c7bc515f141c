use tracing::debug;

use super::index::TransactionIndex;
use super::{Item, TransactionId};
use crate::config::Threshold;

/// Surviving items ordered by descending support, ties broken by ascending
/// item id. Positions in this order are what the traversal moves over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankOrder {
    items: Vec<Item>,
    postings: Vec<Vec<TransactionId>>,
}

/// Keep items whose support strictly exceeds `min_support` and rank them.
pub fn rank_items(index: &TransactionIndex, min_support: usize) -> RankOrder {
    rank_items_with(index, min_support, Threshold::Exceeds)
}

pub fn rank_items_with(
    index: &TransactionIndex,
    min_support: usize,
    filter: Threshold,
) -> RankOrder {
    // The index iterates in ascending item id, and the sort is stable, so
    // equal supports keep ascending id order.
    let mut frequent: Vec<(Item, &[TransactionId])> = index
        .iter()
        .filter(|(_, list)| filter.admits(list.len(), min_support))
        .collect();
    frequent.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));

    let (items, postings): (Vec<Item>, Vec<Vec<TransactionId>>) = frequent
        .into_iter()
        .map(|(item, list)| (item, list.to_vec()))
        .unzip();

    debug!(
        min_support,
        ?filter,
        candidates = index.num_items(),
        surviving = items.len(),
        "ranked items"
    );

    RankOrder { items, postings }
}

impl RankOrder {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, pos: usize) -> Item {
        self.items[pos]
    }

    pub fn postings(&self, pos: usize) -> &[TransactionId] {
        &self.postings[pos]
    }

    pub fn support(&self, pos: usize) -> usize {
        self.postings[pos].len()
    }

    pub fn position_of(&self, item: Item) -> Option<usize> {
        self.items.iter().position(|&x| x == item)
    }

    /// Rank position of the lowest-ranked item.
    pub(crate) fn last_position(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}
