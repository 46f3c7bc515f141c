use super::rank::RankOrder;
use super::support::count_support;
use super::{Item, TransactionId};

/// The itemset under test: rank positions plus the posting list of each
/// member, kept side by side and reset in place between candidates.
#[derive(Debug, Clone)]
pub struct Cone<'a> {
    rank: &'a RankOrder,
    positions: Vec<usize>,
    stack: Vec<&'a [TransactionId]>,
}

impl<'a> Cone<'a> {
    /// Single-item cone at rank position `base`.
    pub fn seed(rank: &'a RankOrder, base: usize) -> Self {
        let mut cone = Self {
            rank,
            positions: Vec::with_capacity(rank.len()),
            stack: Vec::with_capacity(rank.len()),
        };
        cone.reset_to(&[base]);
        cone
    }

    pub fn pair(rank: &'a RankOrder, base: usize, second: usize) -> Self {
        let mut cone = Self::seed(rank, base);
        cone.push(second);
        cone
    }

    pub fn push(&mut self, pos: usize) {
        self.positions.push(pos);
        self.stack.push(self.rank.postings(pos));
    }

    /// Replace the contents with `positions`, reusing the allocations.
    pub fn reset_to(&mut self, positions: &[usize]) {
        self.positions.clear();
        self.stack.clear();
        for &pos in positions {
            self.push(pos);
        }
    }

    pub fn base(&self) -> usize {
        self.positions[0]
    }

    pub fn second(&self) -> Option<usize> {
        self.positions.get(1).copied()
    }

    pub fn last(&self) -> usize {
        self.positions[self.positions.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn support(&self) -> usize {
        count_support(&self.stack)
    }

    /// Member item ids in cone order.
    pub fn itemset(&self) -> Vec<Item> {
        self.positions.iter().map(|&pos| self.rank.item(pos)).collect()
    }
}
