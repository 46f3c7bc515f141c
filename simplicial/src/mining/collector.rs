use std::fmt;

use super::Item;

/// Append-only record of accepted cones, in emission order.
///
/// Itemsets are stored back to back in one flat buffer with an
/// `(offset, len)` per entry. Items keep cone order; nothing is sorted or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentItemsets {
    items: Vec<Item>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// One accepted itemset and its support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub itemset: &'a [Item],
    pub support: usize,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, itemset: &[Item], support: usize) {
        let start = self.items.len();
        self.items.extend_from_slice(itemset);
        self.offsets.push((start, itemset.len()));
        self.supports.push(support);
    }

    pub fn get(&self, idx: usize) -> Option<Entry<'_>> {
        let &(start, len) = self.offsets.get(idx)?;
        Some(Entry {
            itemset: &self.items[start..start + len],
            support: self.supports[idx],
        })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        (0..self.len()).filter_map(move |idx| self.get(idx))
    }

    /// Append every entry of `other`, preserving its order.
    pub fn extend(&mut self, other: FrequentItemsets) {
        let shift = self.items.len();
        self.items.extend_from_slice(&other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (start + shift, len)));
        self.supports.extend_from_slice(&other.supports);
    }

    pub fn to_vec(&self) -> Vec<(Vec<Item>, usize)> {
        self.iter()
            .map(|entry| (entry.itemset.to_vec(), entry.support))
            .collect()
    }
}

impl fmt::Display for Entry<'_> {
    /// `[i1 i2 ... ik] support`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.itemset.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "] {}", self.support)
    }
}
