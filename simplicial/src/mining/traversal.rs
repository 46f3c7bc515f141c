//! Cone traversal over the rank order.
//!
//! The search never recurses. Its position in the itemset lattice is the
//! current cone plus two cursors: `cursor`, the rank position of the cone's
//! last item, and `skip`, the offset from the base of the next sibling to
//! try. Every step counts the cone's support, reports it if it clears the
//! acceptance threshold, and applies exactly one [`Transition`].
//!
//! The base position only ever moves forward, one rank position per
//! [`Transition::ReseedBase`], and the run ends when the base reaches the
//! lowest-ranked item.

use rayon::prelude::*;
use tracing::{debug, trace};

use super::collector::FrequentItemsets;
use super::cone::Cone;
use super::index::TransactionIndex;
use super::rank::RankOrder;
use crate::config::{MiningConfig, Threshold};
use crate::error::{MiningError, Result};

/// Offset from the base of the first sibling tried after the initial
/// extension, which already occupies `base + 1`.
const FIRST_SIBLING_SKIP: usize = 2;

/// Structural move applied after a step's support has been counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The base is the last ranked item; the run is over.
    Terminate,
    /// Append the item at `position` to the cone.
    Extend { position: usize },
    /// Restart as `[base, position]`.
    ReseedSibling { position: usize },
    /// Restart as `[position]` with a fresh skip counter.
    ReseedBase { position: usize },
}

/// Outcome of one traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub support: usize,
    pub accepted: bool,
    pub transition: Transition,
}

#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    rank: &'a RankOrder,
    min_support: usize,
    acceptance: Threshold,
    cone: Option<Cone<'a>>,
    cursor: usize,
    skip: usize,
    done: bool,
    steps: usize,
    results: FrequentItemsets,
}

impl<'a> Traversal<'a> {
    /// Start at the highest-ranked item. An empty rank order yields a
    /// traversal that is already done.
    pub fn new(rank: &'a RankOrder, config: &MiningConfig) -> Self {
        if rank.is_empty() {
            return Self {
                rank,
                min_support: config.min_support,
                acceptance: config.acceptance,
                cone: None,
                cursor: 0,
                skip: FIRST_SIBLING_SKIP,
                done: true,
                steps: 0,
                results: FrequentItemsets::new(),
            };
        }
        Self::seeded_at(rank, config, 0)
    }

    /// Start at rank position `base`, in the state a base reseed leaves
    /// behind.
    pub fn seeded_at(rank: &'a RankOrder, config: &MiningConfig, base: usize) -> Self {
        Self {
            rank,
            min_support: config.min_support,
            acceptance: config.acceptance,
            cone: Some(Cone::seed(rank, base)),
            cursor: base,
            skip: FIRST_SIBLING_SKIP,
            done: false,
            steps: 0,
            results: FrequentItemsets::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn cone(&self) -> Option<&Cone<'a>> {
        self.cone.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn results(&self) -> &FrequentItemsets {
        &self.results
    }

    /// Pick the transition for the current cone given its support.
    ///
    /// Extension and sibling reseeding always compare with `>` and `<=`
    /// against the minimum, whatever the acceptance threshold is.
    pub fn decide(&self, support: usize) -> Transition {
        let (Some(cone), Some(last)) = (self.cone.as_ref(), self.rank.last_position()) else {
            return Transition::Terminate;
        };
        let base = cone.base();
        let frequent = Threshold::Exceeds.admits(support, self.min_support);

        if base == last {
            return Transition::Terminate;
        }

        if frequent && cone.last() != last {
            return Transition::Extend {
                position: self.cursor + 1,
            };
        }

        if !frequent && cone.len() > 1 && cone.second() != Some(last) {
            let position = base + self.skip;
            if position <= last {
                return Transition::ReseedSibling { position };
            }
        }

        Transition::ReseedBase { position: base + 1 }
    }

    fn apply(&mut self, transition: Transition) {
        let Some(cone) = self.cone.as_mut() else {
            self.done = true;
            return;
        };

        match transition {
            Transition::Terminate => self.done = true,
            Transition::Extend { position } => {
                cone.push(position);
                self.cursor = position;
            }
            Transition::ReseedSibling { position } => {
                let base = cone.base();
                cone.reset_to(&[base, position]);
                self.cursor = position;
                self.skip += 1;
            }
            Transition::ReseedBase { position } => {
                cone.reset_to(&[position]);
                self.cursor = position;
                self.skip = FIRST_SIBLING_SKIP;
            }
        }
    }

    /// Run one step. Returns `None` once the traversal is done.
    pub fn step(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        let cone = self.cone.as_ref()?;
        debug_assert_eq!(cone.last(), self.cursor);

        let support = cone.support();
        let accepted = self.acceptance.admits(support, self.min_support);
        if accepted {
            self.results.push(&cone.itemset(), support);
        }

        let transition = self.decide(support);
        trace!(
            cone = ?cone.positions(),
            support,
            accepted,
            ?transition,
            "traversal step"
        );

        self.apply(transition);
        self.steps += 1;
        debug_assert!(
            self.steps <= step_budget(self.rank.len()),
            "traversal exceeded its step budget"
        );

        Some(Step {
            support,
            accepted,
            transition,
        })
    }

    /// Drive the traversal to completion.
    pub fn run(mut self) -> FrequentItemsets {
        while self.step().is_some() {}
        debug!(
            steps = self.steps,
            accepted = self.results.len(),
            "traversal finished"
        );
        self.results
    }

    /// Run only the sub-search anchored at the current base, stopping at
    /// the first base reseed or termination.
    pub fn run_base(mut self) -> FrequentItemsets {
        while let Some(step) = self.step() {
            if matches!(
                step.transition,
                Transition::ReseedBase { .. } | Transition::Terminate
            ) {
                break;
            }
        }
        self.results
    }
}

/// Upper bound on the steps of a run over `n` ranked items: `n` bases, each
/// with at most `n` sibling reseeds, each followed by at most `n` extensions.
pub fn step_budget(n: usize) -> usize {
    let n = n.saturating_add(1);
    n.saturating_mul(n).saturating_mul(n)
}

/// Enumerate frequent itemsets with the default comparisons.
pub fn enumerate_frequent_itemsets(
    index: &TransactionIndex,
    rank: &RankOrder,
    min_support: usize,
) -> Result<FrequentItemsets> {
    let config = MiningConfig {
        min_support,
        ..MiningConfig::default()
    };
    debug!(
        transactions = index.num_transactions(),
        ranked = rank.len(),
        min_support,
        "enumerating frequent itemsets"
    );
    enumerate_with(rank, &config)
}

pub fn enumerate_with(rank: &RankOrder, config: &MiningConfig) -> Result<FrequentItemsets> {
    if config.min_support == 0 {
        return Err(MiningError::InvalidMinSupport(0));
    }

    if config.parallel {
        Ok(enumerate_parallel(rank, config))
    } else {
        Ok(Traversal::new(rank, config).run())
    }
}

/// Partition the run by base item. Each base's sub-search starts from the
/// state a base reseed produces and depends on nothing else, so joining
/// the partitions in base order reproduces the sequential output exactly.
pub fn enumerate_parallel(rank: &RankOrder, config: &MiningConfig) -> FrequentItemsets {
    let partitions: Vec<FrequentItemsets> = (0..rank.len())
        .into_par_iter()
        .map(|base| Traversal::seeded_at(rank, config, base).run_base())
        .collect();

    let mut merged = FrequentItemsets::new();
    for partition in partitions {
        merged.extend(partition);
    }
    debug!(
        bases = rank.len(),
        accepted = merged.len(),
        "parallel traversal finished"
    );
    merged
}
