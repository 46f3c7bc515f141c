//! Property tests for the index, ranker and cone traversal.

use proptest::prelude::*;

use simplicial::mining::traversal::step_budget;
use simplicial::mining::{
    build_index, count_support, enumerate_exhaustive, enumerate_with, rank_items, Item,
    TransactionIndex, Traversal,
};
use simplicial::MiningConfig;

fn table() -> impl Strategy<Value = Vec<Vec<Item>>> {
    prop::collection::vec(prop::collection::vec(0usize..8, 0..6), 1..14)
}

fn support_of(index: &TransactionIndex, itemset: &[Item]) -> usize {
    let stack: Vec<&[usize]> = itemset
        .iter()
        .map(|&item| index.postings(item).unwrap_or(&[]))
        .collect();
    count_support(&stack)
}

proptest! {
    #[test]
    fn index_matches_rows(rows in table()) {
        let index = build_index(&rows).unwrap();
        prop_assert_eq!(index.num_transactions(), rows.len());

        for item in 0..8 {
            let postings = index.postings(item).unwrap_or(&[]);
            prop_assert!(postings.windows(2).all(|w| w[0] < w[1]));
            for (tx, row) in rows.iter().enumerate() {
                prop_assert_eq!(postings.contains(&tx), row.contains(&item));
            }
        }
    }

    #[test]
    fn rank_is_sorted_and_filtered(rows in table(), min_support in 1usize..4) {
        let index = build_index(&rows).unwrap();
        let rank = rank_items(&index, min_support);

        prop_assert_eq!(&rank, &rank_items(&index, min_support));
        for pos in 0..rank.len() {
            prop_assert!(rank.support(pos) > min_support);
        }
        for pos in 1..rank.len() {
            let (prev, cur) = (pos - 1, pos);
            prop_assert!(
                rank.support(prev) > rank.support(cur)
                    || (rank.support(prev) == rank.support(cur) && rank.item(prev) < rank.item(cur))
            );
        }
        let survivors = index.iter().filter(|(_, list)| list.len() > min_support).count();
        prop_assert_eq!(rank.len(), survivors);
    }

    #[test]
    fn traversal_terminates_within_budget(rows in table(), min_support in 1i64..4) {
        let index = build_index(&rows).unwrap();
        let config = MiningConfig::new(min_support).unwrap();
        let rank = rank_items(&index, config.min_support);

        let mut traversal = Traversal::new(&rank, &config);
        while traversal.step().is_some() {
            prop_assert!(traversal.steps() <= step_budget(rank.len()));
        }
        prop_assert!(traversal.is_done());
    }

    #[test]
    fn accepted_supports_are_exact(rows in table(), min_support in 1i64..4) {
        let index = build_index(&rows).unwrap();
        let config = MiningConfig::new(min_support).unwrap();
        let rank = rank_items(&index, config.min_support);
        let results = enumerate_with(&rank, &config).unwrap();

        for entry in results.iter() {
            prop_assert!(entry.support >= config.min_support);
            prop_assert_eq!(entry.support, support_of(&index, entry.itemset));
        }
    }

    #[test]
    fn support_is_antimonotone_along_cones(rows in table(), min_support in 1i64..4) {
        let index = build_index(&rows).unwrap();
        let config = MiningConfig::new(min_support).unwrap();
        let rank = rank_items(&index, config.min_support);
        let results = enumerate_with(&rank, &config).unwrap();

        for entry in results.iter() {
            let mut previous = usize::MAX;
            for len in 1..=entry.itemset.len() {
                let support = support_of(&index, &entry.itemset[..len]);
                prop_assert!(support <= previous);
                previous = support;
            }
        }
    }

    #[test]
    fn traversal_is_subset_of_exhaustive(rows in table(), min_support in 1i64..4) {
        let index = build_index(&rows).unwrap();
        let config = MiningConfig::new(min_support).unwrap();
        let rank = rank_items(&index, config.min_support);

        let exhaustive = enumerate_exhaustive(&rank, config.min_support).to_vec();
        for entry in enumerate_with(&rank, &config).unwrap().to_vec() {
            prop_assert!(exhaustive.contains(&entry));
        }
    }

    #[test]
    fn parallel_matches_sequential(rows in table(), min_support in 1i64..4) {
        let index = build_index(&rows).unwrap();
        let config = MiningConfig::new(min_support).unwrap();
        let rank = rank_items(&index, config.min_support);

        let sequential = enumerate_with(&rank, &config).unwrap();
        let parallel = enumerate_with(&rank, &config.clone().with_parallel(true)).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}
