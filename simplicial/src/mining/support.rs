use super::TransactionId;

/// Intersection of two ascending, duplicate-free lists.
pub fn intersect_sorted(a: &[TransactionId], b: &[TransactionId]) -> Vec<TransactionId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    out
}

/// Number of transactions shared by every posting list in `stack`.
///
/// Folds left to right and stops as soon as the running intersection is
/// empty. Nothing is cached between calls.
pub fn count_support(stack: &[&[TransactionId]]) -> usize {
    let Some((first, rest)) = stack.split_first() else {
        return 0;
    };

    let mut common = first.to_vec();
    for list in rest {
        if common.is_empty() {
            return 0;
        }
        common = intersect_sorted(&common, list);
    }

    common.len()
}
