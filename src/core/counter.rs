//! Frequency ranking shared by the aggregations.

use std::collections::HashMap;
use std::hash::Hash;

/// Label/count pairs, most frequent first.
pub type Frequency = Vec<(String, usize)>;

/// Counts `items` and sorts by count, descending.
///
/// Ties keep the order in which the items were first seen, so the result is
/// deterministic for a given input.
pub(crate) fn rank_by_count<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut ranked: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => ranked[i].1 += 1,
            None => {
                index.insert(item.clone(), ranked.len());
                ranked.push((item, 1));
            }
        }
    }

    // stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
