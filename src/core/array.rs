use crate::utils::error::{Result, UtilError};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// First occurrence of each item, in input order.
pub fn unique<T: Eq + Hash + Clone>(array: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(array.len());
    array
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// True only for a present, zero-length slice.
pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    array.is_some_and(|items| items.is_empty())
}

pub fn without<T: PartialEq + Clone>(array: &[T], value: &T) -> Vec<T> {
    array.iter().filter(|item| *item != value).cloned().collect()
}

pub fn without_all<T: PartialEq + Clone>(array: &[T], values: &[T]) -> Vec<T> {
    array
        .iter()
        .filter(|item| !values.contains(*item))
        .cloned()
        .collect()
}

pub fn intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(*item)).cloned().collect()
}

pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    without_all(a, b)
}

pub fn chunk<T: Clone>(array: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        tracing::debug!("Rejecting chunk of {} items with size 0", array.len());
        return Err(UtilError::invalid_argument(
            "chunk size must be greater than 0",
        ));
    }

    Ok(array.chunks(size).map(<[T]>::to_vec).collect())
}

/// Items grouped by key, keeping the order in which keys were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<K, T> {
    entries: Vec<(K, Vec<T>)>,
}

impl<K, T> Default for Groups<K, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Eq, T> Groups<K, T> {
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, items)| items.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.entries.iter().map(|(k, items)| (k, items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_hash_map(self) -> HashMap<K, Vec<T>>
    where
        K: Hash,
    {
        self.entries.into_iter().collect()
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

pub fn group_by<T, K, F>(array: &[T], key_fn: F) -> Groups<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups = Groups::default();

    for item in array {
        let key = key_fn(item);
        let position = *positions.entry(key.clone()).or_insert_with(|| {
            groups.entries.push((key, Vec::new()));
            groups.entries.len() - 1
        });
        groups.entries[position].1.push(item.clone());
    }

    groups
}

/// Items passing `predicate`, then the rest; both keep input order.
pub fn partition<T, F>(array: &[T], predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    array.iter().cloned().partition(|item| predicate(item))
}

pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
        assert_eq!(unique(&["b", "a", "b"]), vec!["b", "a"]);
        assert!(unique::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty::<i32>(Some(&[])));
        assert!(!is_empty(Some(&[1][..])));
        assert!(!is_empty::<i32>(None));
    }

    #[test]
    fn test_without() {
        assert_eq!(without(&[1, 2, 1, 3], &1), vec![2, 3]);
        assert_eq!(without_all(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
        assert_eq!(without_all(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_intersection_and_difference_keep_multiplicity() {
        let a = [1, 2, 2, 3, 4];
        let b = [2, 4, 5];
        assert_eq!(intersection(&a, &b), vec![2, 2, 4]);
        assert_eq!(difference(&a, &b), vec![1, 3]);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(chunk(&[1, 2], 5).unwrap(), vec![vec![1, 2]]);
        assert!(chunk::<i32>(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_rejects_zero_size() {
        let err = chunk(&[1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, UtilError::InvalidArgument { .. }));
        assert!(err.to_string().contains("chunk size must be greater than 0"));
    }

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let words = ["apple", "bob", "avocado", "cat", "banana"];
        let groups = group_by(&words, |w| w.chars().next().unwrap_or(' '));

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert_eq!(groups.get(&'a'), Some(&["apple", "avocado"][..]));
        assert_eq!(groups.get(&'b'), Some(&["bob", "banana"][..]));
        assert_eq!(groups.get(&'z'), None);
        assert_eq!(groups.len(), 3);

        let map = groups.into_hash_map();
        assert_eq!(map[&'c'], vec!["cat"]);
    }

    #[test]
    fn test_group_by_empty() {
        let groups = group_by(&Vec::<i32>::new(), |n| n % 2);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_partition() {
        let (even, odd) = partition(&[1, 2, 3, 4], |n| n % 2 == 0);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3]);
    }

    #[test]
    fn test_zip_stops_at_shorter() {
        assert_eq!(zip(&[1, 2, 3], &['a', 'b']), vec![(1, 'a'), (2, 'b')]);
        assert!(zip::<i32, char>(&[], &['a']).is_empty());
    }
}
