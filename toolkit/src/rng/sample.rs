//! Collection sampling helpers built on [`RandomSource`]
//!
//! Picking one element and shuffling in place are the two draws the
//! list-oriented actions need. Both are generic over the source so the
//! same call site works with system entropy or a seeded run.

use super::RandomSource;

/// Pick one element from a slice uniformly at random.
///
/// Returns `None` when the slice is empty.
///
/// # Example
/// ```
/// use actionkit_core::{rng::sample, SeededSource};
///
/// let options = ["soup", "salad", "sandwich"];
/// let mut source = SeededSource::from_text("lunch");
/// let choice = sample::pick(&mut source, &options);
/// assert!(choice.is_some());
/// ```
pub fn pick<'a, T, R>(source: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let index = source.next_below(items.len() as u64) as usize;
    Some(&items[index])
}

/// Shuffle a slice in place (Fisher-Yates).
///
/// Every permutation is equally likely given a uniform source. A seeded
/// source therefore yields the same permutation on every run.
///
/// # Example
/// ```
/// use actionkit_core::{rng::sample, SeededSource};
///
/// let mut names = vec!["ada", "grace", "edsger"];
/// let mut source = SeededSource::new(7);
/// sample::shuffle(&mut source, &mut names);
/// assert_eq!(names.len(), 3);
/// ```
pub fn shuffle<T, R>(source: &mut R, items: &mut [T])
where
    R: RandomSource + ?Sized,
{
    // Walk from the back, swapping each slot with a uniformly chosen
    // earlier slot (inclusive of itself).
    for i in (1..items.len()).rev() {
        let j = source.next_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededSource;

    #[test]
    fn test_pick_empty_returns_none() {
        let items: [u32; 0] = [];
        let mut source = SeededSource::new(1);
        assert_eq!(pick(&mut source, &items), None);
    }

    #[test]
    fn test_pick_single_element() {
        let items = [42];
        let mut source = SeededSource::new(1);
        assert_eq!(pick(&mut source, &items), Some(&42));
    }

    #[test]
    fn test_pick_returns_member() {
        let items = ["a", "b", "c", "d"];
        let mut source = SeededSource::new(99);

        for _ in 0..100 {
            let choice = pick(&mut source, &items).unwrap();
            assert!(items.contains(choice));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..50).collect();
        let mut source = SeededSource::new(12345);

        shuffle(&mut source, &mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_deterministic_with_same_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();

        shuffle(&mut SeededSource::new(777), &mut a);
        shuffle(&mut SeededSource::new(777), &mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        let mut single = vec![9];
        let mut source = SeededSource::new(3);

        shuffle(&mut source, &mut empty);
        shuffle(&mut source, &mut single);

        assert!(empty.is_empty());
        assert_eq!(single, vec![9]);
    }
}
