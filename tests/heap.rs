use ironstream::heap::{MinHeap, Natural, Reversed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn peek_min_tracks_minimum_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut heap: MinHeap<i32> = MinHeap::new();
    let mut reference: Vec<i32> = Vec::new();

    for _ in 0..5_000 {
        match rng.random_range(0..3) {
            0 => {
                let x = rng.random_range(-100..100);
                heap.insert(x);
                reference.push(x);
            }
            1 => {
                reference.sort_unstable();
                let expected = if reference.is_empty() {
                    None
                } else {
                    Some(reference.remove(0))
                };
                assert_eq!(heap.extract_min(), expected);
            }
            _ => {
                let x = rng.random_range(-100..100);
                reference.sort_unstable();
                let out = heap.extract_and_insert(x);
                match reference.first().copied() {
                    None => {
                        assert_eq!(out, None);
                        reference.push(x);
                    }
                    Some(min) => {
                        assert_eq!(out, Some(min));
                        if x > min {
                            reference[0] = x;
                        }
                    }
                }
            }
        }
        assert_eq!(heap.count(), reference.len());
        assert_eq!(heap.peek_min().copied(), reference.iter().min().copied());
    }

    reference.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), reference);
}

#[test]
fn storage_order_is_not_sorted_but_drain_is() {
    let heap: MinHeap<i32> = [5, 4, 3, 2, 1].into_iter().collect();
    let storage: Vec<i32> = heap.iter().copied().collect();
    assert_eq!(storage.len(), 5);
    assert_eq!(storage[0], 1);
    assert_ne!(storage, vec![1, 2, 3, 4, 5]);
    assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn max_heap_via_reversed_comparator() {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u32> = (0..500).map(|_| rng.random_range(0..1_000)).collect();

    let mut heap = MinHeap::with_comparator(Reversed(Natural));
    heap.extend(data.iter().copied());
    assert_eq!(heap.peek_min().copied(), data.iter().max().copied());

    let mut expected = data;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[test]
fn replace_min_swaps_root_unconditionally() {
    let mut heap: MinHeap<i32> = [2, 4, 6].into_iter().collect();
    assert_eq!(heap.replace_min(1), Some(2));
    assert_eq!(heap.peek_min(), Some(&1));
    assert_eq!(heap.replace_min(10), Some(1));
    assert_eq!(heap.into_sorted_vec(), vec![4, 6, 10]);

    let mut empty: MinHeap<i32> = MinHeap::default();
    assert_eq!(empty.replace_min(3), None);
    assert_eq!(empty.count(), 1);
}
