use ironstream::Nested::{Leaf, Seq};
use ironstream::testing::{PullCounter, assert_collections_equal};
use ironstream::{Nested, Stream};
use std::cell::RefCell;

fn primes_upto(n: i64) -> Stream<'static, i64> {
    Stream::int_range_closed(2, n).filter(|x| (2..).take_while(|d| d * d <= *x).all(|d| x % d != 0))
}

#[test]
fn sieve_by_chained_filters() {
    let mut s = Stream::int_range_closed(2, 100);
    for p in [2, 3, 5, 7] {
        s = s.filter(move |x| *x == p || x % p != 0);
    }
    let sieved = s.to_vec();
    assert_eq!(sieved.len(), 25);
    assert_eq!(sieved, primes_upto(100).to_vec());
}

#[test]
fn filter_then_map() {
    let v = Stream::int_range_closed(1, 10)
        .filter(|x| x % 3 == 0)
        .map(|x| format!("#{x}"))
        .to_vec();
    assert_eq!(v, vec!["#3", "#6", "#9"]);
}

#[test]
fn limit_and_skip() {
    assert_eq!(Stream::int_range(0, 100).skip(95).to_vec(), vec![95, 96, 97, 98, 99]);
    assert_eq!(Stream::int_range(0, 100).limit(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(Stream::int_range(0, 3).limit(10).to_vec(), vec![0, 1, 2]);
    assert_eq!(Stream::int_range(0, 3).skip(10).count(), 0);
    assert_eq!(Stream::int_range(0, 3).limit(0).count(), 0);
}

#[test]
fn take_while_and_drop_while_commute_on_primes() {
    let expected = vec![53, 59, 61, 67, 71, 73, 79, 83, 89, 97];

    let a = primes_upto(1000)
        .drop_while(|p| *p < 50)
        .take_while(|p| *p < 100)
        .to_vec();
    let b = primes_upto(1000)
        .take_while(|p| *p < 100)
        .drop_while(|p| *p < 50)
        .to_vec();
    assert_eq!(a, expected);
    assert_eq!(b, expected);
}

#[test]
fn drop_while_keeps_later_matches() {
    let v = Stream::of([1, 2, 5, 1, 2]).drop_while(|x| *x < 3).to_vec();
    assert_eq!(v, vec![5, 1, 2]);

    let v = Stream::of([1, 2, 5, 1, 2]).take_while(|x| *x < 3).to_vec();
    assert_eq!(v, vec![1, 2]);
}

#[test]
fn chunking() {
    let v = Stream::int_range_closed(1, 8).chunk(3).to_vec();
    assert_eq!(v, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);

    assert_eq!(Stream::int_range_closed(1, 6).chunk(3).count(), 2);
    assert!(Stream::<i32>::empty().chunk(4).to_vec().is_empty());
    assert_eq!(Stream::of([1, 2]).chunk(0).to_vec(), vec![vec![1], vec![2]]);
}

#[test]
fn chunk_larger_than_input() {
    assert_eq!(Stream::of([1, 2, 3]).chunk(usize::MAX).to_vec(), vec![vec![1, 2, 3]]);
    let infinite = Stream::iterate(0u32, |x| x + 1).chunk(1 << 40).limit(0).count();
    assert_eq!(infinite, 0);
    assert_eq!(Stream::int_range(0, 5).chunk(1 << 40).count(), 1);
}

#[test]
fn chunk_pulls_only_what_it_emits() {
    let pulls = PullCounter::new();
    let first = Stream::iterate(0u64, |x| x + 1)
        .peek(pulls.hook())
        .chunk(4)
        .find_first();
    assert_eq!(first, Some(vec![0, 1, 2, 3]));
    assert_eq!(pulls.count(), 4);
}

#[test]
fn concat_then_distinct() {
    let v = Stream::concat(Stream::of([1, 2, 3, 2]), Stream::of([3, 4, 1, 5]))
        .distinct()
        .to_vec();
    assert_eq!(v, vec![1, 2, 3, 4, 5]);
}

#[test]
fn distinct_by_and_floats() {
    let v = Stream::of(["Apple", "avocado", "Banana", "blueberry"])
        .distinct_by(|w| w.to_lowercase().chars().next())
        .to_vec();
    assert_eq!(v, vec!["Apple", "Banana"]);

    let v = Stream::of([1.5, f64::NAN, 1.5, 0.0, -0.0, f64::NAN, 2.0])
        .distinct_floats()
        .to_vec();
    assert_eq!(v.len(), 4);
    assert!(v[1].is_nan());
    assert_eq!(v[0], 1.5);
    assert_eq!(v[3], 2.0);
}

#[test]
fn sorted_variants() {
    assert_eq!(Stream::of([4, 3, 2, 1]).sorted().to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(
        Stream::of([1, 2, 3, 4]).sorted_by(|a, b| b.cmp(a)).to_vec(),
        vec![4, 3, 2, 1]
    );

    // stable: equal keys keep encounter order
    let v = Stream::of([("b", 2), ("a", 1), ("c", 2), ("d", 1)])
        .sorted_by_key(|p| p.1)
        .to_vec();
    assert_eq!(v, vec![("a", 1), ("d", 1), ("b", 2), ("c", 2)]);

    let v = Stream::of([3.5, f64::NAN, -1.0, 2.0]).sorted_floats().to_vec();
    assert_eq!(&v[..3], &[-1.0, 2.0, 3.5]);
    assert!(v[3].is_nan());
}

#[test]
fn sorted_buffers_upstream_when_applied() {
    let pulls = PullCounter::new();
    let s = Stream::of([3, 1, 2]).peek(pulls.hook()).sorted();
    assert_eq!(pulls.count(), 3);
    assert_eq!(s.to_vec(), vec![1, 2, 3]);
    assert_eq!(pulls.count(), 3);
}

#[test]
fn flat_map_over_arrays_and_streams() {
    let v = Stream::of([1, 2, 3, 4]).flat_map(|x| [x, 2 * x + 1]).to_vec();
    assert_eq!(v, vec![1, 3, 2, 5, 3, 7, 4, 9]);

    let v = Stream::int_range_closed(1, 3)
        .flat_map(|n| Stream::int_range_closed(1, n).map(move |k| (n, k)))
        .to_vec();
    assert_eq!(v, vec![(1, 1), (2, 1), (2, 2), (3, 1), (3, 2), (3, 3)]);

    let v = Stream::of([0, 2, 0, 1]).flat_map(|n| vec!["x"; n]).to_vec();
    assert_eq!(v, vec!["x", "x", "x"]);
}

#[test]
fn flatten_nested_sequences() {
    let input = vec![
        Leaf(1),
        Nested::seq([2, 3]),
        Leaf(4),
        Seq(vec![
            Leaf(5),
            Seq(vec![Leaf(6), Nested::seq([7]), Leaf(8)]),
            Leaf(9),
        ]),
        Leaf(10),
    ];
    let flat = Stream::of(input).flatten().to_vec();
    assert_collections_equal(&flat, &(1..=10).collect::<Vec<_>>());

    let empties = vec![Seq(vec![]), Seq(vec![Seq(vec![])]), Leaf('z')];
    assert_eq!(Stream::of(empties).flatten().to_vec(), vec!['z']);
}

#[test]
fn flatten_deep_nesting() {
    let mut node = Leaf(0u32);
    for depth in 1..=1_000 {
        node = Seq(vec![node, Leaf(depth)]);
    }
    let flat = Stream::of([node]).flatten().to_vec();
    assert_eq!(flat, (0..=1_000).collect::<Vec<_>>());
}

#[cfg(feature = "serde")]
#[test]
fn flatten_json_arrays() -> anyhow::Result<()> {
    let input: Vec<Nested<i64>> = serde_json::from_str("[1, [2, 3], [[4], 5], 6]")?;
    assert!(input[1].is_seq());
    assert_eq!(Stream::of(input).flatten().to_vec(), vec![1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn peek_sees_elements_in_pull_order() {
    let seen = RefCell::new(Vec::new());
    let v = Stream::int_range_closed(1, 6)
        .peek(|x| seen.borrow_mut().push(*x))
        .filter(|x| x % 2 == 0)
        .limit(2)
        .to_vec();
    assert_eq!(v, vec![2, 4]);
    assert_eq!(seen.into_inner(), vec![1, 2, 3, 4]);
}
