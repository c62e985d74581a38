use ironstream::Stream;
use ironstream::testing::{PullCounter, assert_all};

fn primes_upto(n: i64) -> Stream<'static, i64> {
    Stream::int_range_closed(2, n).filter(|x| (2..).take_while(|d| d * d <= *x).all(|d| x % d != 0))
}

#[test]
fn reduce_folds_left() {
    let r = Stream::int_range_closed(1, 10)
        .filter(|x| x % 2 == 0)
        .map(|x| x + 1)
        .reduce(0, |acc, y| 2 * acc + y);
    assert_eq!(r, 145);

    assert_eq!(Stream::<i64>::empty().reduce(7, |a, b| a + b), 7);

    let joined = Stream::of(["a", "b", "c"]).reduce(String::new(), |mut acc, s| {
        acc.push_str(s);
        acc
    });
    assert_eq!(joined, "abc");
}

#[test]
fn counting() {
    assert_eq!(primes_upto(100).count(), 25);
    assert_eq!(Stream::<()>::empty().count(), 0);
}

#[test]
fn sum_compensated_vs_naive() {
    let data = [1.0, 1e100, 1.0, -1e100];
    assert_eq!(Stream::of(data).sum(), 2.0);
    assert_eq!(Stream::of(data).sum_inaccurate(), 0.0);

    assert_eq!(Stream::of([0.1; 10]).sum(), 1.0);
    assert_ne!(Stream::of([0.1; 10]).sum_inaccurate(), 1.0);

    assert_eq!(Stream::int_range_closed(1, 10).sum_inaccurate(), 55);
    assert_eq!(Stream::<f64>::empty().sum(), 0.0);
}

#[test]
fn min_and_max() {
    assert_eq!(primes_upto(2000).min(), Some(2));
    assert_eq!(primes_upto(2000).max(), Some(1999));
    assert_eq!(Stream::<i32>::empty().min(), None);
    assert_eq!(Stream::<i32>::empty().max(), None);
    assert_eq!(Stream::of([2.5, -1.0, 7.25]).max(), Some(7.25));
}

#[test]
fn min_and_max_keep_first_on_ties() {
    let pairs = || {
        Stream::of([(1, "first"), (0, "low-a"), (3, "high-a"), (0, "low-b"), (3, "high-b")])
            .map(|(k, tag)| Keyed { k, tag })
    };
    assert_eq!(pairs().min().map(|p| p.tag), Some("low-a"));
    assert_eq!(pairs().max().map(|p| p.tag), Some("high-a"));
}

#[derive(Debug)]
struct Keyed {
    k: i32,
    tag: &'static str,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.k.partial_cmp(&other.k)
    }
}

#[test]
fn quantifiers() {
    assert!(primes_upto(100).skip(1).all_match(|p| p % 2 == 1));
    assert!(primes_upto(100).any_match(|p| p == 97));
    assert!(primes_upto(100).none_match(|p| p % 10 == 0));
    assert!(!primes_upto(100).all_match(|p| p < 50));
    assert!(!primes_upto(100).none_match(|p| p == 2));
}

#[test]
fn quantifiers_on_empty_streams() {
    let calls = PullCounter::new();
    let probe = calls.clone();
    assert!(Stream::<i32>::empty().all_match(|_| {
        probe.hit();
        false
    }));
    assert!(Stream::<i32>::empty().none_match(|_| true));
    assert!(!Stream::<i32>::empty().any_match(|_| true));
    assert_eq!(calls.count(), 0);
}

#[test]
fn quantifiers_short_circuit_infinite_sources() {
    assert!(Stream::iterate(1u64, |x| x * 2).any_match(|x| x > 1_000));
    assert!(!Stream::iterate(1u64, |x| x + 1).all_match(|x| x < 10));
    assert!(!Stream::iterate(1u64, |x| x + 1).none_match(|x| x == 10));
}

#[test]
fn for_each_visits_in_order() {
    let mut out = Vec::new();
    Stream::of([3, 1, 2]).for_each(|x| out.push(x * 10));
    assert_eq!(out, vec![30, 10, 20]);
    assert_all(&out, |x| x % 10 == 0);
}

#[test]
fn find_first_and_peek_first() {
    assert_eq!(Stream::of([10, 20, 30]).skip(1).find_first(), Some(20));
    assert_eq!(Stream::of([10, 20, 30]).skip(4).find_first(), None);

    let mut s = Stream::of([10, 20, 30]).skip(1);
    assert_eq!(s.peek_first(), Some(&20));
    assert_eq!(s.peek_first(), Some(&20));
    assert_eq!(s.to_vec(), vec![20, 30]);

    let mut empty = Stream::<i32>::empty();
    assert_eq!(empty.peek_first(), None);
}

#[test]
fn find_first_evaluates_one_element() {
    let pulls = PullCounter::new();
    let first = Stream::int_range_closed(1, 1_000_000)
        .peek(pulls.hook())
        .map(|x| x * x)
        .find_first();
    assert_eq!(first, Some(1));
    assert_eq!(pulls.count(), 1);
}
