use std::cell::Cell;
use std::future::ready;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::pin::pin;
use std::rc::Rc;

use futures_core::Stream;
use futures_lite::future::block_on;
use futures_lite::prelude::*;

use pullkit::{iter, stream};

async fn drain<S: Stream>(source: S) -> Vec<S::Item> {
    let mut source = pin!(source);
    let mut out = Vec::new();
    while let Some(item) = source.next().await {
        out.push(item);
    }
    out
}

/// An unbounded source that counts how many elements have been pulled from
/// it.
fn counted(pulled: Rc<Cell<usize>>) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        pulled.set(pulled.get() + 1);
        Some(pulled.get())
    })
}

#[test]
fn sequential_and_suspending_families_agree() {
    block_on(async {
        let input = vec![3, 1, 4, 1, 5, 9, 2, 6];

        let seq: Vec<_> = iter::map(input.clone(), |n| n * 2).collect();
        let sus = drain(stream::map(stream::from_iter(input.clone()), |n| {
            ready(n * 2)
        }))
        .await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::filter(input.clone(), |n| n % 2 == 1).collect();
        let sus = drain(stream::filter(stream::from_iter(input.clone()), |n| {
            ready(n % 2 == 1)
        }))
        .await;
        assert_eq!(seq, sus);

        let seq: Vec<_> =
            iter::filter_map(input.clone(), |n| (n > 3).then_some(n * 10)).collect();
        let sus = drain(stream::filter_map(stream::from_iter(input.clone()), |n| {
            ready((n > 3).then_some(n * 10))
        }))
        .await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::scan(input.clone(), 0, |acc, n| acc + n).collect();
        let sus = drain(stream::scan(stream::from_iter(input.clone()), 0, |acc, n| {
            ready(acc + n)
        }))
        .await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::take(input.clone(), 3).collect();
        let sus = drain(stream::take(stream::from_iter(input.clone()), 3)).await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::take_while(input.clone(), |n| *n < 5).collect();
        let sus = drain(stream::take_while(stream::from_iter(input.clone()), |n| {
            ready(*n < 5)
        }))
        .await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::dedupe(input.clone(), |n| *n).collect();
        let sus = drain(stream::dedupe(stream::from_iter(input.clone()), |n| {
            ready(*n)
        }))
        .await;
        assert_eq!(seq, sus);

        let seq = iter::reduce(input.clone(), 0, |acc, n| acc + n);
        let sus = stream::reduce(stream::from_iter(input.clone()), 0, |acc, n| {
            ready(acc + n)
        })
        .await;
        assert_eq!(seq, sus);
    })
}

#[test]
fn structural_families_agree() {
    block_on(async {
        let nested = vec![vec![1, 2], vec![], vec![3]];

        let seq: Vec<_> = iter::flatten(nested.clone()).collect();
        let outer = stream::map(stream::from_iter(nested.clone()), |inner| {
            ready(stream::from_iter(inner))
        });
        let sus = drain(stream::flatten(outer)).await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::flat_map(vec![1usize, 2, 3], |n| vec![n; n]).collect();
        let sus = drain(stream::flat_map(stream::from_iter(vec![1usize, 2, 3]), |n| {
            ready(stream::from_iter(vec![n; n]))
        }))
        .await;
        assert_eq!(seq, sus);

        let seq: Vec<_> = iter::concat(nested.clone()).collect();
        let sus = drain(stream::concat(
            nested.clone().into_iter().map(stream::from_iter).collect(),
        ))
        .await;
        assert_eq!(seq, sus);
    })
}

#[test]
fn chains_pull_no_further_than_requested() {
    let pulled = Rc::new(Cell::new(0));
    let source = counted(pulled.clone());

    let mut chain = iter::map(
        iter::filter(iter::take(source, 1_000_000), |n| n % 2 == 0),
        |n| n * 2,
    );
    assert_eq!(chain.next(), Some(4));
    assert_eq!(chain.next(), Some(8));
    assert_eq!(chain.next(), Some(12));
    // Three even elements require pulling 1..=6 and nothing more.
    assert_eq!(pulled.get(), 6);
}

#[test]
fn suspending_chains_pull_no_further_than_requested() {
    block_on(async {
        let pulled = Rc::new(Cell::new(0));
        let source = stream::from_iter(counted(pulled.clone()));

        let chain = stream::map(
            stream::filter(stream::take(source, 1_000_000), |n| ready(n % 2 == 0)),
            |n| ready(n * 2),
        );
        let mut chain = pin!(chain);
        assert_eq!(chain.next().await, Some(4));
        assert_eq!(chain.next().await, Some(8));
        assert_eq!(pulled.get(), 4);
    })
}

#[test]
fn dedupe_invocations_never_share_seen_keys() {
    let input = vec![1, 2, 1, 3];
    let first: Vec<_> = iter::dedupe(input.clone(), |n| *n).collect();
    let second: Vec<_> = iter::dedupe(input, |n| *n).collect();
    assert_eq!(first, [1, 2, 3]);
    assert_eq!(second, [1, 2, 3]);
}

#[test]
fn scan_is_one_longer_even_when_empty() {
    block_on(async {
        let seq: Vec<i32> = iter::scan(Vec::<i32>::new(), 0, |acc, n| acc + n).collect();
        assert_eq!(seq, [0]);

        let sus = drain(stream::scan(
            stream::from_iter(Vec::<i32>::new()),
            0,
            |acc, n| ready(acc + n),
        ))
        .await;
        assert_eq!(sus, [0]);
    })
}

#[test]
fn step_failure_surfaces_at_the_failing_pull() {
    let mut seq = iter::map([1, 2, 3], |n| {
        if n == 3 {
            panic!("step failed");
        }
        n
    });
    assert_eq!(seq.next(), Some(1));
    assert_eq!(seq.next(), Some(2));
    let failure = catch_unwind(AssertUnwindSafe(|| seq.next()));
    assert!(failure.is_err());
}

#[test]
fn dedupe_keys_recorded_before_a_failure_stay_recorded() {
    let calls = Rc::new(Cell::new(0));
    let calls_in_step = calls.clone();
    let mut seq = iter::map(iter::dedupe([1, 1, 2], |n| *n), move |n| {
        calls_in_step.set(calls_in_step.get() + 1);
        if calls_in_step.get() == 2 {
            panic!("step failed");
        }
        n
    });
    assert_eq!(seq.next(), Some(1));
    // The duplicate `1` was dropped by dedupe before the failing step ran.
    let failure = catch_unwind(AssertUnwindSafe(|| seq.next()));
    assert!(failure.is_err());
    assert_eq!(calls.get(), 2);
}

#[test]
fn exhausted_sources_stay_done() {
    block_on(async {
        let mut seq = iter::take_while([1, 5, 1], |n| *n < 3);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);

        let mut s = stream::filter(stream::from_iter([1, 2]), |_| ready(true));
        assert_eq!(s.next().await, Some(1));
        assert_eq!(s.next().await, Some(2));
        assert_eq!(s.next().await, None);
        assert_eq!(s.next().await, None);
    })
}
