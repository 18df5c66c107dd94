use crate::sink::Sink;
use crate::source::Source;
use crate::tests::{counted, init_logging};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_fold_range() {
    init_logging();

    let total = Source::iterator(0..4)
        .connect(Sink::fold(0, |total, n| total + n))
        .unwrap();

    assert_eq!(total, 6);
}

#[test]
fn test_ready_sink_leaves_source_untouched() {
    let (source, counters) = counted(0..0);

    let value = source.connect(Sink::ready(42)).unwrap();

    assert_eq!(value, 42);
    assert_eq!(counters.pulls(), 0);
    assert_eq!(counters.closes(), 0);
}

#[test]
fn test_defer_runs_before_input() {
    let ran = Rc::new(Cell::new(false));

    let sink = {
        let ran = ran.clone();

        Sink::defer(move || {
            ran.set(true);

            Ok(Sink::fold(0, |total, n| total + n))
        })
    };

    let total = Source::iterator(1..4).connect(sink).unwrap();

    assert!(ran.get());
    assert_eq!(total, 6);
}

#[test]
fn test_early_finish_closes_source_once() {
    let (source, counters) = counted(0..100);

    let taken = source.connect(Sink::take(2)).unwrap();

    assert_eq!(taken, vec![0, 1]);
    assert_eq!(counters.pulls(), 2);
    assert_eq!(counters.closes(), 1);
}

#[test]
fn test_exhausted_source_is_not_closed_again() {
    let (source, counters) = counted(0..3);

    let total = source
        .connect(Sink::fold(0, |total, n| total + n))
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(counters.pulls(), 4);
    assert_eq!(counters.closes(), 0);
}

#[test]
fn test_plain_leftover_is_lost() {
    init_logging();

    let (source, counters) = counted(5..10);

    let first = source.connect(Sink::peek()).unwrap();

    assert_eq!(first, Some(5));
    assert_eq!(counters.closes(), 1);
}

#[test]
fn test_take_zero_is_ready() {
    let (source, counters) = counted(0..10);

    let taken = source.connect(Sink::take(0)).unwrap();

    assert!(taken.is_empty());
    assert_eq!(counters.pulls(), 0);
    assert_eq!(counters.closes(), 0);
}

#[test]
fn test_first_and_ignore() {
    assert_eq!(
        Source::iterator(7..9).connect(Sink::first()).unwrap(),
        Some(7)
    );
    assert_eq!(
        Source::<i32>::empty().connect(Sink::first()).unwrap(),
        None
    );

    Source::iterator(0..1000).connect(Sink::ignore()).unwrap();
}

#[test]
fn test_collect_and_for_each() {
    let collected = Source::iterator(1..4).connect(Sink::collect()).unwrap();

    assert_eq!(collected, vec![1, 2, 3]);

    let seen = Rc::new(Cell::new(0));

    {
        let seen = seen.clone();

        Source::iterator(1..4)
            .connect(Sink::for_each(move |n| seen.set(seen.get() + n)))
            .unwrap();
    }

    assert_eq!(seen.get(), 6);
}

#[test]
fn test_on_close_hook_fires_once_when_exhausted() {
    let fired = Rc::new(Cell::new(0));

    {
        let fired = fired.clone();

        Source::iterator(0..3)
            .on_close(move || fired.set(fired.get() + 1))
            .connect(Sink::ignore())
            .unwrap();
    }

    assert_eq!(fired.get(), 1);
}

#[test]
fn test_on_close_hook_fires_once_when_closed_early() {
    let fired = Rc::new(Cell::new(0));

    {
        let fired = fired.clone();

        Source::iterator(0..100)
            .on_close(move || fired.set(fired.get() + 1))
            .connect(Sink::take(1))
            .unwrap();
    }

    assert_eq!(fired.get(), 1);
}

#[test]
fn test_on_close_hook_fires_once_when_dropped() {
    let fired = Rc::new(Cell::new(0));

    {
        let fired = fired.clone();
        let _source = Source::iterator(0..100).on_close(move || fired.set(fired.get() + 1));
    }

    assert_eq!(fired.get(), 1);
}

#[test]
fn test_random_sums_match_iterator() {
    use rand::Rng;

    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let len: usize = rng.gen_range(0..200);
        let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
        let expected: i64 = values.iter().sum();

        let total = Source::iterator(values.into_iter())
            .connect(Sink::fold(0, |total, n| total + n))
            .unwrap();

        assert_eq!(total, expected);
    }
}
