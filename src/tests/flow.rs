use crate::flow::Flow;
use crate::sink::Sink;
use crate::source::Source;

#[test]
fn test_map() {
    let collected = Source::iterator(1..4)
        .via(Flow::map(|n| n * 2))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![2, 4, 6]);
}

#[test]
fn test_filter() {
    let collected = Source::iterator(0..10)
        .via(Flow::filter(|n| n % 2 == 0))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_filter_map() {
    let collected = Source::iterator(0..5)
        .via(Flow::filter_map(|n| {
            if n % 2 == 0 {
                Some(n * 10)
            } else {
                None
            }
        }))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![0, 20, 40]);
}

#[test]
fn test_take_while() {
    let collected = Source::iterator(1..10)
        .via(Flow::take_while(|n| *n < 4))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_identity() {
    let collected = Source::iterator(1..5)
        .via(Flow::identity())
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![1, 2, 3, 4]);
}

#[test]
fn test_map_concat_empty_expansion() {
    let collected = Source::iterator(0..4)
        .via(Flow::map_concat(|n| {
            if n % 2 == 0 {
                vec![n].into_iter()
            } else {
                vec![].into_iter()
            }
        }))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![0, 2]);
}

#[test]
fn test_empty_source_still_runs_drain() {
    let collected = Source::<i32>::empty()
        .via(Flow::fold(7, |total, n| total + n))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![7]);
}

#[test]
fn test_single_and_repeat() {
    assert_eq!(
        Source::single(9).connect(Sink::collect()).unwrap(),
        vec![9]
    );
    assert_eq!(
        Source::repeat(9).connect(Sink::take(3)).unwrap(),
        vec![9, 9, 9]
    );
}
