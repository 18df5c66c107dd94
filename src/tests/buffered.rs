use crate::buffered::BufferedSource;
use crate::flow::Flow;
use crate::sink::Sink;
use crate::source::Source;
use crate::tests::{counted, init_logging};

#[test]
fn test_resumes_after_take() {
    let mut buffered = BufferedSource::new(Source::iterator(10..20));

    assert_eq!(buffered.connect(Sink::take(2)).unwrap(), vec![10, 11]);
    assert_eq!(buffered.pull().unwrap(), Some(12));

    buffered.close().unwrap();

    assert_eq!(buffered.pull().unwrap(), None);
}

#[test]
fn test_peek_leftover_is_preserved() {
    let mut buffered = BufferedSource::new(Source::iterator(10..20));

    assert_eq!(buffered.connect(Sink::peek()).unwrap(), Some(10));
    assert_eq!(buffered.pull().unwrap(), Some(10));
    assert_eq!(buffered.pull().unwrap(), Some(11));

    buffered.close().unwrap();
}

#[test]
fn test_multiple_connects() {
    let mut buffered = BufferedSource::new(Source::iterator(0..10));

    assert_eq!(buffered.connect(Sink::take(3)).unwrap(), vec![0, 1, 2]);
    assert_eq!(buffered.connect(Sink::take(3)).unwrap(), vec![3, 4, 5]);
    assert_eq!(buffered.pull().unwrap(), Some(6));

    buffered.close().unwrap();
}

#[test]
fn test_connect_never_closes_underlying() {
    let (source, counters) = counted(0..10);
    let mut buffered = BufferedSource::new(source);

    buffered.connect(Sink::take(1)).unwrap();

    assert_eq!(counters.closes(), 0);

    buffered.close().unwrap();

    assert_eq!(counters.closes(), 1);
}

#[test]
fn test_buffered_ready_sink() {
    let (source, counters) = counted(0..5);
    let mut buffered = BufferedSource::new(source);

    assert_eq!(buffered.connect(Sink::ready(1)).unwrap(), 1);
    assert_eq!(counters.pulls(), 0);

    buffered.close().unwrap();
}

#[test]
fn test_close_is_idempotent() {
    let (source, counters) = counted(0..10);
    let mut buffered = BufferedSource::new(source);

    buffered.close().unwrap();
    buffered.close().unwrap();

    assert_eq!(counters.closes(), 1);
    assert_eq!(buffered.pull().unwrap(), None);
}

#[test]
fn test_exhausting_marks_closed() {
    let (source, counters) = counted(0..3);
    let mut buffered = BufferedSource::new(source);

    let total = buffered
        .connect(Sink::fold(0, |total, n| total + n))
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(buffered.pull().unwrap(), None);

    buffered.close().unwrap();

    assert_eq!(counters.closes(), 0);
}

#[test]
fn test_unpull_none_is_noop() {
    let mut buffered = BufferedSource::new(Source::iterator(0..3));

    buffered.unpull(None);

    assert_eq!(buffered.pull().unwrap(), Some(0));

    buffered.close().unwrap();
}

#[test]
fn test_unpull_after_close_stays_pullable() {
    init_logging();

    let mut buffered = BufferedSource::new(Source::iterator(0..3));

    let first = buffered.pull().unwrap();

    buffered.close().unwrap();
    buffered.unpull(first);

    assert_eq!(buffered.pull().unwrap(), Some(0));
    assert_eq!(buffered.pull().unwrap(), None);
}

#[test]
#[should_panic(expected = "already holds an element")]
fn test_unpull_twice_panics() {
    let mut buffered = BufferedSource::new(Source::iterator(0..3));

    buffered.unpull(Some(1));
    buffered.unpull(Some(2));
}

#[test]
fn test_buffered_via_preserves_leftover() {
    let mut buffered = BufferedSource::new(Source::iterator(1..10));

    let collected = buffered
        .via(Flow::take_while(|n| *n < 4))
        .connect(Sink::collect())
        .unwrap();

    assert_eq!(collected, vec![1, 2, 3]);
    // the failing element went back into the buffer
    assert_eq!(buffered.pull().unwrap(), Some(4));

    buffered.close().unwrap();
}

#[test]
fn test_closing_buffered_fused_source_is_noop() {
    let (source, counters) = counted(0..10);
    let mut buffered = BufferedSource::new(source);

    let fused = buffered.via(Flow::map(|n: i32| n * 2));

    fused.close().unwrap();

    assert_eq!(counters.closes(), 0);
    assert_eq!(buffered.pull().unwrap(), Some(0));

    buffered.close().unwrap();
}

#[test]
fn test_into_source_replays_pending_element() {
    let mut buffered = BufferedSource::new(Source::iterator(0..5));

    let first = buffered.pull().unwrap();

    buffered.unpull(first);

    let collected = buffered.into_source().connect(Sink::collect()).unwrap();

    assert_eq!(collected, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_into_source_after_close() {
    let mut buffered = BufferedSource::new(Source::iterator(0..5));

    let first = buffered.pull().unwrap();

    buffered.close().unwrap();
    buffered.unpull(first);

    let collected = buffered.into_source().connect(Sink::collect()).unwrap();

    assert_eq!(collected, vec![0]);
}
