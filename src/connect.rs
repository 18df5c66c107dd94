//! The terminal operation: drive a source into a sink.

use crate::buffered::Shared;
use crate::error::Result;
use crate::sink::{ActiveSink, Pushed, Sink};
use crate::source::{Pulled, Source};

/// Drive `source` into `sink` until the sink finishes or the source ends,
/// returning the sink's result.
///
/// The sink is inspected first: a `Ready` sink returns without the source
/// being pulled or closed. A sink that finishes early gets the source
/// continuation closed; any leftover it hands back is deliberately lost
/// (the buffered variant is the one place leftover survives).
pub(crate) fn run<A, B>(source: Source<A>, mut sink: Sink<A, B>) -> Result<B>
where
    A: 'static,
    B: 'static,
{
    loop {
        match sink {
            Sink::Ready(value) => return Ok(value),

            Sink::Defer(thunk) => sink = thunk()?,

            Sink::Active(active) => return drive(source, active),
        }
    }
}

fn drive<A, B>(mut source: Source<A>, mut active: ActiveSink<A, B>) -> Result<B>
where
    A: 'static,
    B: 'static,
{
    loop {
        match source.pull()? {
            Pulled::Closed => return active.close(),

            Pulled::Open(next, element) => match active.push(element)? {
                Pushed::Running(next_sink) => {
                    source = next;
                    active = next_sink;
                }

                Pushed::Done(leftover, value) => {
                    if leftover.is_some() {
                        debug!(
                            "sink finished with a leftover element; closing {} discards it",
                            next.name()
                        );
                    }

                    next.close()?;

                    return Ok(value);
                }
            },
        }
    }
}

/// As [`run`], reading from a buffer cell. The underlying source is never
/// closed here, and a leftover from the sink is pushed back, so the buffer
/// resumes exactly where this connect stopped.
pub(crate) fn run_buffered<A, B>(cell: &Shared<A>, mut sink: Sink<A, B>) -> Result<B>
where
    A: 'static,
    B: 'static,
{
    loop {
        match sink {
            Sink::Ready(value) => return Ok(value),

            Sink::Defer(thunk) => sink = thunk()?,

            Sink::Active(mut active) => loop {
                match cell.pull()? {
                    None => return active.close(),

                    Some(element) => match active.push(element)? {
                        Pushed::Running(next) => active = next,

                        Pushed::Done(leftover, value) => {
                            cell.unpull(leftover);

                            return Ok(value);
                        }
                    },
                }
            },
        }
    }
}
