use crate::buffered::Shared;
use crate::error::Result;
use crate::flow::{Burst, Flow, Step};
use crate::source::{Producer, Pulled, Source};

/// Attach `flow` to the output side of `source`, yielding a source of the
/// flow's outputs.
pub(crate) fn left<A, B>(source: Source<A>, flow: Flow<A, B>) -> Source<B>
where
    A: 'static,
    B: 'static,
{
    Source::new(Open { source, flow })
}

/// As [`left`], over a shared buffer cell instead of an owned source. The
/// buffer's owner keeps responsibility for finalization, so the fused
/// source's close is a no-op, and a flow that terminates with leftover
/// puts it back instead of losing it.
pub(crate) fn left_buffered<A, B>(cell: Shared<A>, flow: Flow<A, B>) -> Source<B>
where
    A: 'static,
    B: 'static,
{
    Source::new(BufferedOpen { cell, flow })
}

/// Fused source ready to pull its upstream.
struct Open<A, B> {
    source: Source<A>,
    flow: Flow<A, B>,
}

impl<A, B> Producer<B> for Open<A, B>
where
    A: 'static,
    B: 'static,
{
    fn name(&self) -> &'static str {
        "Fused"
    }

    fn pull(self: Box<Self>) -> Result<Pulled<B>> {
        let Open { source, flow } = *self;

        advance(source, Step::Running(flow))
    }

    fn close(self: Box<Self>) -> Result<()> {
        let Open { source, flow } = *self;

        flow.close().close()?;
        source.close()
    }
}

/// Fused source inside an output burst; the burst is drained before the
/// upstream is touched again.
struct Emitting<A, B> {
    source: Source<A>,
    burst: Burst<A, B>,
}

impl<A, B> Producer<B> for Emitting<A, B>
where
    A: 'static,
    B: 'static,
{
    fn name(&self) -> &'static str {
        "Fused"
    }

    fn pull(self: Box<Self>) -> Result<Pulled<B>> {
        let Emitting { source, burst } = *self;
        let step = burst.pull()?;

        advance(source, step)
    }

    fn close(self: Box<Self>) -> Result<()> {
        let Emitting { source, burst } = *self;

        burst.close()?;
        source.close()
    }
}

/// Drive the upstream through the flow until one output is available, the
/// flow terminates, or the upstream ends. The caller asked for exactly one
/// element, so `Running` keeps pulling.
fn advance<A, B>(mut source: Source<A>, mut step: Step<A, B>) -> Result<Pulled<B>>
where
    A: 'static,
    B: 'static,
{
    loop {
        match step {
            Step::More(burst, element) => {
                return Ok(Pulled::Open(
                    Source::new(Emitting { source, burst }),
                    element,
                ));
            }

            Step::Finished(leftover) => {
                if leftover.is_some() {
                    debug!(
                        "fused flow finished; discarding one leftover element from {}",
                        source.name()
                    );
                }

                source.close()?;

                return Ok(Pulled::Closed);
            }

            Step::Running(flow) => match source.pull()? {
                // Upstream is done: the flow's drain becomes the tail, and
                // the continuation we hand out is the drain's own.
                Pulled::Closed => return flow.close().pull(),

                Pulled::Open(next, element) => {
                    source = next;
                    step = flow.push(element)?;
                }
            },
        }
    }
}

/// Buffered counterpart of [`Open`].
struct BufferedOpen<A, B> {
    cell: Shared<A>,
    flow: Flow<A, B>,
}

impl<A, B> Producer<B> for BufferedOpen<A, B>
where
    A: 'static,
    B: 'static,
{
    fn name(&self) -> &'static str {
        "BufferedFused"
    }

    fn pull(self: Box<Self>) -> Result<Pulled<B>> {
        let BufferedOpen { cell, flow } = *self;

        advance_buffered(cell, Step::Running(flow))
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

/// Buffered counterpart of [`Emitting`].
struct BufferedEmitting<A, B> {
    cell: Shared<A>,
    burst: Burst<A, B>,
}

impl<A, B> Producer<B> for BufferedEmitting<A, B>
where
    A: 'static,
    B: 'static,
{
    fn name(&self) -> &'static str {
        "BufferedFused"
    }

    fn pull(self: Box<Self>) -> Result<Pulled<B>> {
        let BufferedEmitting { cell, burst } = *self;
        let step = burst.pull()?;

        advance_buffered(cell, step)
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

fn advance_buffered<A, B>(cell: Shared<A>, mut step: Step<A, B>) -> Result<Pulled<B>>
where
    A: 'static,
    B: 'static,
{
    loop {
        match step {
            Step::More(burst, element) => {
                return Ok(Pulled::Open(
                    Source::new(BufferedEmitting { cell, burst }),
                    element,
                ));
            }

            Step::Finished(leftover) => {
                cell.unpull(leftover);

                return Ok(Pulled::Closed);
            }

            Step::Running(flow) => match cell.pull()? {
                None => return flow.close().pull(),

                Some(element) => step = flow.push(element)?,
            },
        }
    }
}
