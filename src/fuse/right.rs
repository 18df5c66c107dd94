use crate::connect;
use crate::error::Result;
use crate::flow::{Flow, Step};
use crate::sink::{ActiveSink, Consumer, Pushed, Sink};

/// Attach `flow` to the input side of `sink`, yielding a sink over the
/// flow's input type.
pub(crate) fn right<A, B, C>(flow: Flow<A, B>, sink: Sink<B, C>) -> Sink<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    match sink {
        // The sink needs no data, but the flow's drain must still be
        // finalized before the result is handed out.
        Sink::Ready(value) => Sink::defer(move || {
            flow.close().close()?;

            Ok(Sink::Ready(value))
        }),

        Sink::Defer(thunk) => Sink::defer(move || Ok(right(flow, thunk()?))),

        Sink::Active(inner) => Sink::Active(ActiveSink::new(Fused { flow, inner })),
    }
}

/// Fused sink: the flow feeds the inner sink.
struct Fused<A, B, C> {
    flow: Flow<A, B>,
    inner: ActiveSink<B, C>,
}

impl<A, B, C> Consumer<A, C> for Fused<A, B, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    fn name(&self) -> &'static str {
        "Fused"
    }

    fn push(self: Box<Self>, element: A) -> Result<Pushed<A, C>> {
        let Fused { flow, inner } = *self;
        let step = flow.push(element)?;

        feed(step, inner)
    }

    fn close(self: Box<Self>) -> Result<C> {
        let Fused { flow, inner } = *self;

        // Input has ended: the drain is a source, so the tail is delivered
        // by an ordinary connect.
        connect::run(flow.close(), Sink::Active(inner))
    }
}

/// Interpret the flow's step against the inner sink, draining any burst to
/// completion before accepting the next input element.
fn feed<A, B, C>(mut step: Step<A, B>, mut inner: ActiveSink<B, C>) -> Result<Pushed<A, C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    loop {
        match step {
            Step::Running(flow) => {
                return Ok(Pushed::Running(ActiveSink::new(Fused { flow, inner })));
            }

            Step::Finished(leftover) => {
                let value = inner.close()?;

                return Ok(Pushed::Done(leftover, value));
            }

            Step::More(burst, element) => match inner.push(element)? {
                Pushed::Running(next) => {
                    inner = next;
                    step = burst.pull()?;
                }

                Pushed::Done(inner_leftover, value) => {
                    // The inner leftover is of the flow's output type and
                    // cannot be returned at the outer boundary.
                    if inner_leftover.is_some() {
                        debug!("fused sink finished mid-burst; discarding its leftover element");
                    }

                    burst.close()?;

                    return Ok(Pushed::Done(None, value));
                }
            },
        }
    }
}
