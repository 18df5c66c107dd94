use crate::error::Result;
use crate::flow::{Burst, Emitter, Flow, Step, Transformer};
use crate::source::{Pulled, Source};

/// Compose two flows into one.
pub(crate) fn mid<A, B, C>(first: Flow<A, B>, second: Flow<B, C>) -> Flow<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Flow::new(Composed { first, second })
}

struct Composed<A, B, C> {
    first: Flow<A, B>,
    second: Flow<B, C>,
}

impl<A, B, C> Transformer<A, C> for Composed<A, B, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    fn name(&self) -> &'static str {
        "Composed"
    }

    fn push(self: Box<Self>, element: A) -> Result<Step<A, C>> {
        let Composed { first, second } = *self;
        let step = first.push(element)?;

        compose(step, second)
    }

    fn close(self: Box<Self>) -> Source<C> {
        let Composed { first, second } = *self;

        // The composed drain: the first flow's drain through the second
        // flow. Once that drain ends, the left fuse switches to the
        // second flow's own drain as the tail.
        first.close().via(second)
    }
}

/// Interpret the upstream flow's step against the downstream flow.
fn compose<A, B, C>(mut step: Step<A, B>, mut second: Flow<B, C>) -> Result<Step<A, C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    loop {
        match step {
            Step::Running(first) => {
                return Ok(Step::Running(Flow::new(Composed { first, second })));
            }

            // Upstream terminated mid-stream: emit the downstream drain as
            // a final burst, then report the upstream leftover.
            Step::Finished(leftover) => return drain_tail(second.close(), leftover),

            Step::More(burst, element) => match second.push(element)? {
                Step::Running(next) => {
                    second = next;
                    step = burst.pull()?;
                }

                Step::Finished(inner_leftover) => {
                    // The inner leftover is of the intermediate type and
                    // cannot cross the outer boundary.
                    if inner_leftover.is_some() {
                        debug!("downstream flow finished; discarding its leftover element");
                    }

                    burst.close()?;

                    return Ok(Step::Finished(None));
                }

                Step::More(inner_burst, element) => {
                    return Ok(Step::More(
                        Burst::new(Bursting {
                            first: burst,
                            second: inner_burst,
                        }),
                        element,
                    ));
                }
            },
        }
    }
}

/// Both flows mid-burst. The downstream burst drains before the upstream
/// burst is pulled again, so output order follows input order.
struct Bursting<A, B, C> {
    first: Burst<A, B>,
    second: Burst<B, C>,
}

impl<A, B, C> Emitter<A, C> for Bursting<A, B, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    fn name(&self) -> &'static str {
        "Composed"
    }

    fn pull(self: Box<Self>) -> Result<Step<A, C>> {
        let Bursting { first, second } = *self;

        match second.pull()? {
            Step::More(next, element) => Ok(Step::More(
                Burst::new(Bursting {
                    first,
                    second: next,
                }),
                element,
            )),

            Step::Running(second) => {
                let step = first.pull()?;

                compose(step, second)
            }

            Step::Finished(inner_leftover) => {
                if inner_leftover.is_some() {
                    debug!("downstream flow finished; discarding its leftover element");
                }

                first.close()?;

                Ok(Step::Finished(None))
            }
        }
    }

    fn close(self: Box<Self>) -> Result<()> {
        let Bursting { first, second } = *self;

        first.close()?;
        second.close()
    }
}

/// The upstream flow finished; what remains is the downstream drain,
/// emitted as a burst that carries the upstream leftover to the end.
fn drain_tail<A, C>(drain: Source<C>, leftover: Option<A>) -> Result<Step<A, C>>
where
    A: 'static,
    C: 'static,
{
    match drain.pull()? {
        Pulled::Open(next, element) => Ok(Step::More(
            Burst::new(Draining {
                drain: next,
                leftover,
            }),
            element,
        )),

        Pulled::Closed => Ok(Step::Finished(leftover)),
    }
}

struct Draining<A, C> {
    drain: Source<C>,
    leftover: Option<A>,
}

impl<A, C> Emitter<A, C> for Draining<A, C>
where
    A: 'static,
    C: 'static,
{
    fn name(&self) -> &'static str {
        "Draining"
    }

    fn pull(self: Box<Self>) -> Result<Step<A, C>> {
        let Draining { drain, leftover } = *self;

        drain_tail(drain, leftover)
    }

    fn close(self: Box<Self>) -> Result<()> {
        let Draining { drain, .. } = *self;

        drain.close()
    }
}
