//! Push-driven sinks.

mod collect;
mod first;
mod fold;
mod for_each;
mod ignore;
mod peek;
mod take;

pub use self::collect::Collect;
pub use self::first::First;
pub use self::fold::Fold;
pub use self::for_each::ForEach;
pub use self::ignore::Ignore;
pub use self::peek::Peek;
pub use self::take::Take;

use crate::error::Result;

/// Result of pushing one element into an active sink.
pub enum Pushed<A, B> {
    /// The sink accepts more input.
    Running(ActiveSink<A, B>),
    /// The sink finished with its result, possibly handing back one element
    /// it did not consume.
    Done(Option<A>, B),
}

/// Contract implemented by push-driven stages that finish with a value.
///
/// Both operations consume the stage; once `Done` is returned or `close`
/// is called there is no handle left to push again.
pub trait Consumer<A, B> {
    /// Diagnostic name used in log output.
    fn name(&self) -> &'static str {
        "anonymous"
    }

    /// Feed one element. Returning `Done` finalizes the stage; the leftover
    /// is at most the one element just pushed.
    fn push(self: Box<Self>, element: A) -> Result<Pushed<A, B>>;

    /// Finalize without further input.
    fn close(self: Box<Self>) -> Result<B>;
}

/// A sink that is accepting input.
pub struct ActiveSink<A, B> {
    pub(in crate::sink) logic: Box<dyn Consumer<A, B>>,
}

impl<A, B> ActiveSink<A, B>
where
    A: 'static,
    B: 'static,
{
    pub fn new<C>(logic: C) -> Self
    where
        C: Consumer<A, B> + 'static,
    {
        Self {
            logic: Box::new(logic),
        }
    }

    pub fn name(&self) -> &'static str {
        self.logic.name()
    }

    pub fn push(self, element: A) -> Result<Pushed<A, B>> {
        self.logic.push(element)
    }

    pub fn close(self) -> Result<B> {
        self.logic.close()
    }
}

/// A push-driven stream stage producing a final `B`.
///
/// The three variants exist so a sink that needs no input never forces the
/// source open: connecting inspects the sink first and a `Ready` sink
/// returns without the source being pulled or closed.
pub enum Sink<A, B> {
    /// Already has its result; consumes nothing.
    Ready(B),
    /// Must run an effect before it can accept input.
    Defer(Box<dyn FnOnce() -> Result<Sink<A, B>>>),
    /// Accepting input.
    Active(ActiveSink<A, B>),
}

impl<A, B> Sink<A, B>
where
    A: 'static,
    B: 'static,
{
    pub fn ready(value: B) -> Self {
        Sink::Ready(value)
    }

    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<Sink<A, B>> + 'static,
    {
        Sink::Defer(Box::new(thunk))
    }

    pub fn new<C>(logic: C) -> Self
    where
        C: Consumer<A, B> + 'static,
    {
        Sink::Active(ActiveSink::new(logic))
    }

    /// Folds every element into an accumulator, yielding it when input
    /// ends.
    pub fn fold<F>(init: B, fold: F) -> Self
    where
        F: FnMut(B, A) -> B + 'static,
    {
        Sink::new(Fold::new(init, fold))
    }
}

impl<A> Sink<A, ()>
where
    A: 'static,
{
    pub fn for_each<F>(for_each: F) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Sink::new(ForEach::new(for_each))
    }

    /// Runs the stream dry, discarding every element.
    pub fn ignore() -> Self {
        Sink::new(Ignore::new())
    }
}

impl<A> Sink<A, Vec<A>>
where
    A: 'static,
{
    pub fn collect() -> Self {
        Sink::new(Collect::new())
    }

    /// Collects the first `count` elements, finishing as soon as it has
    /// them. `take(0)` is `Ready` and never touches the source.
    pub fn take(count: usize) -> Self {
        if count == 0 {
            Sink::Ready(Vec::new())
        } else {
            Sink::new(Take::new(count))
        }
    }
}

impl<A> Sink<A, Option<A>>
where
    A: 'static,
{
    pub fn first() -> Self {
        Sink::new(First::new())
    }
}

impl<A> Sink<A, Option<A>>
where
    A: Clone + 'static,
{
    /// Returns the first element without consuming it: the element comes
    /// back as leftover, so against a buffered source a peek is
    /// non-destructive.
    pub fn peek() -> Self {
        Sink::new(Peek::new())
    }
}
