//! Pull-driven sources.

mod guard;
mod iter;

pub use self::iter::Iter;

use self::guard::Guarded;
use crate::connect;
use crate::error::Result;
use crate::flow::Flow;
use crate::fuse;
use crate::sink::Sink;
use std::iter as std_iter;

/// Result of pulling a source: one element and the continuation, or the end
/// of the stream.
pub enum Pulled<A> {
    /// The source produced an element and continues as the given source.
    Open(Source<A>, A),
    /// The source is exhausted and has released its resources.
    Closed,
}

/// Contract implemented by pull-driven stages.
///
/// Both operations consume the stage. A pull hands ownership back inside
/// `Pulled::Open`, so once a source reported `Closed` (or was closed)
/// there is no handle left to misuse: exactly one of the two finalizes
/// every path.
pub trait Producer<A> {
    /// Diagnostic name used in log output.
    fn name(&self) -> &'static str {
        "anonymous"
    }

    /// Produce the next element, or `Closed` once exhausted. Returning
    /// `Closed` finalizes the stage.
    fn pull(self: Box<Self>) -> Result<Pulled<A>>;

    /// Release resources without producing further elements.
    fn close(self: Box<Self>) -> Result<()>;
}

/// A pull-driven stream of `A` values.
pub struct Source<A> {
    pub(in crate::source) logic: Box<dyn Producer<A>>,
}

impl<A> Source<A>
where
    A: 'static,
{
    pub fn new<P>(logic: P) -> Self
    where
        P: Producer<A> + 'static,
    {
        Self {
            logic: Box::new(logic),
        }
    }

    pub fn iterator<I>(iterator: I) -> Self
    where
        I: Iterator<Item = A> + 'static,
    {
        Self::new(Iter::new(iterator))
    }

    pub fn empty() -> Self {
        Self::new(Iter::new(std_iter::empty()))
    }

    pub fn single(element: A) -> Self {
        Self::new(Iter::new(std_iter::once(element)))
    }

    pub fn repeat(element: A) -> Self
    where
        A: Clone,
    {
        Self::new(Iter::new(std_iter::repeat(element)))
    }

    pub fn name(&self) -> &'static str {
        self.logic.name()
    }

    pub fn pull(self) -> Result<Pulled<A>> {
        self.logic.pull()
    }

    pub fn close(self) -> Result<()> {
        self.logic.close()
    }

    /// Attach `flow` to the output side of this source.
    pub fn via<B>(self, flow: Flow<A, B>) -> Source<B>
    where
        B: 'static,
    {
        fuse::left(self, flow)
    }

    /// Drive this source into `sink` and return the sink's result.
    ///
    /// A sink that is already `Ready` leaves the source untouched, neither
    /// pulled nor closed. Otherwise the source is driven until either side
    /// ends; a leftover element handed back by the sink is discarded here,
    /// because a plain source cannot be resumed (see
    /// [`BufferedSource`](crate::BufferedSource) for the variant that can).
    pub fn connect<B>(self, sink: Sink<A, B>) -> Result<B>
    where
        B: 'static,
    {
        connect::run(self, sink)
    }

    /// Run `hook` exactly once when this source finishes, is closed, or is
    /// dropped without either.
    pub fn on_close<F>(self, hook: F) -> Source<A>
    where
        F: FnOnce() + 'static,
    {
        Source::new(Guarded::new(self, hook))
    }
}
