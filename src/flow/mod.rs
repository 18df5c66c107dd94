//! Push-driven transforming stages.

mod filter;
mod filter_map;
mod flush;
mod fold;
mod identity;
mod map;
mod map_concat;
mod take_while;

pub use self::filter::Filter;
pub use self::filter_map::FilterMap;
pub use self::flush::Flush;
pub use self::fold::Fold;
pub use self::identity::Identity;
pub use self::map::Map;
pub use self::map_concat::MapConcat;
pub use self::take_while::TakeWhile;

use crate::error::Result;
use crate::fuse;
use crate::sink::Sink;
use crate::source::Source;

/// Result of pushing one element into a flow.
pub enum Step<A, B> {
    /// Ready for the next input element.
    Running(Flow<A, B>),
    /// The flow emitted an element; more may follow without further input.
    /// The burst must be drained (or closed) before the flow sees another
    /// input element.
    More(Burst<A, B>, B),
    /// The flow terminated, possibly handing back one element it did not
    /// consume. No finalizer has run; whoever drove the flow decides.
    Finished(Option<A>),
}

/// Contract implemented by push-driven transforming stages.
pub trait Transformer<A, B> {
    /// Diagnostic name used in log output.
    fn name(&self) -> &'static str {
        "anonymous"
    }

    /// Feed one element.
    fn push(self: Box<Self>, element: A) -> Result<Step<A, B>>;

    /// Stop feeding input. The drain is itself a source: a flow may still
    /// emit a tail of output after input ends, and that tail composes
    /// through every fuse like any other source.
    fn close(self: Box<Self>) -> Source<B>;
}

/// Contract for the continuation of an output burst: the rest of the
/// outputs one input element gave rise to, emitted without consuming
/// further input.
pub trait Emitter<A, B> {
    /// Diagnostic name used in log output.
    fn name(&self) -> &'static str {
        "anonymous"
    }

    /// Request the next step of the burst.
    fn pull(self: Box<Self>) -> Result<Step<A, B>>;

    /// Abandon the burst, finalizing the flow.
    fn close(self: Box<Self>) -> Result<()>;
}

/// A push-driven stage transforming a stream of `A` into a stream of `B`.
pub struct Flow<A, B> {
    pub(in crate::flow) logic: Box<dyn Transformer<A, B>>,
}

impl<A, B> Flow<A, B>
where
    A: 'static,
    B: 'static,
{
    pub fn new<T>(logic: T) -> Self
    where
        T: Transformer<A, B> + 'static,
    {
        Self {
            logic: Box::new(logic),
        }
    }

    /// Converts each element with `map`, 1 to 1.
    pub fn map<F>(map: F) -> Self
    where
        F: FnMut(A) -> B + 'static,
    {
        Flow::new(Map::new(map))
    }

    /// Converts each element, dropping those mapped to `None`.
    pub fn filter_map<F>(filter_map: F) -> Self
    where
        F: FnMut(A) -> Option<B> + 'static,
    {
        Flow::new(FilterMap::new(filter_map))
    }

    /// Expands each element into a burst of outputs.
    pub fn map_concat<I, F>(map_concat: F) -> Self
    where
        I: Iterator<Item = B> + 'static,
        F: FnMut(A) -> I + 'static,
    {
        Flow::new(MapConcat::new(map_concat))
    }

    /// Folds the entire input, emitting the final accumulator from the
    /// drain once input ends.
    pub fn fold<F>(init: B, fold: F) -> Self
    where
        F: FnMut(B, A) -> B + 'static,
    {
        Flow::new(Fold::new(init, fold))
    }

    pub fn name(&self) -> &'static str {
        self.logic.name()
    }

    pub fn push(self, element: A) -> Result<Step<A, B>> {
        self.logic.push(element)
    }

    pub fn close(self) -> Source<B> {
        self.logic.close()
    }

    /// Compose with a second flow.
    pub fn via<C>(self, next: Flow<B, C>) -> Flow<A, C>
    where
        C: 'static,
    {
        fuse::mid(self, next)
    }

    /// Attach this flow to the input side of `sink`.
    pub fn to<C>(self, sink: Sink<B, C>) -> Sink<A, C>
    where
        C: 'static,
    {
        fuse::right(self, sink)
    }
}

impl<A> Flow<A, A>
where
    A: 'static,
{
    /// Passes elements through unchanged.
    pub fn identity() -> Self {
        Flow::new(Identity)
    }

    /// Passes through the elements satisfying `filter`.
    pub fn filter<F>(filter: F) -> Self
    where
        F: FnMut(&A) -> bool + 'static,
    {
        Flow::new(Filter::new(filter))
    }

    /// Passes elements through while `take_while` holds, then terminates
    /// handing the failing element back as leftover.
    pub fn take_while<F>(take_while: F) -> Self
    where
        F: FnMut(&A) -> bool + 'static,
    {
        Flow::new(TakeWhile::new(take_while))
    }
}

/// A burst in progress.
pub struct Burst<A, B> {
    logic: Box<dyn Emitter<A, B>>,
}

impl<A, B> Burst<A, B>
where
    A: 'static,
    B: 'static,
{
    pub fn new<E>(logic: E) -> Self
    where
        E: Emitter<A, B> + 'static,
    {
        Self {
            logic: Box::new(logic),
        }
    }

    /// A burst with nothing further to emit that resumes the given flow.
    /// The common case for 1-to-1 stages: emit one element, go back to
    /// accepting input.
    pub fn resume(next: Flow<A, B>) -> Self {
        Burst::new(Resume { next })
    }

    pub fn name(&self) -> &'static str {
        self.logic.name()
    }

    pub fn pull(self) -> Result<Step<A, B>> {
        self.logic.pull()
    }

    pub fn close(self) -> Result<()> {
        self.logic.close()
    }
}

struct Resume<A, B> {
    next: Flow<A, B>,
}

impl<A, B> Emitter<A, B> for Resume<A, B>
where
    A: 'static,
    B: 'static,
{
    fn name(&self) -> &'static str {
        "Resume"
    }

    fn pull(self: Box<Self>) -> Result<Step<A, B>> {
        Ok(Step::Running(self.next))
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
