//! A resumable wrapper over a source.

use std::cell::RefCell;
use std::rc::Rc;

use crate::connect;
use crate::error::Result;
use crate::flow::Flow;
use crate::fuse;
use crate::sink::Sink;
use crate::source::{Producer, Pulled, Source};

/// State of the buffer cell.
enum State<A> {
    /// Underlying source live, no pushed-back element.
    Open(Source<A>),
    /// Underlying source live, one element pending.
    OpenWith(Source<A>, A),
    /// Underlying source closed or exhausted, nothing pending.
    Closed,
    /// Underlying source closed, one element still pending.
    ClosedWith(A),
    /// Transient marker while an operation owns the source.
    Busy,
}

/// The cell itself, shared between a [`BufferedSource`] and any fused
/// sources built over it.
pub(crate) struct Shared<A> {
    state: Rc<RefCell<State<A>>>,
}

impl<A> Clone for Shared<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<A> Shared<A>
where
    A: 'static,
{
    fn replace(&self, next: State<A>) -> State<A> {
        self.state.replace(next)
    }

    fn is_open(&self) -> bool {
        matches!(*self.state.borrow(), State::Open(_) | State::OpenWith(..))
    }

    pub(crate) fn pull(&self) -> Result<Option<A>> {
        match self.replace(State::Busy) {
            State::Open(source) => match source.pull() {
                Ok(Pulled::Open(next, element)) => {
                    self.replace(State::Open(next));

                    Ok(Some(element))
                }

                Ok(Pulled::Closed) => {
                    self.replace(State::Closed);

                    Ok(None)
                }

                // The failed pull consumed the source; nothing is left to
                // resume.
                Err(error) => {
                    self.replace(State::Closed);

                    Err(error)
                }
            },

            State::OpenWith(source, element) => {
                self.replace(State::Open(source));

                Ok(Some(element))
            }

            State::Closed => {
                self.replace(State::Closed);

                Ok(None)
            }

            State::ClosedWith(element) => {
                self.replace(State::Closed);

                Ok(Some(element))
            }

            State::Busy => panic!("buffered source used reentrantly"),
        }
    }

    pub(crate) fn unpull(&self, element: Option<A>) {
        let element = match element {
            Some(element) => element,
            None => return,
        };

        match self.replace(State::Busy) {
            State::Open(source) => {
                self.replace(State::OpenWith(source, element));
            }

            State::Closed => {
                self.replace(State::ClosedWith(element));
            }

            State::OpenWith(..) | State::ClosedWith(..) => {
                panic!("unpull onto a buffered source that already holds an element");
            }

            State::Busy => panic!("buffered source used reentrantly"),
        }
    }

    pub(crate) fn close(&self) -> Result<()> {
        match self.replace(State::Busy) {
            State::Open(source) => {
                self.replace(State::Closed);

                source.close()
            }

            State::OpenWith(source, element) => {
                debug!("closing a buffered source with a pending element; the element stays pullable");

                self.replace(State::ClosedWith(element));

                source.close()
            }

            State::Closed => {
                self.replace(State::Closed);

                Ok(())
            }

            State::ClosedWith(element) => {
                self.replace(State::ClosedWith(element));

                Ok(())
            }

            State::Busy => panic!("buffered source used reentrantly"),
        }
    }
}

/// A source made resumable: it survives any number of connects and holds a
/// one-slot pushback for the leftover a sink hands back.
///
/// Plain sources are consumed by a single connect, which closes them when
/// the sink finishes early and discards their leftover. Wrapping the
/// source buffers that boundary instead: the next connect (or a plain
/// [`pull`](BufferedSource::pull)) picks up exactly where the previous
/// one stopped. The price is that finalization becomes the owner's job;
/// nothing here closes the underlying source until
/// [`close`](BufferedSource::close) is called, though dropping the wrapper
/// closes it as a safety net.
///
/// ```
/// use millrace::{BufferedSource, Sink, Source};
///
/// # fn main() -> millrace::Result<()> {
/// let mut letters = BufferedSource::new(Source::iterator("abc".chars()));
///
/// assert_eq!(letters.connect(Sink::take(2))?, vec!['a', 'b']);
/// assert_eq!(letters.pull()?, Some('c'));
///
/// letters.close()?;
/// # Ok(())
/// # }
/// ```
///
/// The cell is single-threaded by construction; sharing one across threads
/// is unrepresentable.
pub struct BufferedSource<A>
where
    A: 'static,
{
    cell: Shared<A>,
}

impl<A> BufferedSource<A>
where
    A: 'static,
{
    pub fn new(source: Source<A>) -> Self {
        Self {
            cell: Shared {
                state: Rc::new(RefCell::new(State::Open(source))),
            },
        }
    }

    /// Next element, or `None` once the stream has ended. A pushed-back
    /// element is returned before the underlying source is pulled again.
    pub fn pull(&mut self) -> Result<Option<A>> {
        self.cell.pull()
    }

    /// Push one element back; the next pull returns it. At most one element
    /// fits: unpulling onto an occupied slot is a programmer error and
    /// panics.
    pub fn unpull(&mut self, element: Option<A>) {
        self.cell.unpull(element)
    }

    /// Close the underlying source. Idempotent; a pending pushed-back
    /// element stays pullable.
    pub fn close(&mut self) -> Result<()> {
        self.cell.close()
    }

    /// Drive this buffered source into `sink`. The underlying source is
    /// never closed here and a leftover from the sink is pushed back, so
    /// further connects resume where this one stopped.
    pub fn connect<B>(&mut self, sink: Sink<A, B>) -> Result<B>
    where
        B: 'static,
    {
        connect::run_buffered(&self.cell, sink)
    }

    /// Attach `flow` to the output side of this buffered source. The fused
    /// source shares this buffer: a flow that terminates early puts its
    /// leftover back, and closing the fused source is a no-op because this
    /// handle keeps ownership of finalization.
    pub fn via<B>(&mut self, flow: Flow<A, B>) -> Source<B>
    where
        B: 'static,
    {
        fuse::left_buffered(self.cell.clone(), flow)
    }

    /// Convert back into a plain source, replaying a pending element before
    /// continuing with the underlying source. Destructive: the buffer is
    /// read once and left closed-and-empty; finalization travels with the
    /// returned source.
    pub fn into_source(self) -> Source<A> {
        match self.cell.replace(State::Closed) {
            State::Open(source) => source,

            State::OpenWith(source, element) => Source::new(Replay {
                element,
                rest: source,
            }),

            State::Closed => Source::empty(),

            State::ClosedWith(element) => Source::single(element),

            State::Busy => panic!("buffered source used reentrantly"),
        }
    }
}

impl<A> Drop for BufferedSource<A>
where
    A: 'static,
{
    fn drop(&mut self) {
        if self.cell.is_open() {
            warn!("buffered source dropped while open; closing the underlying source");

            if let Err(error) = self.cell.close() {
                warn!("buffered source close failed during drop: {}", error);
            }
        }
    }
}

/// Replays the pushed-back element before continuing with the source.
struct Replay<A> {
    element: A,
    rest: Source<A>,
}

impl<A> Producer<A> for Replay<A>
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "Replay"
    }

    fn pull(self: Box<Self>) -> Result<Pulled<A>> {
        let Replay { element, rest } = *self;

        Ok(Pulled::Open(rest, element))
    }

    fn close(self: Box<Self>) -> Result<()> {
        let Replay { rest, .. } = *self;

        rest.close()
    }
}
