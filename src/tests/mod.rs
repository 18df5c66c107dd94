//! End-to-end tests for the pipeline core.

mod buffered;
mod connect;
mod flow;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

use crate::error::Result;
use crate::source::{Producer, Pulled, Source};

static LOGGER: Once = Once::new();

/// Install a stderr logger once, so a failing test can be debugged by
/// bumping the level here.
pub(crate) fn init_logging() {
    LOGGER.call_once(|| {
        let installed = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {} [{}] {}",
                    chrono::Local::now().to_rfc3339(),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(std::io::stderr())
            .apply();

        if installed.is_err() {
            eprintln!("logger already installed");
        }
    });
}

/// Counters exposed by [`counted`]: how often the source was pulled and how
/// often it was explicitly closed.
pub(crate) struct Counters {
    pulls: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
}

impl Counters {
    pub(crate) fn pulls(&self) -> usize {
        self.pulls.get()
    }

    pub(crate) fn closes(&self) -> usize {
        self.closes.get()
    }
}

/// A source over `iterator` that records pulls and explicit closes. A
/// source that runs dry finalizes by returning `Closed`; that path counts
/// as a pull, not a close.
pub(crate) fn counted<A, I>(iterator: I) -> (Source<A>, Counters)
where
    A: 'static,
    I: Iterator<Item = A> + 'static,
{
    let counters = Counters {
        pulls: Rc::new(Cell::new(0)),
        closes: Rc::new(Cell::new(0)),
    };

    let source = Source::new(Counted {
        iterator,
        pulls: counters.pulls.clone(),
        closes: counters.closes.clone(),
    });

    (source, counters)
}

struct Counted<I> {
    iterator: I,
    pulls: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
}

impl<A, I> Producer<A> for Counted<I>
where
    A: 'static,
    I: Iterator<Item = A> + 'static,
{
    fn name(&self) -> &'static str {
        "Counted"
    }

    fn pull(mut self: Box<Self>) -> Result<Pulled<A>> {
        self.pulls.set(self.pulls.get() + 1);

        match self.iterator.next() {
            Some(element) => Ok(Pulled::Open(Source::new(*self), element)),

            None => Ok(Pulled::Closed),
        }
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.closes.set(self.closes.get() + 1);

        Ok(())
    }
}
