use crate::error::Result;
use crate::sink::{ActiveSink, Consumer, Pushed};

/// Collects the first `count` elements, finishing as soon as the last one
/// arrives. Constructed with `count >= 1`; `Sink::take` maps zero to a
/// `Ready` sink.
pub struct Take<A> {
    remaining: usize,
    entries: Vec<A>,
}

impl<A> Take<A> {
    pub fn new(count: usize) -> Self {
        Self {
            remaining: count,
            entries: Vec::new(),
        }
    }
}

impl<A> Consumer<A, Vec<A>> for Take<A>
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "Take"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Pushed<A, Vec<A>>> {
        self.entries.push(element);
        self.remaining -= 1;

        if self.remaining == 0 {
            let Take { entries, .. } = *self;

            Ok(Pushed::Done(None, entries))
        } else {
            Ok(Pushed::Running(ActiveSink { logic: self }))
        }
    }

    fn close(self: Box<Self>) -> Result<Vec<A>> {
        Ok(self.entries)
    }
}
