use crate::error::Result;
use crate::source::{Producer, Pulled, Source};

/// Source over any iterator.
pub struct Iter<I> {
    iterator: I,
}

impl<I> Iter<I> {
    pub fn new(iterator: I) -> Self {
        Self { iterator }
    }
}

impl<A, I> Producer<A> for Iter<I>
where
    A: 'static,
    I: Iterator<Item = A> + 'static,
{
    fn name(&self) -> &'static str {
        "Iter"
    }

    fn pull(mut self: Box<Self>) -> Result<Pulled<A>> {
        match self.iterator.next() {
            Some(element) => Ok(Pulled::Open(Source { logic: self }, element)),

            None => Ok(Pulled::Closed),
        }
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
