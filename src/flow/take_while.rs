use crate::error::Result;
use crate::flow::{Burst, Flow, Step, Transformer};
use crate::source::Source;

/// Passes elements through while a predicate holds, then terminates. The
/// element that failed the predicate was not consumed and comes back as
/// leftover.
pub struct TakeWhile<F> {
    take_while: F,
}

impl<F> TakeWhile<F> {
    pub fn new(take_while: F) -> Self {
        Self { take_while }
    }
}

impl<A, F> Transformer<A, A> for TakeWhile<F>
where
    A: 'static,
    F: FnMut(&A) -> bool + 'static,
{
    fn name(&self) -> &'static str {
        "TakeWhile"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Step<A, A>> {
        if (self.take_while)(&element) {
            Ok(Step::More(Burst::resume(Flow { logic: self }), element))
        } else {
            Ok(Step::Finished(Some(element)))
        }
    }

    fn close(self: Box<Self>) -> Source<A> {
        Source::empty()
    }
}
