use crate::error::Result;
use crate::flow::{Burst, Flow, Step, Transformer};
use crate::source::Source;

/// Passes through the elements satisfying a predicate.
pub struct Filter<F> {
    filter: F,
}

impl<F> Filter<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<A, F> Transformer<A, A> for Filter<F>
where
    A: 'static,
    F: FnMut(&A) -> bool + 'static,
{
    fn name(&self) -> &'static str {
        "Filter"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Step<A, A>> {
        if (self.filter)(&element) {
            Ok(Step::More(Burst::resume(Flow { logic: self }), element))
        } else {
            Ok(Step::Running(Flow { logic: self }))
        }
    }

    fn close(self: Box<Self>) -> Source<A> {
        Source::empty()
    }
}
