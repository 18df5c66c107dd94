use crate::error::Result;
use crate::flow::{Burst, Flow, Step, Transformer};
use crate::source::Source;

/// Passes elements through unchanged.
#[derive(Default)]
pub struct Identity;

impl<A> Transformer<A, A> for Identity
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "Identity"
    }

    fn push(self: Box<Self>, element: A) -> Result<Step<A, A>> {
        Ok(Step::More(Burst::resume(Flow { logic: self }), element))
    }

    fn close(self: Box<Self>) -> Source<A> {
        Source::empty()
    }
}
