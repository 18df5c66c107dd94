use crate::error::Result;
use crate::flow::{Burst, Flow, Step, Transformer};
use crate::source::Source;

/// Converts each element, 1 to 1.
pub struct Map<F> {
    map: F,
}

impl<F> Map<F> {
    pub fn new(map: F) -> Self {
        Self { map }
    }
}

impl<A, B, F> Transformer<A, B> for Map<F>
where
    A: 'static,
    B: 'static,
    F: FnMut(A) -> B + 'static,
{
    fn name(&self) -> &'static str {
        "Map"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Step<A, B>> {
        let element = (self.map)(element);

        Ok(Step::More(Burst::resume(Flow { logic: self }), element))
    }

    fn close(self: Box<Self>) -> Source<B> {
        Source::empty()
    }
}
