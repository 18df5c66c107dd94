use crate::error::Result;
use crate::flow::{Burst, Flow, Step, Transformer};
use crate::source::Source;

/// Converts each element, dropping those mapped to `None`.
pub struct FilterMap<F> {
    filter_map: F,
}

impl<F> FilterMap<F> {
    pub fn new(filter_map: F) -> Self {
        Self { filter_map }
    }
}

impl<A, B, F> Transformer<A, B> for FilterMap<F>
where
    A: 'static,
    B: 'static,
    F: FnMut(A) -> Option<B> + 'static,
{
    fn name(&self) -> &'static str {
        "FilterMap"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Step<A, B>> {
        match (self.filter_map)(element) {
            Some(element) => Ok(Step::More(Burst::resume(Flow { logic: self }), element)),

            None => Ok(Step::Running(Flow { logic: self })),
        }
    }

    fn close(self: Box<Self>) -> Source<B> {
        Source::empty()
    }
}
