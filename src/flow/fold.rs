use crate::error::Result;
use crate::flow::{Flow, Step, Transformer};
use crate::source::Source;

/// Folds the entire input stream, emitting nothing until input ends; the
/// final accumulator comes out of the drain. The textbook drain-tail
/// stage: all of its output is post-input.
pub struct Fold<B, F> {
    acc: B,
    fold: F,
}

impl<B, F> Fold<B, F> {
    pub fn new(acc: B, fold: F) -> Self {
        Self { acc, fold }
    }
}

impl<A, B, F> Transformer<A, B> for Fold<B, F>
where
    A: 'static,
    B: 'static,
    F: FnMut(B, A) -> B + 'static,
{
    fn name(&self) -> &'static str {
        "Fold"
    }

    fn push(self: Box<Self>, element: A) -> Result<Step<A, B>> {
        let Fold { acc, mut fold } = *self;
        let acc = fold(acc, element);

        Ok(Step::Running(Flow::new(Fold { acc, fold })))
    }

    fn close(self: Box<Self>) -> Source<B> {
        let Fold { acc, .. } = *self;

        Source::single(acc)
    }
}
