use crate::error::Result;
use crate::sink::{ActiveSink, Consumer, Pushed};

/// Folds every element into an accumulator.
pub struct Fold<B, F> {
    acc: B,
    fold: F,
}

impl<B, F> Fold<B, F> {
    pub fn new(acc: B, fold: F) -> Self {
        Self { acc, fold }
    }
}

impl<A, B, F> Consumer<A, B> for Fold<B, F>
where
    A: 'static,
    B: 'static,
    F: FnMut(B, A) -> B + 'static,
{
    fn name(&self) -> &'static str {
        "Fold"
    }

    fn push(self: Box<Self>, element: A) -> Result<Pushed<A, B>> {
        let Fold { acc, mut fold } = *self;
        let acc = fold(acc, element);

        Ok(Pushed::Running(ActiveSink::new(Fold { acc, fold })))
    }

    fn close(self: Box<Self>) -> Result<B> {
        Ok(self.acc)
    }
}
