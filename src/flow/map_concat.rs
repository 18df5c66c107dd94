use crate::error::Result;
use crate::flow::{Burst, Emitter, Flow, Step, Transformer};
use crate::source::Source;

/// Expands each element into a burst of outputs.
pub struct MapConcat<F> {
    map_concat: F,
}

impl<F> MapConcat<F> {
    pub fn new(map_concat: F) -> Self {
        Self { map_concat }
    }
}

impl<A, B, I, F> Transformer<A, B> for MapConcat<F>
where
    A: 'static,
    B: 'static,
    I: Iterator<Item = B> + 'static,
    F: FnMut(A) -> I + 'static,
{
    fn name(&self) -> &'static str {
        "MapConcat"
    }

    fn push(self: Box<Self>, element: A) -> Result<Step<A, B>> {
        let MapConcat { mut map_concat } = *self;
        let mut entries = map_concat(element);

        match entries.next() {
            Some(first) => Ok(Step::More(
                Burst::new(Entries {
                    entries,
                    map_concat,
                }),
                first,
            )),

            None => Ok(Step::Running(Flow::new(MapConcat { map_concat }))),
        }
    }

    fn close(self: Box<Self>) -> Source<B> {
        Source::empty()
    }
}

/// Burst state: the rest of the expansion of one input element.
struct Entries<I, F> {
    entries: I,
    map_concat: F,
}

impl<A, B, I, F> Emitter<A, B> for Entries<I, F>
where
    A: 'static,
    B: 'static,
    I: Iterator<Item = B> + 'static,
    F: FnMut(A) -> I + 'static,
{
    fn name(&self) -> &'static str {
        "MapConcat"
    }

    fn pull(mut self: Box<Self>) -> Result<Step<A, B>> {
        match self.entries.next() {
            Some(element) => Ok(Step::More(Burst { logic: self }, element)),

            None => {
                let Entries { map_concat, .. } = *self;

                Ok(Step::Running(Flow::new(MapConcat { map_concat })))
            }
        }
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
