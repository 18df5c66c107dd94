use crate::error::Result;
use crate::sink::{Consumer, Pushed};

/// Finishes with the first element and hands it straight back as leftover.
#[derive(Default)]
pub struct Peek;

impl Peek {
    pub fn new() -> Self {
        Self
    }
}

impl<A> Consumer<A, Option<A>> for Peek
where
    A: Clone + 'static,
{
    fn name(&self) -> &'static str {
        "Peek"
    }

    fn push(self: Box<Self>, element: A) -> Result<Pushed<A, Option<A>>> {
        Ok(Pushed::Done(Some(element.clone()), Some(element)))
    }

    fn close(self: Box<Self>) -> Result<Option<A>> {
        Ok(None)
    }
}
