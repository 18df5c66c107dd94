use crate::error::Result;
use crate::sink::{Consumer, Pushed};

/// Finishes with the first element, or `None` for an empty stream.
#[derive(Default)]
pub struct First;

impl First {
    pub fn new() -> Self {
        Self
    }
}

impl<A> Consumer<A, Option<A>> for First
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "First"
    }

    fn push(self: Box<Self>, element: A) -> Result<Pushed<A, Option<A>>> {
        Ok(Pushed::Done(None, Some(element)))
    }

    fn close(self: Box<Self>) -> Result<Option<A>> {
        Ok(None)
    }
}
