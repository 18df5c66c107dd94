use crate::error::Result;
use crate::sink::{ActiveSink, Consumer, Pushed};

/// Discards every element.
#[derive(Default)]
pub struct Ignore;

impl Ignore {
    pub fn new() -> Self {
        Self
    }
}

impl<A> Consumer<A, ()> for Ignore
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "Ignore"
    }

    fn push(self: Box<Self>, _element: A) -> Result<Pushed<A, ()>> {
        Ok(Pushed::Running(ActiveSink { logic: self }))
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
