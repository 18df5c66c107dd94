use crate::error::Result;
use crate::sink::{ActiveSink, Consumer, Pushed};

/// Runs a function for every element.
pub struct ForEach<F> {
    for_each: F,
}

impl<F> ForEach<F> {
    pub fn new(for_each: F) -> Self {
        Self { for_each }
    }
}

impl<A, F> Consumer<A, ()> for ForEach<F>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    fn name(&self) -> &'static str {
        "ForEach"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Pushed<A, ()>> {
        (self.for_each)(element);

        Ok(Pushed::Running(ActiveSink { logic: self }))
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
