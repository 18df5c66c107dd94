use crate::error::Result;
use crate::sink::{ActiveSink, Consumer, Pushed};

/// Collects every element into a `Vec`.
#[derive(Default)]
pub struct Collect<A> {
    entries: Vec<A>,
}

impl<A> Collect<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A> Consumer<A, Vec<A>> for Collect<A>
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "Collect"
    }

    fn push(mut self: Box<Self>, element: A) -> Result<Pushed<A, Vec<A>>> {
        self.entries.push(element);

        Ok(Pushed::Running(ActiveSink { logic: self }))
    }

    fn close(self: Box<Self>) -> Result<Vec<A>> {
        Ok(self.entries)
    }
}
