use crate::error::Result;
use crate::source::{Producer, Pulled, Source};
use crate::util::Deferred;

/// Wraps a source so a finalizer hook runs exactly once, whether the source
/// finishes, is closed, or is abandoned. The hook rides along as a
/// [`Deferred`], so dropping the wrapper without closing it still fires it.
pub struct Guarded<A> {
    inner: Source<A>,
    hook: Deferred,
}

impl<A> Guarded<A> {
    pub fn new<F>(inner: Source<A>, hook: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            inner,
            hook: Deferred::new(hook),
        }
    }
}

impl<A> Producer<A> for Guarded<A>
where
    A: 'static,
{
    fn name(&self) -> &'static str {
        "Guarded"
    }

    fn pull(self: Box<Self>) -> Result<Pulled<A>> {
        let Guarded { inner, hook } = *self;

        match inner.pull()? {
            Pulled::Open(next, element) => Ok(Pulled::Open(
                Source::new(Guarded { inner: next, hook }),
                element,
            )),

            Pulled::Closed => {
                hook.fire();

                Ok(Pulled::Closed)
            }
        }
    }

    fn close(self: Box<Self>) -> Result<()> {
        let Guarded { inner, hook } = *self;

        inner.close()?;
        hook.fire();

        Ok(())
    }
}
