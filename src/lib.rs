//! # Millrace
//!
//! Millrace is a sequential streaming core: pull-driven [`Source`]s,
//! push-driven [`Sink`]s and [`Flow`]s, fuse operators that compose them
//! without running anything, and a [`BufferedSource`] that makes a source
//! resumable across connects.
//!
//! Every stage is a one-shot value: pulling or pushing consumes it and
//! returns the continuation as a fresh value, so re-using a finished stage
//! is a compile error rather than a runtime surprise. Pipelines only run
//! when a source is connected to a sink:
//!
//! ```
//! use millrace::{Flow, Sink, Source};
//!
//! # fn main() -> millrace::Result<()> {
//! let total = Source::iterator(0..10)
//!     .via(Flow::map(|n| n * 2))
//!     .connect(Sink::fold(0, |total, n| total + n))?;
//!
//! assert_eq!(total, 90);
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;

pub mod buffered;
pub mod error;
pub mod flow;
pub mod sink;
pub mod source;
pub mod util;

mod connect;
mod fuse;

#[cfg(test)]
mod tests;

pub use buffered::BufferedSource;
pub use error::{Error, Result};
pub use flow::{Burst, Emitter, Flow, Flush, Step, Transformer};
pub use sink::{ActiveSink, Consumer, Pushed, Sink};
pub use source::{Producer, Pulled, Source};
