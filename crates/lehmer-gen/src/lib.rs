//! Lehmer (linear congruential) sequence generator.
//!
//! Produces the sequence `X(n+1) = (A * X(n) + C) mod M` from a seed `X0` and
//! reports the first repeated value it encounters. The crate provides:
//! - [`LehmerParams`], the serializable parameter set.
//! - [`LehmerGenerator`], which validates parameters once and generates
//!   bounded sequences or an unbounded iterator.
//! - [`LehmerSequence`] and [`Period`], the generation result.
//!
//! Generation is synchronous. An optional progress sink is invoked in order on
//! the calling thread.
//!
//! ```
//! use lehmer_gen::{LehmerGenerator, LehmerParams};
//!
//! let params = LehmerParams { a: 5, c: 1, m: 16, x0: 3, count: 20 };
//! let sequence = LehmerGenerator::new(params)?.generate();
//! assert_eq!(sequence.len(), 20);
//! assert_eq!(sequence.period(), Some(16));
//! # Ok::<(), lehmer_gen::LehmerError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod generator;
mod sequence;

pub use crate::error::{LehmerError, Result};
pub use crate::generator::{LehmerGenerator, LehmerParams, Values};
pub use crate::sequence::{LehmerSequence, Period};
