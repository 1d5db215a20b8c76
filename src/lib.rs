//! flux-bench — lock-free SPMC ring fabric benchmark
//!
//! A multi-producer / multi-consumer message-passing benchmark built on an
//! array of single-producer / multi-consumer (SPMC) bounded ring buffers:
//! one ring per producer, fanned in by a rotating [`disruptor::MultiReader`]
//! per consumer. See `SPEC_FULL.md` for the full design.

pub mod constants;
pub mod cpu;
pub mod disruptor;
pub mod error;
pub mod run;

pub use disruptor::{MultiReader, Reader, Ring, Writer};
pub use error::{BenchError, Result};
pub use run::{run, RunConfig, RunOutcome};
