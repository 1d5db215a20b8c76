//! Lock-free SPMC ring fabric
//!
//! One [`Ring`] per producer; a [`Writer`] owns the ring's write cursor, a
//! [`Reader`] owns a consumer's read cursor into one ring, and a
//! [`MultiReader`] fans a single consumer in across every producer's ring.
//!
//! ## Slot-state protocol
//!
//! Each slot is a single `u64` that encodes both occupancy and generation
//! (lap). For a logical position `p` with lap `L(p) = p >> (capacity_bits - 1)`:
//!
//! - `E(p) = L(p) & !1` — expected-empty: the writer's target value.
//! - `F(p) = L(p) | 1` — expected-full: the reader's target value.
//! - `F(p) + 1 == E(p + N)` — a claimed slot is simultaneously "empty for
//!   the next generation".
//!
//! A writer release-stores `E(p)+1` to publish; a reader acquire-CAS from
//! `F(p)` to `F(p)+1` to claim. No other transition is permitted; observing
//! anything else is a protocol violation (see [`crate::error`]).
//!
//! ## Index permutation
//!
//! Eight logically-consecutive positions would otherwise share a 64-byte
//! cache line. `idx` splits the low `capacity_bits` bits of `p` into a low
//! field (width [`crate::constants::CACHE_LINE_BITS`]) and a high field, and
//! swaps them, so consecutive writes land on distinct lines.

mod multi_reader;
mod reader;
mod ring;
mod writer;

pub use multi_reader::MultiReader;
pub use reader::{Reader, NOTHING_TO_READ};
pub use ring::Ring;
pub use writer::Writer;
