//! Shellsort over `2^p * 3^q` gaps, for a contiguous buffer and for a
//! singly linked chain, with identical comparison counts for both.

pub mod buffer;
pub mod chain;
pub mod cli;
mod error;
pub mod io;
pub mod sequence;

pub use chain::{Chain, NodeId};
pub use cli::{ALL_MODES, Invocation, Mode, Report};
pub use error::{Error, Result};
pub use sequence::{FALLBACK_GAPS, gap_sequence};
