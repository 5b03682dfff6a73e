//! Document loading: normalizes heterogeneous input (URL, raw text,
//! in-memory value) into a single parsed document.

mod load;
mod source;

pub use load::*;
pub use source::*;
