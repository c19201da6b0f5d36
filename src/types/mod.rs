//! Data types for span computation.

mod column;
mod row;
mod span;
mod value;

pub use column::*;
pub use row::*;
pub use span::*;
pub use value::*;
