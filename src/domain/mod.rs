//! Typed rows of the externally owned F1 schema.
//!
//! Each entity holds the columns the service relies on. Whatever else the
//! store returns for a row lands in `extra` and is serialized alongside the
//! typed fields under its own column name.

mod circuit;
mod constructor;
mod driver;
mod race;

pub use circuit::Circuit;
pub use constructor::Constructor;
pub use driver::Driver;
pub use race::Race;
