//! Review query engine and doctor catalog queries: pure functions over a
//! caller-owned snapshot. Nothing here touches storage or mutates its input.

pub mod doctors;
pub mod engine;
pub mod sort;
pub mod stats;

pub use self::doctors::*;
pub use self::engine::*;
pub use self::sort::*;
pub use self::stats::*;
