pub mod error;
pub mod memory;
pub mod reviews;
pub mod store;

pub use self::error::*;
pub use self::memory::*;
pub use self::reviews::*;
pub use self::store::*;
