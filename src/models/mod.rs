pub mod doctors;
pub mod reviews;
pub mod stats;

pub use self::doctors::*;
pub use self::reviews::*;
pub use self::stats::*;
