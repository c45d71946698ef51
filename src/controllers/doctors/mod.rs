pub mod doctors;

pub use self::doctors::*;
