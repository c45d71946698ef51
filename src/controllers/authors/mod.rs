pub mod authors;

pub use self::authors::*;
