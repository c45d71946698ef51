pub mod authors;
pub mod config;
pub mod doctors;
pub mod reviews;

pub use self::config::config;
