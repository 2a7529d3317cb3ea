pub mod catalog;
pub mod config;
pub mod request;

pub use catalog::*;
pub use config::*;
pub use request::*;
