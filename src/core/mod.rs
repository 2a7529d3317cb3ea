pub mod composer;
pub mod config;
pub mod openai;
pub mod prompts;
pub mod provider;
pub mod requests;

pub use composer::*;
pub use config::*;
pub use openai::*;
pub use prompts::*;
pub use provider::*;
pub use requests::*;
