pub mod catalogs;
pub mod generate;
pub mod init;
pub mod preview;

pub use catalogs::*;
pub use generate::*;
pub use init::*;
pub use preview::*;
