pub mod base;
pub mod filter;
pub mod logging;
pub mod output;

pub use base::*;
pub use filter::*;
pub use logging::*;
pub use output::*;
