pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod present;
pub mod rank;

pub use error::MedalError;
pub use pipeline::Pipeline;
