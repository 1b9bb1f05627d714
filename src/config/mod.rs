pub mod run;
pub mod site;

pub use run::{RunConfig, DEBUG_LOG_FILE};
pub use site::{FieldSelectors, SiteConfig};
