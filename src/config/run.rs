// src/config/run.rs

use std::path::PathBuf;

use crate::rank::SortKey;

/// Where `--debug` writes its log, relative to the working directory.
pub const DEBUG_LOG_FILE: &str = "Rio2016MedalTable.log";

/// Settings for one run, fixed before the pipeline starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sort_by: SortKey,
    pub debug: bool,
    pub log_path: PathBuf,
}

impl RunConfig {
    pub fn new(sort_by: SortKey, debug: bool) -> Self {
        Self {
            sort_by,
            debug,
            log_path: PathBuf::from(DEBUG_LOG_FILE),
        }
    }
}
