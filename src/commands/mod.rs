pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, run_analysis, AnalyzeConfig};
pub use init::init_config;
