pub mod config_loader;
pub mod format;
pub mod logging;

pub use config_loader::{AppConfig, ConfigManager};
pub use format::{format_growth, group_thousands, wrap};
pub use logging::init_logging;
