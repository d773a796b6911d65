use crate::logging::{self, Target};

#[uniffi::export]
pub fn set_debug_log_level() {
    logging::init_logger(log::LevelFilter::Trace, Target::Stdout);
}

#[uniffi::export]
pub fn set_log_level(level: &str) -> bool {
    logging::set_log_level(level, Target::Stdout)
}
