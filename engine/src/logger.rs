use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Messages logged before `init_logger` are dropped, so the engine stays
/// quiet when embedded without a logger.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::is_initialized() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}
