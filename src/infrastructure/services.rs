use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Logger writing to the browser console, or to stderr off the browser.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let line = entry.format();

        #[cfg(target_arch = "wasm32")]
        match entry.level {
            LogLevel::Error => gloo::console::error!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Debug | LogLevel::Trace => gloo::console::debug!(line),
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }
}
