use std::sync::Mutex;

use crate::app::ports::RenderLog;

/// Forwards render progress to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl RenderLog for LogCrateSink {
    fn add_log(&self, message: &str) {
        log::info!("{}", message.trim_start());
    }
}

/// Keeps every message, in order, for callers that report the log afterwards.
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl RenderLog for MemoryLog {
    fn add_log(&self, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod memory_log {
        use super::*;

        #[test]
        fn keeps_messages_in_order() {
            let log = MemoryLog::new();
            log.add_log("first");
            log.add_log("  second");

            assert_eq!(log.messages(), vec!["first", "  second"]);
        }

        #[test]
        fn starts_empty() {
            assert!(MemoryLog::new().messages().is_empty());
        }
    }

    mod log_crate_sink {
        use super::*;

        #[test]
        fn accepts_messages_without_logger_installed() {
            LogCrateSink.add_log("  Writing setter/getter for column \"id\"");
        }
    }
}
