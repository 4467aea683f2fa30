use std::fmt;

use log::Level;

/// Logging seam handed to the hub at construction.
///
/// The hub never writes to a process-wide logger directly; tests inject a
/// recording implementation and the server uses [`FacadeLogger`].
pub trait HubLogger: Send + Sync {
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, message);
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message);
    }
}

/// Forwards to the `log` facade under a fixed target.
#[derive(Debug, Clone)]
pub struct FacadeLogger {
    target: &'static str,
}

impl FacadeLogger {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for FacadeLogger {
    fn default() -> Self {
        Self::new("ogf_realtime::hub")
    }
}

impl HubLogger for FacadeLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(target: self.target, level, "{}", message);
    }
}
