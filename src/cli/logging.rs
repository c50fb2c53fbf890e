//! Output gating for CLI commands

/// How much a command prints
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Results only, no headers or diagnostics
    Quiet,
    /// Headers and results
    Normal,
    /// Normal plus the resolved counts behind each evaluation
    Verbose,
}

impl LogLevel {
    /// Whether a message at `required` level should print under `self`.
    pub fn permits(self, required: LogLevel) -> bool {
        match self {
            LogLevel::Quiet => false,
            LogLevel::Normal => required == LogLevel::Normal,
            LogLevel::Verbose => true,
        }
    }
}

/// Print a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        println!("{msg}");
    }
}
