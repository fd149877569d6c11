//! Diagnostics sinks for the per-frame status line.
//!
//! The engine produces a status string (FPS, camera mode, pose,
//! sensitivity); where it lands is the host's choice. The console sink
//! routes through the `log` facade; the title sink formats a window
//! title for the host to apply.

/// Somewhere a status line can go.
pub trait Diagnostics {
    /// Emit a status line.
    fn print(&mut self, text: &str);
    /// Clear any previous output.
    fn clear(&mut self);
}

/// Routes status lines to the `log` facade at debug level.
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn print(&mut self, text: &str) {
        log::debug!("{text}");
    }

    fn clear(&mut self) {}
}

/// Formats status lines into a window title.
///
/// The sink never touches the window itself; the host reads
/// [`current`](Self::current) after each print and applies it.
#[derive(Debug, Clone)]
pub struct TitleDiagnostics {
    original: String,
    current: String,
}

impl TitleDiagnostics {
    /// Create a sink that restores `original` on clear.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            current: original.clone(),
            original,
        }
    }

    /// The title the host should currently display.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }
}

impl Diagnostics for TitleDiagnostics {
    fn print(&mut self, text: &str) {
        self.current = format!("{} | {}", self.original, text);
    }

    fn clear(&mut self) {
        self.current.clone_from(&self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prepends_the_original() {
        let mut diag = TitleDiagnostics::new("Tankyard");
        diag.print("62 fps");
        assert_eq!(diag.current(), "Tankyard | 62 fps");
    }

    #[test]
    fn clear_restores_the_original_title() {
        let mut diag = TitleDiagnostics::new("Tankyard");
        diag.print("62 fps");
        diag.clear();
        assert_eq!(diag.current(), "Tankyard");
    }
}
