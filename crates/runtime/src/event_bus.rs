use crate::frame::Frame;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Operator-facing diagnostic.
///
/// Non-fatal conditions (degenerate layout spacing, empty datasets) end up
/// here; the app decides how to surface them. Structured text for now; can
/// become a stable event enum if consumers need to match on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub frame_index: u64,
    pub severity: Severity,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Diagnostic>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(
        &mut self,
        frame: Frame,
        severity: Severity,
        kind: &'static str,
        message: impl Into<String>,
    ) {
        self.events.push(Diagnostic {
            frame_index: frame.index,
            severity,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.events)
    }
}
