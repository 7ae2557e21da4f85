//! Rendering abstraction
//!
//! Drawing is left to an external collaborator; the dashboard only hands it
//! finished frames.

use crate::model::DashboardFrame;

/// Trait for renderers
pub trait Renderer {
    /// Draw a complete frame
    fn render(&mut self, frame: &DashboardFrame);
}

/// Renderer that keeps every frame it receives
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<DashboardFrame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[DashboardFrame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&DashboardFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &DashboardFrame) {
        self.frames.push(frame.clone());
    }
}
