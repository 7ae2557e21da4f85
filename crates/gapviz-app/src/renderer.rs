//! JSON lines renderer

use std::io::{self, Write};

use gapviz_views::{DashboardFrame, Renderer};

/// Writes each frame as one JSON document
///
/// Rendering cannot fail from the coordinator's point of view, so the first
/// write error is kept and later frames are dropped. [`finish`] reports it.
///
/// [`finish`]: JsonLinesRenderer::finish
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    pretty: bool,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            frames: 0,
            error: None,
        }
    }

    /// Number of frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn write_frame(&mut self, frame: &DashboardFrame) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, frame)?;
        } else {
            serde_json::to_writer(&mut self.writer, frame)?;
        }
        self.writer.write_all(b"\n")
    }

    /// Flush and hand back the writer, or the first error seen
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &DashboardFrame) {
        if self.error.is_some() {
            return;
        }
        match self.write_frame(frame) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                tracing::error!("Failed to write frame: {}", e);
                self.error = Some(e);
            }
        }
    }
}
