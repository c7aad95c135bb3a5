//! Preview session: owns at most one sample texture for display.

use texforge_spec::{Dimensions, FillSpec};

use crate::buffer::PixelBuffer;
use crate::synth::synthesize;

/// Holds the current preview sample.
///
/// Showing a new sample replaces the previous one. Whatever the session holds
/// is released when the session is ended or dropped.
#[derive(Debug, Default)]
pub struct PreviewSession {
    sample: Option<PixelBuffer>,
    samples_shown: usize,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize a sample and make it the current preview.
    pub fn show_sample(&mut self, dims: Dimensions, fill: &FillSpec) -> &PixelBuffer {
        self.samples_shown += 1;
        self.sample.insert(synthesize(dims, fill))
    }

    /// The current preview, if one has been shown.
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.sample.as_ref()
    }

    /// Number of samples shown during this session.
    pub fn samples_shown(&self) -> usize {
        self.samples_shown
    }

    /// Drop the current preview, keeping the session open.
    pub fn clear(&mut self) {
        self.sample = None;
    }

    /// End the session, releasing the preview.
    pub fn end(self) {}
}
