use crate::error::SheetResult;
use crate::render::{PlotArtifact, RenderFrame, Renderer};

/// No-op renderer used by tests and headless composition.
///
/// It still validates frame content so tests can catch invalid geometry
/// without producing markup.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_primitive_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SheetResult<PlotArtifact> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_primitive_count = frame.primitive_count();
        Ok(PlotArtifact {
            viewport: frame.viewport,
            markup: String::new(),
        })
    }
}
