//! Render dispatch: hand the document to the renderer, then write the result.
//!
//! ```text
//! Pending ──render()──▶ Rendering ──ok──▶ Written
//!                           │
//!                           └──renderer or writer error──▶ Failed
//! ```

use crate::error::IfgcError;
use crate::output::write_output;
use crate::renderer::InfographicRenderer;
use crate::request::RenderRequest;

/// Where a [`RenderDispatch`] is in its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Pending,
    Rendering,
    Written,
    Failed,
}

/// One-shot driver for a single render call.
pub struct RenderDispatch<'r, R> {
    renderer: &'r R,
    state: RenderState,
}

impl<'r, R: InfographicRenderer> RenderDispatch<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self {
            renderer,
            state: RenderState::Pending,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Render `document` with the request's configuration and write the SVG
    /// to the request's output target. Nothing is retried.
    pub async fn run(&mut self, document: &str, request: &RenderRequest) -> Result<(), IfgcError> {
        self.transition(RenderState::Rendering);

        let svg = match self.renderer.render(document, &request.configuration).await {
            Ok(svg) => svg,
            Err(err) => {
                self.transition(RenderState::Failed);
                return Err(IfgcError::Render(err.to_string()));
            }
        };

        match write_output(&request.output, &svg).await {
            Ok(()) => {
                self.transition(RenderState::Written);
                Ok(())
            }
            Err(err) => {
                self.transition(RenderState::Failed);
                Err(err)
            }
        }
    }

    fn transition(&mut self, next: RenderState) {
        tracing::debug!(from = ?self.state, to = ?next, "render dispatch");
        self.state = next;
    }
}
