//! # ifgc-core
//!
//! Render orchestration for the `ifgc` CLI: option resolution, input
//! acquisition, render dispatch, and output writing, with the renderer kept
//! behind the [`InfographicRenderer`] capability trait.
//!
//! ```rust,no_run
//! use ifgc_core::{dispatch::RenderDispatch, input, options, InfographicRenderer, IfgcError};
//!
//! async fn render<R: InfographicRenderer>(
//!     renderer: &R,
//!     opts: options::RenderOptions,
//! ) -> Result<(), IfgcError> {
//!     let request = options::resolve(opts).await?;
//!     let document = input::acquire(&request.input).await?;
//!     RenderDispatch::new(renderer).run(&document, &request).await
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod options;
pub mod output;
pub mod renderer;
pub mod request;

pub use config::{ConfigLayers, Configuration};
pub use dispatch::{RenderDispatch, RenderState};
pub use error::IfgcError;
pub use renderer::InfographicRenderer;
pub use request::{InputSource, OutputTarget, RenderRequest};
