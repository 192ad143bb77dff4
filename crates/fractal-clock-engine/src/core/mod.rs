//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the host
//! application: an [`App`] callback and the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
