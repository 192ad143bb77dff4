//! GPU device + surface management.
//!
//! One window, one surface: `Gpu` creates the adapter and device for it,
//! keeps the surface configured across resizes and hands out per-frame
//! encoders.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
