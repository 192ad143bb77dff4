//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep paint order deterministic: commands are painted in the order recorded
//! - keep shape-specific helpers isolated per shape file

mod cmd;
mod line;
mod list;

pub use cmd::DrawCmd;
pub use line::LineCmd;
pub use list::DrawList;
