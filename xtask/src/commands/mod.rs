//! Top-level command families.

pub mod launch;
pub mod widget;
