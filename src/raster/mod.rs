//! Turning curves and color fields into pixel buffers.

pub mod buffer;
pub mod field;
pub mod mask;
