//! Parametric definitions: lid contours per mood and the iris color field.

pub mod iris;
pub mod lids;
