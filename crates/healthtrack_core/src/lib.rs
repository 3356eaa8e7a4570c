#![forbid(unsafe_code)]

pub mod digest;
pub mod effects;
pub mod severity;
pub mod track;
