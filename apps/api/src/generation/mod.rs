// Post generation: idea normalization, keyword extraction, tone tables,
// per-platform text templates and image URL construction.
// Nothing here performs I/O.

pub mod generator;
pub mod handlers;
pub mod image;
pub mod keywords;
pub mod tone;
