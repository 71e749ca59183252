//! Rust rendition of a classic syntax-highlighter exercise file: a generic
//! container, a small numeric utility module, a polymorphic shape capability
//! with a single circle variant, and a linear driver that prints to stdout.

pub mod container;
pub mod driver;
pub mod shapes;
pub mod utils;
