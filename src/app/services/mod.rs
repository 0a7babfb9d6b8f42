//! Services layer - business operations.
//!
//! - Reading and classifying the appearance flag
//! - Writing the flag and propagating it to running applications

pub mod reader;
pub mod writer;

pub use reader::ThemeReader;
pub use writer::{Applied, ApplyError};
