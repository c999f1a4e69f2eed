pub mod datetime;
pub mod error;
pub mod header;
pub mod matrix;
pub mod sample_width;

pub use datetime::*;
pub use error::*;
pub use header::*;
pub use matrix::*;
pub use sample_width::*;
