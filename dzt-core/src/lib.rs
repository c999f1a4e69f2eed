//! Декодер файлов георадара GSSI DZT
//!
//! Читает основной заголовок DZT в упорядоченное отображение полей и
//! секцию данных в матрицу выборок, где каждый столбец — полная
//! многоканальная трасса одного скана.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use dzt_core::{read_dzt, DecodeOptions};
//!
//! let opts = DecodeOptions::new().with_start_scan(100).with_scans(50);
//! let (matrix, header) = read_dzt("profile.DZT", &opts)?;
//!
//! println!("{} x {}", matrix.rows(), matrix.cols());
//! println!("range: {} ns", header.range_ns()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod config;
pub mod format;
pub mod layout;
pub mod reader;
pub mod samples;

pub use binary::*;
pub use config::*;
pub use format::*;
pub use layout::*;
pub use reader::*;
pub use samples::*;

pub use dzt_types::{
    DztError, DztResult, FieldValue, HeaderRecord, PackedDateTime, SampleMatrix, SampleWidth,
};

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(MIN_HEADER_SIZE, 1024);
        assert_eq!(HEADER_FIELDS_LEN, 54);
        assert_eq!(HEADER_FIELDS.len(), 20);
    }
}
