use thiserror::Error;

/// Результат для операций декодирования DZT
pub type DztResult<T> = std::result::Result<T, DztError>;

/// Типы ошибок декодирования DZT.
#[derive(Debug, Error)]
pub enum DztError {
    /// Разрядность выборки не входит в {8, 16, 32}
    #[error("Unsupported sample width: {0} bits (expected 8, 16 or 32)")]
    UnsupportedSampleWidth(i16),

    /// Смещение или длина чтения выходят за границы потока, либо
    /// арифметика диапазона переполнилась
    #[error("Offset out of range: {0}")]
    OffsetOutOfRange(String),

    /// Количество выборок не кратно длине одной трассы
    #[error("Incomplete trace: {samples} samples is not a multiple of trace length {trace_len}")]
    IncompleteTrace { samples: usize, trace_len: usize },

    /// Обязательное поле отсутствует в заголовке
    #[error("Missing header field: {0}")]
    MissingField(String),

    /// Поле заголовка имеет неверный тип
    #[error("Header field '{field}' has wrong type: expected {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("Stream error: {0}")]
    Stream(#[from] std::io::Error),
}

impl DztError {
    /// Удобные конструкторы
    pub fn offset_out_of_range<S: Into<String>>(s: S) -> Self {
        Self::OffsetOutOfRange(s.into())
    }

    pub fn missing_field<S: Into<String>>(s: S) -> Self {
        Self::MissingField(s.into())
    }

    /// `true` для ошибок, которые вызывающий код может смягчить
    /// через `lenient_range`.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OffsetOutOfRange(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_stream() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: DztError = io.into();

        assert!(matches!(err, DztError::Stream(_)));
        assert!(err.to_string().contains("short read"));
    }

    #[test]
    fn test_messages() {
        let err = DztError::IncompleteTrace {
            samples: 10_241,
            trace_len: 1_024,
        };
        assert!(err.to_string().contains("10241"));

        assert!(DztError::UnsupportedSampleWidth(12)
            .to_string()
            .contains("12 bits"));
        assert!(DztError::offset_out_of_range("start").is_range_error());
        assert!(!DztError::missing_field("tag").is_range_error());
    }
}
