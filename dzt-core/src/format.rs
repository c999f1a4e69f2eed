//! Спецификация основного заголовка GSSI DZT.
//!
//! Заголовок — фиксированный набор полей little-endian по известным
//! смещениям от начала файла. Знаковые 16-битные целые и 32-битные IEEE-754
//! числа; остальная часть блока заголовка (расширенные секции, GPS, текст,
//! история обработки) не разбирается.

use std::io::{self, Read};

use dzt_types::{fields, DztError, DztResult, HeaderRecord};

use crate::binary::read_field_le;

/// Минимальный блок заголовка (байт на канал в современной кодировке)
pub const MIN_HEADER_SIZE: u64 = 1024;

/// Размер разбираемой части заголовка: последнее поле заканчивается на 54
pub const HEADER_FIELDS_LEN: usize = 54;

/// Тип поля заголовка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Знаковое 16-битное целое
    I16,
    /// 32-битное IEEE-754 число
    F32,
}

/// Описание одного поля заголовка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
}

impl FieldKind {
    /// Размер поля в байтах
    pub fn size(&self) -> usize {
        match self {
            FieldKind::I16 => 2,
            FieldKind::F32 => 4,
        }
    }
}

const fn field(
    name: &'static str,
    offset: usize,
    kind: FieldKind,
) -> HeaderField {
    HeaderField { name, offset, kind }
}

/// Поля основного заголовка в порядке смещений.
pub const HEADER_FIELDS: [HeaderField; 20] = [
    field(fields::TAG, 0, FieldKind::I16),
    field(fields::DATA_OFFSET_CODE, 2, FieldKind::I16),
    field(fields::SAMPLES_PER_TRACE, 4, FieldKind::I16),
    field(fields::BITS_PER_SAMPLE, 6, FieldKind::I16),
    field(fields::ZERO_OFFSET, 8, FieldKind::I16),
    field(fields::SCANS_PER_SECOND, 10, FieldKind::F32),
    field(fields::SCANS_PER_METER, 14, FieldKind::F32),
    field(fields::METERS_PER_MARK, 18, FieldKind::F32),
    field(fields::START_POSITION_NS, 22, FieldKind::F32),
    field(fields::RANGE_NS, 26, FieldKind::F32),
    field(fields::NUM_PASSES, 30, FieldKind::I16),
    field(fields::CREATION_TIME, 32, FieldKind::F32),
    field(fields::MODIFIED_TIME, 36, FieldKind::F32),
    field(fields::MAP_OFFSET, 40, FieldKind::I16),
    field(fields::MAP_SIZE, 42, FieldKind::I16),
    field(fields::TEXT_OFFSET, 44, FieldKind::I16),
    field(fields::TEXT_SIZE, 46, FieldKind::I16),
    field(fields::PROC_OFFSET, 48, FieldKind::I16),
    field(fields::PROC_SIZE, 50, FieldKind::I16),
    field(fields::NUM_CHANNELS, 52, FieldKind::I16),
];

/// Декодирует заголовок из буфера длиной не меньше [`HEADER_FIELDS_LEN`].
///
/// Значения не проверяются на правдоподобие: это делает
/// [`DataLayout::from_header`](crate::DataLayout::from_header).
pub fn decode_header_bytes(buf: &[u8]) -> DztResult<HeaderRecord> {
    if buf.len() < HEADER_FIELDS_LEN {
        return Err(DztError::Stream(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "header too short: expected at least {HEADER_FIELDS_LEN} bytes, got {}",
                buf.len()
            ),
        )));
    }

    let mut header = HeaderRecord::new();

    for f in &HEADER_FIELDS {
        header.insert(f.name, read_field_le(buf, f));
    }

    Ok(header)
}

/// Читает и декодирует заголовок с текущей позиции потока.
///
/// Курсор сдвигается ровно на [`HEADER_FIELDS_LEN`] байт.
pub fn read_header<R: Read>(reader: &mut R) -> DztResult<HeaderRecord> {
    let mut buf = [0u8; HEADER_FIELDS_LEN];

    reader.read_exact(&mut buf)?;

    decode_header_bytes(&buf)
}

/// Вычисляет смещение начала секции данных.
///
/// Значение `data_offset_code` меньше 1024 — устаревшая кодировка, где поле
/// хранит множитель минимального блока. Иначе заголовок занимает по 1024
/// байта на каждый канал.
pub fn resolve_head_offset(
    data_offset_code: i16,
    num_channels: i16,
) -> DztResult<u64> {
    let blocks = if (data_offset_code as i64) < MIN_HEADER_SIZE as i64 {
        data_offset_code
    } else {
        num_channels
    };

    if blocks < 0 {
        return Err(DztError::offset_out_of_range(format!(
            "negative header size: data_offset_code={data_offset_code}, num_channels={num_channels}"
        )));
    }

    Ok(MIN_HEADER_SIZE * blocks as u64)
}
