use byteorder::{ByteOrder, LittleEndian};

use dzt_types::{FieldValue, SampleWidth};

use crate::{FieldKind, HeaderField};

/// Читает одно поле заголовка из буфера по его смещению (little-endian).
///
/// Буфер должен покрывать `field.offset + field.kind.size()` байт.
pub fn read_field_le(
    buf: &[u8],
    field: &HeaderField,
) -> FieldValue {
    let b = &buf[field.offset..field.offset + field.kind.size()];

    match field.kind {
        FieldKind::I16 => FieldValue::Int(LittleEndian::read_i16(b)),
        FieldKind::F32 => FieldValue::Float(LittleEndian::read_f32(b)),
    }
}

/// Декодирует сырые слова секции данных в знаковые выборки.
///
/// Беззнаковые 8/16-битные слова расширяются до i32 и сдвигаются на
/// `2^bits / 2`; 32-битные знаковые слова переносятся как есть.
/// Неполное слово в хвосте `raw` отбрасывается.
pub fn decode_samples_le(
    raw: &[u8],
    width: SampleWidth,
) -> Vec<i32> {
    let offset = width.recentre_offset();

    match width {
        SampleWidth::Byte => raw.iter().map(|&b| b as i32 - offset).collect(),
        SampleWidth::Word => {
            let mut words = vec![0u16; raw.len() / 2];
            LittleEndian::read_u16_into(&raw[..words.len() * 2], &mut words);
            words.into_iter().map(|w| w as i32 - offset).collect()
        }
        SampleWidth::DWord => {
            let mut words = vec![0i32; raw.len() / 4];
            LittleEndian::read_i32_into(&raw[..words.len() * 4], &mut words);
            words
        }
    }
}
