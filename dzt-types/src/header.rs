use indexmap::IndexMap;
use serde::Serialize;

use crate::{DztError, DztResult, PackedDateTime, SampleWidth};

/// Имена полей основного заголовка DZT (ключи [`HeaderRecord`]).
pub mod fields {
    pub const TAG: &str = "tag";
    pub const DATA_OFFSET_CODE: &str = "data_offset_code";
    pub const SAMPLES_PER_TRACE: &str = "samples_per_trace";
    pub const BITS_PER_SAMPLE: &str = "bits_per_sample";
    pub const ZERO_OFFSET: &str = "zero_offset";
    pub const SCANS_PER_SECOND: &str = "scans_per_second";
    pub const SCANS_PER_METER: &str = "scans_per_meter";
    pub const METERS_PER_MARK: &str = "meters_per_mark";
    pub const START_POSITION_NS: &str = "start_position_ns";
    pub const RANGE_NS: &str = "range_ns";
    pub const NUM_PASSES: &str = "num_passes";
    pub const CREATION_TIME: &str = "creation_time";
    pub const MODIFIED_TIME: &str = "modified_time";
    pub const MAP_OFFSET: &str = "map_offset";
    pub const MAP_SIZE: &str = "map_size";
    pub const TEXT_OFFSET: &str = "text_offset";
    pub const TEXT_SIZE: &str = "text_size";
    pub const PROC_OFFSET: &str = "proc_offset";
    pub const PROC_SIZE: &str = "proc_size";
    pub const NUM_CHANNELS: &str = "num_channels";
}

/// Скалярное значение поля заголовка
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Знаковое 16-битное целое
    Int(i16),
    /// 32-битное IEEE-754 число
    Float(f32),
}

/// Заголовок DZT файла: упорядоченное отображение имя поля → значение.
///
/// Порядок вставки сохраняется, неизвестные поля допускаются. Поля,
/// управляющие декодированием, читаются через типизированные методы,
/// которые возвращают [`DztError::MissingField`] или
/// [`DztError::FieldType`] вместо значения по умолчанию.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeaderRecord {
    fields: IndexMap<String, FieldValue>,
}

////////////////////////////////////////////////////////////////////////////////
// FieldValue
////////////////////////////////////////////////////////////////////////////////

impl FieldValue {
    pub fn as_int(&self) -> Option<i16> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Int(_) => None,
        }
    }

    /// Значение как f64 независимо от типа.
    pub fn to_f64(&self) -> f64 {
        match self {
            FieldValue::Int(v) => *v as f64,
            FieldValue::Float(v) => *v as f64,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "i16",
            FieldValue::Float(_) => "f32",
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i16> for FieldValue {
    fn from(v: i16) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v)
    }
}

////////////////////////////////////////////////////////////////////////////////
// HeaderRecord
////////////////////////////////////////////////////////////////////////////////

impl HeaderRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет поле; возвращает предыдущее значение, если оно было.
    pub fn insert<S: Into<String>, V: Into<FieldValue>>(
        &mut self,
        name: S,
        value: V,
    ) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<FieldValue> {
        self.fields.get(name).copied()
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Поля в порядке вставки (для декодированного заголовка — в порядке
    /// смещений).
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldValue)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Целочисленное поле; отсутствие или другой тип — ошибка.
    pub fn int(
        &self,
        name: &str,
    ) -> DztResult<i16> {
        match self.fields.get(name) {
            Some(FieldValue::Int(v)) => Ok(*v),
            Some(FieldValue::Float(_)) => Err(DztError::FieldType {
                field: name.to_string(),
                expected: "i16",
            }),
            None => Err(DztError::missing_field(name)),
        }
    }

    /// Поле с плавающей точкой; отсутствие или другой тип — ошибка.
    pub fn float(
        &self,
        name: &str,
    ) -> DztResult<f32> {
        match self.fields.get(name) {
            Some(FieldValue::Float(v)) => Ok(*v),
            Some(FieldValue::Int(_)) => Err(DztError::FieldType {
                field: name.to_string(),
                expected: "f32",
            }),
            None => Err(DztError::missing_field(name)),
        }
    }

    pub fn data_offset_code(&self) -> DztResult<i16> {
        self.int(fields::DATA_OFFSET_CODE)
    }

    pub fn samples_per_trace(&self) -> DztResult<i16> {
        self.int(fields::SAMPLES_PER_TRACE)
    }

    pub fn bits_per_sample(&self) -> DztResult<i16> {
        self.int(fields::BITS_PER_SAMPLE)
    }

    pub fn num_channels(&self) -> DztResult<i16> {
        self.int(fields::NUM_CHANNELS)
    }

    /// Разрядность выборок, выбранная по `bits_per_sample`.
    pub fn sample_width(&self) -> DztResult<SampleWidth> {
        SampleWidth::from_bits(self.bits_per_sample()?)
    }

    pub fn range_ns(&self) -> DztResult<f32> {
        self.float(fields::RANGE_NS)
    }

    pub fn creation_time(&self) -> DztResult<PackedDateTime> {
        self.float(fields::CREATION_TIME)
            .map(PackedDateTime::from_field)
    }

    pub fn modified_time(&self) -> DztResult<PackedDateTime> {
        self.float(fields::MODIFIED_TIME)
            .map(PackedDateTime::from_field)
    }
}

impl<S: Into<String>> FromIterator<(S, FieldValue)> for HeaderRecord {
    fn from_iter<I: IntoIterator<Item = (S, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
