use crate::{DztError, DztResult};

/// Разрядность выборок в секции данных
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    /// 8-битные беззнаковые выборки
    Byte,
    /// 16-битные беззнаковые выборки
    Word,
    /// 32-битные знаковые выборки
    DWord,
}

impl SampleWidth {
    /// Выбирает разрядность по полю `bits_per_sample` заголовка.
    pub fn from_bits(bits: i16) -> DztResult<Self> {
        match bits {
            8 => Ok(SampleWidth::Byte),
            16 => Ok(SampleWidth::Word),
            32 => Ok(SampleWidth::DWord),
            _ => Err(DztError::UnsupportedSampleWidth(bits)),
        }
    }

    pub fn bits(&self) -> u32 {
        match self {
            SampleWidth::Byte => 8,
            SampleWidth::Word => 16,
            SampleWidth::DWord => 32,
        }
    }

    /// Размер одной выборки в байтах
    pub fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Беззнаковые ли выборки в файле (8 и 16 бит — да, 32 — нет)
    pub fn is_unsigned(&self) -> bool {
        !matches!(self, SampleWidth::DWord)
    }

    /// Смещение, вычитаемое из беззнаковой выборки: `2^bits / 2`.
    pub fn recentre_offset(&self) -> i32 {
        match self {
            SampleWidth::Byte => 1 << 7,
            SampleWidth::Word => 1 << 15,
            SampleWidth::DWord => 0,
        }
    }
}

impl std::fmt::Display for SampleWidth {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SampleWidth::Byte => write!(f, "u8"),
            SampleWidth::Word => write!(f, "u16"),
            SampleWidth::DWord => write!(f, "i32"),
        }
    }
}
