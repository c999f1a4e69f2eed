/// Упакованная дата/время создания или изменения файла.
///
/// В заголовке хранится как 32-битное поле, которое читается как f32;
/// реальные данные — битовые поля внутри этих 32 бит (младшие биты первыми):
///
/// ```text
/// [0..5)   SEC2    секунды / 2
/// [5..11)  MIN     минуты
/// [11..16) HOUR    часы
/// [16..21) DAY     день месяца
/// [21..25) MONTH   месяц
/// [25..32) YEAR    год - 1980
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Базовый год упакованного поля
pub const PACKED_YEAR_BASE: u16 = 1980;

impl PackedDateTime {
    /// Распаковывает битовые поля из сырого 32-битного значения.
    pub fn from_bits(bits: u32) -> Self {
        PackedDateTime {
            second: ((bits & 0x1F) * 2) as u8,
            minute: ((bits >> 5) & 0x3F) as u8,
            hour: ((bits >> 11) & 0x1F) as u8,
            day: ((bits >> 16) & 0x1F) as u8,
            month: ((bits >> 21) & 0x0F) as u8,
            year: PACKED_YEAR_BASE + ((bits >> 25) & 0x7F) as u16,
        }
    }

    /// Распаковывает значение поля заголовка, прочитанного как f32.
    pub fn from_field(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Обратная упаковка (нужна для построения тестовых заголовков).
    pub fn to_bits(&self) -> u32 {
        let year = self.year.saturating_sub(PACKED_YEAR_BASE) as u32;

        (self.second as u32 / 2 & 0x1F)
            | (self.minute as u32 & 0x3F) << 5
            | (self.hour as u32 & 0x1F) << 11
            | (self.day as u32 & 0x1F) << 16
            | (self.month as u32 & 0x0F) << 21
            | (year & 0x7F) << 25
    }

    /// Поле не заполнено (все биты нулевые).
    pub fn is_unset(&self) -> bool {
        self.to_bits() == 0
    }
}

impl std::fmt::Display for PackedDateTime {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
