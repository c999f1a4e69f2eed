use dzt_types::{DztError, DztResult};

/// Сколько сканов читать начиная с `start_scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanCount {
    /// Все оставшиеся сканы до конца файла
    #[default]
    All,
    /// Ровно `n` сканов
    Scans(u64),
}

/// Параметры одного вызова декодирования.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Первый читаемый скан (с нуля)
    pub start_scan: u64,
    /// Количество сканов
    pub n_scans: ScanCount,
    /// Разрешить откат к началу данных / чтению до конца файла вместо
    /// ошибки `OffsetOutOfRange` (с предупреждением в лог)
    pub lenient_range: bool,
}

impl ScanCount {
    /// Переводит целочисленную форму (`-1` = все) в [`ScanCount`].
    ///
    /// Положительное значение — число сканов, любое другое — чтение до конца.
    pub fn from_raw(n_scans: i64) -> Self {
        if n_scans > 0 {
            ScanCount::Scans(n_scans as u64)
        } else {
            ScanCount::All
        }
    }

    /// `None` означает чтение до конца файла.
    pub fn limit(&self) -> Option<u64> {
        match self {
            ScanCount::Scans(n) if *n > 0 => Some(*n),
            _ => None,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Параметры в целочисленной форме: `start_scan >= 0`, `n_scans = -1`
    /// для чтения всех сканов.
    pub fn from_raw(
        start_scan: i64,
        n_scans: i64,
    ) -> DztResult<Self> {
        let start_scan = u64::try_from(start_scan).map_err(|_| {
            DztError::offset_out_of_range(format!("start_scan must be >= 0, got {start_scan}"))
        })?;

        Ok(Self {
            start_scan,
            n_scans: ScanCount::from_raw(n_scans),
            lenient_range: false,
        })
    }

    pub fn with_start_scan(
        mut self,
        start_scan: u64,
    ) -> Self {
        self.start_scan = start_scan;
        self
    }

    pub fn with_scans(
        mut self,
        n_scans: u64,
    ) -> Self {
        self.n_scans = ScanCount::Scans(n_scans);
        self
    }

    pub fn with_lenient_range(
        mut self,
        lenient: bool,
    ) -> Self {
        self.lenient_range = lenient;
        self
    }
}
