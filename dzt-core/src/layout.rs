use dzt_types::{DztError, DztResult, HeaderRecord, SampleWidth};

use crate::{resolve_head_offset, ScanCount};

/// Геометрия секции данных, выведенная из заголовка.
///
/// Все поля, влияющие на чтение, проверяются один раз при построении.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLayout {
    /// Смещение начала выборок от начала файла
    pub head_offset: u64,
    /// Разрядность выборок
    pub width: SampleWidth,
    /// Выборок в трассе одного канала
    pub samples_per_trace: usize,
    /// Количество каналов
    pub num_channels: usize,
}

impl DataLayout {
    /// Строит геометрию по заголовку.
    ///
    /// Отсутствующее поле даёт `MissingField`, непригодные размеры
    /// `OffsetOutOfRange`.
    pub fn from_header(header: &HeaderRecord) -> DztResult<Self> {
        let samples_per_trace = header.samples_per_trace()?;
        let width = header.sample_width()?;
        let num_channels = header.num_channels()?;
        let head_offset = resolve_head_offset(header.data_offset_code()?, num_channels)?;

        if samples_per_trace <= 0 {
            return Err(DztError::offset_out_of_range(format!(
                "samples_per_trace must be > 0, got {samples_per_trace}"
            )));
        }

        if num_channels < 1 {
            return Err(DztError::offset_out_of_range(format!(
                "num_channels must be >= 1, got {num_channels}"
            )));
        }

        Ok(Self {
            head_offset,
            width,
            samples_per_trace: samples_per_trace as usize,
            num_channels: num_channels as usize,
        })
    }

    /// Выборок в одном скане (строк матрицы)
    pub fn trace_len(&self) -> usize {
        self.samples_per_trace * self.num_channels
    }

    /// Байт в одном скане
    pub fn scan_bytes(&self) -> u64 {
        self.trace_len() as u64 * self.width.bytes() as u64
    }

    /// Смещение первого читаемого байта от начала файла.
    pub fn start_position(
        &self,
        start_scan: u64,
    ) -> DztResult<u64> {
        start_scan
            .checked_mul(self.scan_bytes())
            .and_then(|off| off.checked_add(self.head_offset))
            .ok_or_else(|| {
                DztError::offset_out_of_range(format!(
                    "start_scan={start_scan} overflows byte offset"
                ))
            })
    }

    /// Количество выборок для чтения; `None` — до конца файла.
    pub fn sample_count(
        &self,
        n_scans: ScanCount,
    ) -> DztResult<Option<u64>> {
        let Some(n) = n_scans.limit() else {
            return Ok(None);
        };

        n.checked_mul(self.trace_len() as u64)
            .map(Some)
            .ok_or_else(|| {
                DztError::offset_out_of_range(format!("n_scans={n} overflows sample count"))
            })
    }

    /// Сколько полных сканов помещается в поток длиной `stream_len`.
    pub fn scans_in(
        &self,
        stream_len: u64,
    ) -> u64 {
        stream_len.saturating_sub(self.head_offset) / self.scan_bytes()
    }
}
