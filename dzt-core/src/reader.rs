use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use dzt_types::{DztResult, HeaderRecord, SampleMatrix};
use log::debug;

use crate::{read_header, read_samples, DataLayout, DecodeOptions};

/// Читатель DZT файлов.
///
/// Заголовок читается и проверяется при создании; выборки читаются по
/// запросу через [`DztReader::read_scans`], можно несколько окон подряд.
pub struct DztReader<R: Read + Seek> {
    reader: BufReader<R>,
    header: HeaderRecord,
    layout: DataLayout,
    stream_len: u64,
}

impl<R: Read + Seek> DztReader<R> {
    /// Создаёт читатель, декодируя заголовок с начала потока.
    pub fn new(inner: R) -> DztResult<Self> {
        let mut reader = BufReader::new(inner);

        reader.seek(SeekFrom::Start(0))?;

        let header = read_header(&mut reader)?;
        let layout = DataLayout::from_header(&header)?;
        let stream_len = reader.seek(SeekFrom::End(0))?;

        debug!(
            "DZT header: {} x {} channel(s), {} samples, data at {}",
            layout.samples_per_trace, layout.num_channels, layout.width, layout.head_offset
        );

        Ok(Self {
            reader,
            header,
            layout,
            stream_len,
        })
    }

    /// Читает окно сканов и собирает матрицу (один скан — один столбец).
    pub fn read_scans(
        &mut self,
        opts: &DecodeOptions,
    ) -> DztResult<SampleMatrix> {
        let samples = read_samples(&mut self.reader, &self.layout, opts)?;

        SampleMatrix::from_flat(samples, self.layout.trace_len())
    }

    /// Декодированный заголовок.
    pub fn header(&self) -> &HeaderRecord {
        &self.header
    }

    /// Геометрия секции данных.
    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Полных сканов в файле.
    pub fn scans_available(&self) -> u64 {
        self.layout.scans_in(self.stream_len)
    }

    /// Читает окно и отдаёт его вместе с заголовком, освобождая поток.
    pub fn decode(
        mut self,
        opts: &DecodeOptions,
    ) -> DztResult<(SampleMatrix, HeaderRecord)> {
        let matrix = self.read_scans(opts)?;
        Ok((matrix, self.header))
    }
}

/// Декодирует DZT из произвольного потока.
pub fn read_dzt_from<R: Read + Seek>(
    inner: R,
    opts: &DecodeOptions,
) -> DztResult<(SampleMatrix, HeaderRecord)> {
    DztReader::new(inner)?.decode(opts)
}

/// Открывает файл, декодирует его и закрывает.
pub fn read_dzt<P: AsRef<Path>>(
    path: P,
    opts: &DecodeOptions,
) -> DztResult<(SampleMatrix, HeaderRecord)> {
    let file = File::open(path.as_ref())?;

    read_dzt_from(file, opts)
}
