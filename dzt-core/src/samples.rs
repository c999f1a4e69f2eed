use std::io::{Read, Seek, SeekFrom};

use dzt_types::{DztError, DztResult};
use log::{debug, warn};

use crate::{binary::decode_samples_le, DataLayout, DecodeOptions};

/// Диапазон секции данных, который нужно прочитать.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRange {
    /// Абсолютное смещение первого байта
    pub start: u64,
    /// Длина в байтах (всегда кратна размеру выборки)
    pub len: u64,
}

/// Вычисляет диапазон чтения для потока длиной `stream_len`.
///
/// Без `lenient_range` любая ошибка арифметики или выход за границы потока
/// возвращается как `OffsetOutOfRange`. С ним ошибка начала откатывает чтение
/// к началу данных, а ошибка количества или конца читает до конца файла.
pub fn resolve_range(
    layout: &DataLayout,
    opts: &DecodeOptions,
    stream_len: u64,
) -> DztResult<ReadRange> {
    let sample_bytes = layout.width.bytes() as u64;

    let start = match layout
        .start_position(opts.start_scan)
        .and_then(|start| check_start(start, stream_len))
    {
        Ok(start) => start,
        Err(e) if opts.lenient_range => {
            warn!("{e}; reading from the start of the data section");
            check_start(layout.head_offset, stream_len)?
        }
        Err(e) => return Err(e),
    };

    let available = stream_len - start;

    let requested = match layout.sample_count(opts.n_scans).and_then(|count| {
        count
            .map(|n| {
                n.checked_mul(sample_bytes)
                    .filter(|len| *len <= available)
                    .ok_or_else(|| {
                        DztError::offset_out_of_range(format!(
                            "{n} samples from byte {start} exceed stream length {stream_len}"
                        ))
                    })
            })
            .transpose()
    }) {
        Ok(len) => len,
        Err(e) if opts.lenient_range => {
            warn!("{e}; reading to the end of the stream");
            None
        }
        Err(e) => return Err(e),
    };

    let len = match requested {
        Some(len) => len,
        None => {
            let tail = available % sample_bytes;
            if tail != 0 {
                warn!("dropping {tail} trailing bytes that do not form a whole sample");
            }
            available - tail
        }
    };

    Ok(ReadRange { start, len })
}

fn check_start(
    start: u64,
    stream_len: u64,
) -> DztResult<u64> {
    if start > stream_len {
        return Err(DztError::offset_out_of_range(format!(
            "data start {start} is beyond stream length {stream_len}"
        )));
    }
    Ok(start)
}

/// Читает и декодирует выборки выбранного диапазона сканов.
///
/// Одно последовательное чтение; недочитанный диапазон даёт ошибку потока.
pub fn read_samples<R: Read + Seek>(
    reader: &mut R,
    layout: &DataLayout,
    opts: &DecodeOptions,
) -> DztResult<Vec<i32>> {
    let stream_len = reader.seek(SeekFrom::End(0))?;
    let range = resolve_range(layout, opts, stream_len)?;

    debug!(
        "reading {} bytes of {} samples at offset {} (head_offset={})",
        range.len, layout.width, range.start, layout.head_offset
    );

    let len = usize::try_from(range.len).map_err(|_| {
        DztError::offset_out_of_range(format!("read length {} exceeds address space", range.len))
    })?;

    let mut raw = vec![0u8; len];

    reader.seek(SeekFrom::Start(range.start))?;
    reader.read_exact(&mut raw)?;

    Ok(decode_samples_le(&raw, layout.width))
}
