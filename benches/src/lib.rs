//! Синтетические DZT файлы для бенчмарков.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Строит DZT файл: 1024 байта заголовка на канал, 16-битные выборки со
/// случайными (детерминированными по `seed`) значениями.
pub fn synthetic_dzt(
    samples_per_trace: i16,
    num_channels: i16,
    scans: usize,
    seed: u64,
) -> Vec<u8> {
    let head_len = 1024 * num_channels as usize;
    let n_words = samples_per_trace as usize * num_channels as usize * scans;
    let mut raw = vec![0u8; head_len];

    raw[2..4].copy_from_slice(&1024i16.to_le_bytes());
    raw[4..6].copy_from_slice(&samples_per_trace.to_le_bytes());
    raw[6..8].copy_from_slice(&16i16.to_le_bytes());
    raw[52..54].copy_from_slice(&num_channels.to_le_bytes());

    let mut rng = StdRng::seed_from_u64(seed);
    raw.reserve(n_words * 2);
    for _ in 0..n_words {
        raw.extend_from_slice(&rng.gen::<u16>().to_le_bytes());
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_size() {
        let raw = synthetic_dzt(512, 2, 10, 1);
        assert_eq!(raw.len(), 2048 + 512 * 2 * 10 * 2);
        assert_eq!(raw, synthetic_dzt(512, 2, 10, 1), "должен быть детерминированным");
    }
}
