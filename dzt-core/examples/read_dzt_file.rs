//! Пример: чтение DZT-файла через DztReader
//!
//! Демонстрирует:
//! - открытие файла и проверку заголовка через DztReader
//! - вывод полей заголовка в порядке смещений
//! - чтение окна сканов и доступ к трассе одного канала

use std::fs::File;

use dzt_core::{DecodeOptions, DztReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "dzt-core/test_input.DZT".to_string());

    // --- DztReader декодирует заголовок при открытии ---
    let file = File::open(&input_path)?;
    let mut reader = match DztReader::new(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Header decode failed: {e}");
            return Err(Box::new(e));
        }
    };

    println!("✓ Header decoded");
    for (name, value) in reader.header().iter() {
        println!("  {name:<18}: {value}");
    }

    let layout = *reader.layout();
    println!("  Data offset       : {}", layout.head_offset);
    println!("  Sample width      : {}", layout.width);
    println!("  Scans available   : {}", reader.scans_available());

    // --- Не больше 10 первых сканов ---
    let n_scans = reader.scans_available().min(10);
    let matrix = reader.read_scans(&DecodeOptions::new().with_scans(n_scans))?;
    println!("\n✓ Read {} x {}", matrix.rows(), matrix.cols());

    for ch in 0..layout.num_channels {
        if let Some(trace) = matrix.channel_trace(0, ch, layout.samples_per_trace) {
            let peak = trace.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
            println!("  [ch {ch}] first scan peak amplitude: {peak}");
        }
    }

    Ok(())
}
