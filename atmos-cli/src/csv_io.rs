//! Importação e exportação de séries em CSV

use std::io::{Read, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use atmos_core::prelude::*;

/// Linha do CSV; `uncertainty` e `segment` são opcionais na leitura
#[derive(Debug, Serialize, Deserialize)]
struct SeriesRow {
    time_min: f64,
    o2_pct: f64,
    co2_pct: f64,
    #[serde(default)]
    uncertainty: Option<f64>,
    #[serde(default)]
    segment: Option<Segment>,
}

impl From<&Sample> for SeriesRow {
    fn from(s: &Sample) -> Self {
        Self {
            time_min: s.time_min,
            o2_pct: s.o2_pct,
            co2_pct: s.co2_pct,
            uncertainty: s.uncertainty,
            segment: Some(s.segment),
        }
    }
}

/// Escreve a série com cabeçalho `time_min,o2_pct,co2_pct,uncertainty,segment`
pub fn write_series<W: Write>(series: &TimeSeries, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for sample in series {
        writer.serialize(SeriesRow::from(sample))?;
    }
    writer.flush()?;
    Ok(())
}

/// Lê uma série; amostras sem `segment` são tratadas como simuladas
pub fn read_series<R: Read>(reader: R) -> Result<TimeSeries> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut samples = Vec::new();

    for (line, row) in reader.deserialize::<SeriesRow>().enumerate() {
        let row = row.with_context(|| format!("invalid CSV row {}", line + 1))?;
        samples.push(Sample {
            time_min: row.time_min,
            o2_pct: row.o2_pct,
            co2_pct: row.co2_pct,
            uncertainty: row.uncertainty,
            segment: row.segment.unwrap_or(Segment::Simulated),
        });
    }

    Ok(TimeSeries::new(samples)?)
}
