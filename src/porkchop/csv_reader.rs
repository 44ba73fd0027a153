//! CSV ingestion of raw transfer-sweep rows.
//!
//! The sweep CSV is header-addressed: `depart_utc`, `arrive_utc`,
//! `feasible`, and one or more metric columns (`dv_total_km_s`,
//! `c3_km2_s2`, …). Rows that fail to parse are dropped before reduction,
//! never errored.

use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use csv::StringRecord;

use crate::helioplot_errors::HelioplotError;
use crate::porkchop::GridRow;
use crate::time::parse_calendar_utc;

/// Read sweep rows from a CSV file on disk.
///
/// See [`read_grid_rows`] for the column contract.
pub fn read_grid_rows_from_path(
    path: &Utf8Path,
    metric: &str,
) -> Result<Vec<GridRow>, HelioplotError> {
    read_grid_rows(File::open(path)?, metric)
}

/// Read sweep rows from any CSV source.
///
/// Header lookup is case-insensitive and the metric column accepts the
/// short aliases resolved by [`resolve_metric_column`]. A missing required
/// column is a configuration error; a malformed row (unparsable timestamp,
/// unparsable or non-finite metric) is silently dropped. The feasibility
/// flag is carried through to [`GridRow`], not filtered here.
///
/// Arguments
/// ---------
/// * `reader`: CSV byte source with a header record
/// * `metric`: name or alias of the metric column to extract
///
/// Return
/// ------
/// * The parsed rows, or [`HelioplotError::MissingColumn`] /
///   [`HelioplotError::CsvError`].
pub fn read_grid_rows<R: Read>(reader: R, metric: &str) -> Result<Vec<GridRow>, HelioplotError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let depart_idx = find_column(&headers, "depart_utc")?;
    let arrive_idx = find_column(&headers, "arrive_utc")?;
    let feasible_idx = find_column(&headers, "feasible")?;
    let metric_idx = resolve_metric_column(&headers, metric)
        .ok_or_else(|| HelioplotError::MissingColumn(metric.to_string()))?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        // Sweeps routinely emit placeholder fields for unconverged cases;
        // such rows are dropped here rather than surfaced as errors.
        if let Some(row) = parse_row(&record, depart_idx, arrive_idx, feasible_idx, metric_idx) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Resolve a metric name to its column index, case-insensitively.
///
/// Falls back to the canonical column for the short CLI aliases:
/// `dv_total` → `dv_total_km_s`, `c3` → `c3_km2_s2`.
pub fn resolve_metric_column(headers: &StringRecord, metric: &str) -> Option<usize> {
    if let Some(direct) = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(metric))
    {
        return Some(direct);
    }
    let fallback = match metric.to_ascii_lowercase().as_str() {
        "dv_total" => "dv_total_km_s",
        "c3" => "c3_km2_s2",
        _ => return None,
    };
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(fallback))
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize, HelioplotError> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or_else(|| HelioplotError::MissingColumn(name.to_string()))
}

fn parse_row(
    record: &StringRecord,
    depart_idx: usize,
    arrive_idx: usize,
    feasible_idx: usize,
    metric_idx: usize,
) -> Option<GridRow> {
    let depart = parse_calendar_utc(record.get(depart_idx)?).ok()?;
    let arrive = parse_calendar_utc(record.get(arrive_idx)?).ok()?;
    let feasible = record.get(feasible_idx)?.trim().eq_ignore_ascii_case("true");
    let cost: f64 = record.get(metric_idx)?.trim().parse().ok()?;
    if !cost.is_finite() {
        return None;
    }
    Some(GridRow {
        depart,
        arrive,
        feasible,
        cost,
    })
}
