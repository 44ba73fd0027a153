use helioplot::porkchop::csv_reader::read_grid_rows;
use helioplot::porkchop::reduce;
use helioplot::time::{format_calendar_utc, parse_calendar_utc};
use helioplot::HelioplotError;

/// Header shape of the upstream transfer sweep: extra columns around the
/// ones this crate consumes.
const SWEEP_CSV: &str = "\
depart_et,arrive_et,depart_utc,arrive_utc,tof_days,c3_km2_s2,dv_total_km_s,feasible
1.0e8,1.2e8,2026 MAR 01 00:00:00.000,2026 OCT 01 00:00:00.000,214.0,12.1,3.0,true
1.0e8,1.2e8,2026 MAR 01 00:00:00.000,2026 OCT 01 00:00:00.000,214.0,11.8,2.5,true
1.1e8,1.3e8,2026 MAR 11 00:00:00.000,2026 OCT 21 00:00:00.000,224.0,55.0,50.0,true
1.2e8,1.4e8,2026 MAR 21 00:00:00.000,2026 OCT 31 00:00:00.000,224.0,20.0,4.0,false
bad,row,with,too,few,fields
1.3e8,1.5e8,2026 APR 01 00:00:00.000,garbled timestamp,230.0,14.0,3.5,true
";

#[test]
fn csv_rows_reduce_end_to_end() {
    let rows = read_grid_rows(SWEEP_CSV.as_bytes(), "dv_total").unwrap();

    // Two malformed rows dropped; the infeasible row survives ingestion.
    assert_eq!(rows.len(), 4);
    assert_eq!(rows.iter().filter(|row| row.feasible).count(), 3);

    let reduction = reduce(&rows, 4.0).unwrap();
    assert_eq!(reduction.clip.low, 2.5);
    assert_eq!(reduction.clip.high, 10.0);
    assert_eq!(reduction.minimum.cost, 2.5);
    assert_eq!(
        format_calendar_utc(reduction.minimum.depart),
        "2026 MAR 01 00:00:00.000"
    );

    let depart_axis: Vec<String> = reduction
        .grid
        .depart_epochs()
        .iter()
        .map(|&epoch| format_calendar_utc(epoch))
        .collect();
    assert_eq!(
        depart_axis,
        ["2026 MAR 01 00:00:00.000", "2026 MAR 11 00:00:00.000"]
    );
}

#[test]
fn metric_aliases_select_different_columns() {
    let dv_rows = read_grid_rows(SWEEP_CSV.as_bytes(), "dv_total").unwrap();
    let c3_rows = read_grid_rows(SWEEP_CSV.as_bytes(), "c3").unwrap();

    assert_eq!(dv_rows.len(), c3_rows.len());
    assert_eq!(dv_rows[0].cost, 3.0);
    assert_eq!(c3_rows[0].cost, 12.1);
    assert_eq!(dv_rows[0].depart, c3_rows[0].depart);
}

#[test]
fn missing_metric_column_is_a_configuration_error() {
    assert_eq!(
        read_grid_rows(SWEEP_CSV.as_bytes(), "vinf_dep").unwrap_err(),
        HelioplotError::MissingColumn("vinf_dep".to_string())
    );
}

#[test]
fn timestamps_round_trip_through_the_grid() {
    let rows = read_grid_rows(SWEEP_CSV.as_bytes(), "dv_total").unwrap();
    let parsed = parse_calendar_utc("2026 MAR 11 00:00:00.000").unwrap();
    assert!(rows.iter().any(|row| row.depart == parsed));
}
