use hifitime::{Duration, Epoch, TimeScale};
use std::str::FromStr;

use crate::constants::{Days, MIN_STEP_DAYS};
use crate::helioplot_errors::HelioplotError;

/// Uppercase month abbreviations of the calendar format, January first.
const MONTH_ABBREV: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Build the fixed-step epoch grid covering a sampling window.
///
/// Epochs are `start, start + step, start + 2*step, …`. When the step divides
/// the window evenly the grid ends exactly on `end`; otherwise one extra
/// epoch past `end` is appended so the grid always reaches the window edge.
/// The step is floored at [`MIN_STEP_DAYS`].
///
/// Arguments
/// ---------
/// * `start`: first epoch of the window
/// * `end`: last epoch of the window, must be strictly after `start`
/// * `step_days`: sampling cadence in days
///
/// Return
/// ------
/// * A strictly increasing, duplicate-free `Vec<Epoch>`, or
///   [`HelioplotError::InvalidRange`] when `end <= start`.
pub fn epoch_grid(start: Epoch, end: Epoch, step_days: Days) -> Result<Vec<Epoch>, HelioplotError> {
    if end <= start {
        return Err(HelioplotError::InvalidRange { start, end });
    }

    let step = Duration::from_days(step_days.max(MIN_STEP_DAYS));
    let whole_steps = ((end - start).to_seconds() / step.to_seconds()).floor() as i64;

    let mut epochs = Vec::with_capacity(whole_steps as usize + 2);
    for k in 0..=whole_steps {
        epochs.push(start + step * k);
    }
    if start + step * whole_steps < end {
        epochs.push(start + step * (whole_steps + 1));
    }

    Ok(epochs)
}

/// Parse a calendar timestamp in the format `YYYY MON DD HH:MM:SS.sss` (UTC)
///
/// This is the calendar rendering used by the upstream transfer sweep for its
/// `depart_utc`/`arrive_utc` columns. Month names are matched
/// case-insensitively and the fractional seconds are optional.
///
/// Arguments
/// ---------
/// * `date_str`: a string such as `"2026 MAR 14 06:30:00.000"`
///
/// Return
/// ------
/// * The corresponding UTC [`Epoch`], or [`HelioplotError::InvalidCalendarDate`].
pub fn parse_calendar_utc(date_str: &str) -> Result<Epoch, HelioplotError> {
    let invalid = || HelioplotError::InvalidCalendarDate(date_str.to_string());

    let parts: Vec<&str> = date_str.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let year = i32::from_str(parts[0]).map_err(|_| invalid())?;
    let month = month_number(parts[1]).ok_or_else(invalid)?;
    let day = u8::from_str(parts[2]).map_err(|_| invalid())?;

    let clock: Vec<&str> = parts[3].split(':').collect();
    if clock.len() != 3 {
        return Err(invalid());
    }
    let hour = u8::from_str(clock[0]).map_err(|_| invalid())?;
    let minute = u8::from_str(clock[1]).map_err(|_| invalid())?;
    let second_frac = f64::from_str(clock[2]).map_err(|_| invalid())?;
    if !(0.0..60.0).contains(&second_frac) {
        return Err(invalid());
    }

    // Separation of whole seconds and nanoseconds
    let second = second_frac.trunc() as u8;
    let nanos = ((second_frac - second as f64) * 1e9).round() as u32;

    Epoch::maybe_from_gregorian(year, month, day, hour, minute, second, nanos, TimeScale::UTC)
        .map_err(|_| invalid())
}

/// Render an epoch in the `YYYY MON DD HH:MM:SS.sss` (UTC) calendar format.
///
/// Inverse of [`parse_calendar_utc`], with fractional seconds truncated to
/// milliseconds.
pub fn format_calendar_utc(epoch: Epoch) -> String {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    let millis = nanos / 1_000_000;
    format!(
        "{year:04} {} {day:02} {hour:02}:{minute:02}:{second:02}.{millis:03}",
        MONTH_ABBREV[(month - 1) as usize]
    )
}

fn month_number(token: &str) -> Option<u8> {
    let upper = token.to_ascii_uppercase();
    MONTH_ABBREV
        .iter()
        .position(|month| *month == upper)
        .map(|idx| idx as u8 + 1)
}

#[cfg(test)]
mod time_test {
    use super::*;

    fn utc(year: i32, month: u8, day: u8) -> Epoch {
        Epoch::from_gregorian(year, month, day, 0, 0, 0, 0, TimeScale::UTC)
    }

    #[test]
    fn test_epoch_grid_exact_division() {
        let start = utc(2025, 1, 1);
        let end = utc(2025, 1, 11);
        let epochs = epoch_grid(start, end, 2.0).unwrap();

        assert_eq!(epochs.len(), 6);
        assert_eq!(epochs[0], start);
        assert_eq!(*epochs.last().unwrap(), end);
        assert!(epochs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_epoch_grid_overshoots_fractional_window() {
        let start = utc(2025, 1, 1);
        let end = utc(2025, 1, 11);
        let epochs = epoch_grid(start, end, 4.0).unwrap();

        // 10-day window, 4-day step: 0, 4, 8, then one sample past the edge.
        assert_eq!(epochs.len(), 4);
        assert_eq!(*epochs.last().unwrap(), start + Duration::from_days(12.0));
        assert!(*epochs.last().unwrap() > end);
    }

    #[test]
    fn test_epoch_grid_rejects_inverted_window() {
        let start = utc(2025, 1, 1);
        let err = epoch_grid(start, start, 1.0).unwrap_err();
        assert_eq!(
            err,
            HelioplotError::InvalidRange { start, end: start }
        );

        let earlier = utc(2024, 12, 1);
        assert!(epoch_grid(start, earlier, 1.0).is_err());
    }

    #[test]
    fn test_epoch_grid_floors_tiny_steps() {
        let start = utc(2025, 1, 1);
        let end = start + Duration::from_days(0.1);
        let epochs = epoch_grid(start, end, 0.0).unwrap();

        assert_eq!(epochs.len(), 11);
        assert_eq!(epochs[1] - epochs[0], Duration::from_days(MIN_STEP_DAYS));
    }

    #[test]
    fn test_parse_calendar_utc() {
        let epoch = parse_calendar_utc("2026 MAR 14 06:30:00.000").unwrap();
        assert_eq!(
            epoch,
            Epoch::from_gregorian(2026, 3, 14, 6, 30, 0, 0, TimeScale::UTC)
        );

        // Month matching is case-insensitive and fractions are optional.
        let epoch = parse_calendar_utc("2026 mar 14 06:30:15").unwrap();
        assert_eq!(
            epoch,
            Epoch::from_gregorian(2026, 3, 14, 6, 30, 15, 0, TimeScale::UTC)
        );
    }

    #[test]
    fn test_parse_calendar_utc_rejects_malformed_input() {
        for bad in [
            "",
            "2026-03-14T06:30:00",
            "2026 MAR 14",
            "2026 XXX 14 06:30:00.000",
            "2026 MAR 99 06:30:00.000",
            "2026 MAR 14 06:30:61.000",
        ] {
            assert_eq!(
                parse_calendar_utc(bad).unwrap_err(),
                HelioplotError::InvalidCalendarDate(bad.to_string()),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_calendar_round_trip() {
        let rendered = "2027 NOV 02 23:59:59.500";
        let epoch = parse_calendar_utc(rendered).unwrap();
        assert_eq!(format_calendar_utc(epoch), rendered);
    }
}
