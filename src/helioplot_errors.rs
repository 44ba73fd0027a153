use hifitime::Epoch;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelioplotError {
    #[error("invalid sampling window: end epoch {end} is not after start epoch {start}")]
    InvalidRange { start: Epoch, end: Epoch },

    #[error("position lookup failed for body '{body}' at {epoch}")]
    PositionLookupFailed { body: String, epoch: Epoch },

    #[error("no feasible transfer rows in input")]
    EmptyInput,

    #[error("transfer grid is empty after densification")]
    EmptyGrid,

    #[error("degenerate cost range [{zmin}, {zmax}]: unable to derive contour levels")]
    DegenerateRange { zmin: f64, zmax: f64 },

    #[error("body '{identifier}' not found in catalog. Available names: {available}")]
    UnknownBody {
        identifier: String,
        available: String,
    },

    #[error("no valid bodies found in catalog: {0}")]
    EmptyCatalog(String),

    #[error("transfer grid CSV is missing column: {0}")]
    MissingColumn(String),

    #[error("invalid calendar date '{0}', expected format: YYYY MON DD HH:MM:SS.sss")]
    InvalidCalendarDate(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl PartialEq for HelioplotError {
    fn eq(&self, other: &Self) -> bool {
        use HelioplotError::*;
        match (self, other) {
            (InvalidRange { start: s1, end: e1 }, InvalidRange { start: s2, end: e2 }) => {
                s1 == s2 && e1 == e2
            }
            (
                PositionLookupFailed { body: b1, epoch: t1 },
                PositionLookupFailed { body: b2, epoch: t2 },
            ) => b1 == b2 && t1 == t2,
            (
                DegenerateRange { zmin: l1, zmax: h1 },
                DegenerateRange { zmin: l2, zmax: h2 },
            ) => l1 == l2 && h1 == h2,
            (UnknownBody { identifier: i1, .. }, UnknownBody { identifier: i2, .. }) => i1 == i2,
            (EmptyCatalog(a), EmptyCatalog(b)) => a == b,
            (MissingColumn(a), MissingColumn(b)) => a == b,
            (InvalidCalendarDate(a), InvalidCalendarDate(b)) => a == b,

            // Wrapped errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (YamlError(_), YamlError(_)) => true,

            // Unit variants
            (EmptyInput, EmptyInput) => true,
            (EmptyGrid, EmptyGrid) => true,

            _ => false,
        }
    }
}
