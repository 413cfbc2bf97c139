//! Sweep configuration and error type.

use std::collections::TryReserveError;
use std::fmt;

use crate::geom::Rect;

/// Default world frame: every ray terminates on this box at the latest.
pub const DEFAULT_FRAME: Rect = Rect {
    xmin: -100.0,
    ymin: -100.0,
    xmax: 1100.0,
    ymax: 800.0,
};

/// Sweep configuration.
///
/// The frame must enclose all expected scene content; it is fixed per
/// configuration and never derived from the blockers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    pub frame: Rect,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            frame: DEFAULT_FRAME,
        }
    }
}

/// Errors surfaced by the sweep.
///
/// Ray misses and degenerate geometry are not errors; the only abnormal
/// outcome is running out of memory while growing a buffer.
#[derive(Debug)]
pub enum SweepError {
    Allocation(TryReserveError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Allocation(e) => write!(f, "sweep buffer allocation failed: {e}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Allocation(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for SweepError {
    fn from(e: TryReserveError) -> Self {
        SweepError::Allocation(e)
    }
}
