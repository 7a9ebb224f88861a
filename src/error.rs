use std::error::Error;
use std::fmt;

/// Errors the engine can report.
///
/// Every failure is surfaced synchronously to the caller before any state
/// changes; a mutator either fully succeeds or leaves the prior board
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Invalid board dimensions or scale at construction or resize.
    Configuration {
        width: u32,
        height: u32,
        scale: u32,
        reason: &'static str,
    },
    /// A coordinate outside `[0, cols) x [0, rows)`.
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::Configuration {
                width,
                height,
                scale,
                reason,
            } => write!(
                f,
                "invalid board configuration {}x{} at scale {}: {}",
                width, height, scale, reason
            ),
            LifeError::OutOfBounds { x, y, cols, rows } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} grid",
                x, y, cols, rows
            ),
        }
    }
}

impl Error for LifeError {}
