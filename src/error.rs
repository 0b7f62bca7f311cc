//! Errors and rendering diagnostics
//!
//! Drawing never fails. A draw call that cannot be honored is skipped and a
//! [`Diagnostic`] is handed to the canvas' [`DiagnosticSink`]. Only
//! construction and the panel adapter return [`Error`].

use display_interface::DisplayError;
use thiserror::Error;

/// Crate error type
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A bit-plane could not be allocated; the canvas was not created
    #[error("failed to allocate {bytes} bytes for the {plane} plane")]
    AllocationFailure {
        /// Which plane failed ("black" or "red")
        plane: &'static str,
        /// Requested plane size
        bytes: usize,
    },

    /// A raw parameter was rejected
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The panel is not initialized or is in deep sleep
    #[error("display not initialized or asleep")]
    NotReady,

    /// The bus or a control pin failed
    #[error("display interface error: {0:?}")]
    Interface(DisplayError),
}

// `DisplayError` does not implement `PartialEq`; all of its variants are
// unit variants, so comparing discriminants is equivalent to a derive.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Error::AllocationFailure { plane: a, bytes: b },
                Error::AllocationFailure { plane: c, bytes: d },
            ) => a == c && b == d,
            (Error::InvalidParameter(a), Error::InvalidParameter(b)) => a == b,
            (Error::NotReady, Error::NotReady) => true,
            (Error::Interface(a), Error::Interface(b)) => {
                core::mem::discriminant(a) == core::mem::discriminant(b)
            }
            _ => false,
        }
    }
}

impl Eq for Error {}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Interface(e)
    }
}

/// An advisory event emitted when a draw call is skipped or adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A logical or physical coordinate fell outside its extents
    BoundsViolation {
        /// Operation that rejected the coordinate
        op: &'static str,
        /// Offending x coordinate
        x: i32,
        /// Offending y coordinate
        y: i32,
    },
    /// A parameter was rejected or clamped
    InvalidParameter {
        /// Operation that rejected the parameter
        op: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },
}

/// Receiver for [`Diagnostic`] events
pub trait DiagnosticSink {
    /// Handle one diagnostic
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::BoundsViolation { op, x, y } => {
                log::debug!("{}: ({}, {}) exceeds the display range", op, x, y);
            }
            Diagnostic::InvalidParameter { op, reason } => {
                log::debug!("{}: {}", op, reason);
            }
        }
    }
}

impl DiagnosticSink for alloc::vec::Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
