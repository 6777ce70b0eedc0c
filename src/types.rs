// statsd-udp - A minimal Statsd client for Rust
//
// Copyright 2026 The statsd-udp Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// Potential categories an error from this library falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// The address of the Statsd server could not be parsed or resolved.
    ResolutionError,
    /// The local UDP socket could not be opened.
    SocketError,
    /// A metric could not be written to the transport.
    TransportError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::ResolutionError => "resolution error".fmt(f),
            ErrorKind::SocketError => "socket error".fmt(f),
            ErrorKind::TransportError => "transport error".fmt(f),
        }
    }
}

/// Error generated by this library, potentially wrapping an I/O error.
#[derive(Debug)]
pub struct MetricError {
    repr: ErrorRepr,
}

#[derive(Debug)]
enum ErrorRepr {
    WithDescription(ErrorKind, &'static str),
    IoError(ErrorKind, io::Error),
}

impl MetricError {
    /// Return the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::WithDescription(kind, _) => kind,
            ErrorRepr::IoError(kind, _) => kind,
        }
    }

    /// Wrap an I/O error, tagging it with the stage it happened in.
    pub(crate) fn from_io(kind: ErrorKind, err: io::Error) -> MetricError {
        MetricError {
            repr: ErrorRepr::IoError(kind, err),
        }
    }
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::WithDescription(kind, desc) => write!(f, "{}: {}", kind, desc),
            ErrorRepr::IoError(kind, ref err) => write!(f, "{}: {}", kind, err),
        }
    }
}

impl error::Error for MetricError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::IoError(_, ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<(ErrorKind, &'static str)> for MetricError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> MetricError {
        MetricError {
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

impl From<(ErrorKind, io::Error)> for MetricError {
    fn from((kind, err): (ErrorKind, io::Error)) -> MetricError {
        MetricError::from_io(kind, err)
    }
}

pub type MetricResult<T> = Result<T, MetricError>;

#[cfg(test)]
mod tests {
    use super::{ErrorKind, MetricError};
    use std::error::Error;
    use std::io;

    #[test]
    fn test_metric_error_kind_with_description() {
        let err = MetricError::from((ErrorKind::TransportError, "wrote no bytes"));
        assert_eq!(ErrorKind::TransportError, err.kind());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_metric_error_kind_io_error() {
        let io_err = io::Error::new(io::ErrorKind::AddrInUse, "address in use");
        let err = MetricError::from((ErrorKind::SocketError, io_err));
        assert_eq!(ErrorKind::SocketError, err.kind());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_metric_error_display_with_description() {
        let err = MetricError::from((ErrorKind::ResolutionError, "No socket addresses yielded"));
        assert_eq!("resolution error: No socket addresses yielded", err.to_string());
    }

    #[test]
    fn test_metric_error_display_io_error() {
        let io_err = io::Error::new(io::ErrorKind::Other, "broken pipe");
        let err = MetricError::from((ErrorKind::TransportError, io_err));
        assert_eq!("transport error: broken pipe", err.to_string());
    }
}
