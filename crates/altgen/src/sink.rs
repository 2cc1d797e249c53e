//! Destinations for generated source.

use alloc::vec::Vec;
use core::{convert::Infallible, fmt};

/// A byte destination the emitter writes generated source into.
///
/// Generated source is written incrementally and never read back. Block code
/// is copied verbatim, so a sink receives raw bytes rather than `str`.
pub trait Sink {
    /// Error produced when a write fails.
    type Error;

    /// Writes all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when the bytes cannot be written.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Writes formatted text, e.g. a line number, without allocating.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when the formatted bytes cannot be written.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error>
    where
        Self: Sized,
    {
        let mut bridge = FmtBridge {
            sink: self,
            error: None,
        };
        match fmt::write(&mut bridge, args) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => match bridge.error {
                Some(e) => Err(e),
                // A `Display` impl failed on its own; nothing was lost.
                None => Ok(()),
            },
        }
    }
}

struct FmtBridge<'a, S: Sink> {
    sink: &'a mut S,
    error: Option<S::Error>,
}

impl<S: Sink> fmt::Write for FmtBridge<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_bytes(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

/// Adapts any [`std::io::Write`] into a [`Sink`].
///
/// The writer is used as-is; wrap files in a [`std::io::BufWriter`] since the
/// emitter issues many small writes.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flushes and returns the wrapped writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's error if flushing fails.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(bytes)
    }
}
