use crate::{AnsiCode, Endl, StyleState};
use std::io;

/// This trait describes values that know how to write themselves to a sink.
///
/// Rendering appends bytes and never reads, seeks or flushes. Rendering a
/// sequence of values produces the same bytes as rendering each one in turn.
pub trait Render {
    /// Write this value to the given writer.
    ///
    /// If the writer fails, its error is returned unchanged.
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()>;
}

impl Render for AnsiCode {
    #[inline]
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        wtr.write_all(self.as_str().as_bytes())
    }
}

impl Render for StyleState {
    #[inline]
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        self.write_to(wtr)
    }
}

impl Render for Endl {
    #[inline]
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        self.write_to(wtr)
    }
}

impl Render for str {
    #[inline]
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        wtr.write_all(self.as_bytes())
    }
}

impl Render for String {
    #[inline]
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        self.as_str().render(wtr)
    }
}

impl<T: ?Sized + Render> Render for &T {
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        (**self).render(wtr)
    }
}

impl<T: ?Sized + Render> Render for Box<T> {
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        (**self).render(wtr)
    }
}

impl<T: Render> Render for [T] {
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        for item in self {
            item.render(wtr)?;
        }
        Ok(())
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        self.as_slice().render(wtr)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, wtr: &mut dyn io::Write) -> io::Result<()> {
        self.as_slice().render(wtr)
    }
}

/// An extension of `io::Write` for chaining renderable values.
///
/// Every writer gets this for free:
///
/// ```
/// use kani::{WriteAnsi, background, color, ENDL};
///
/// let mut out = Vec::new();
/// out.put(&background::WHITE)?
///     .put(&color::RED)?
///     .put("Hello, World!")?
///     .put(&ENDL)?;
/// assert_eq!(out, b"\x1B[47m\x1B[31mHello, World!\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait WriteAnsi: io::Write {
    /// Render `value` and return this writer so calls can be chained.
    fn put<R: ?Sized + Render>(&mut self, value: &R) -> io::Result<&mut Self>;
}

impl<W: io::Write> WriteAnsi for W {
    #[inline]
    fn put<R: ?Sized + Render>(&mut self, value: &R) -> io::Result<&mut Self> {
        value.render(self)?;
        Ok(self)
    }
}
