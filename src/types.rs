use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// A single ANSI escape sequence, stored as text.
///
/// Named constants hold a `&'static str` and cost nothing to copy around.
/// Codes built at runtime by the palette generators own their text.
///
/// No validation happens on construction. A malformed sequence is accepted
/// and is simply not interpreted by the terminal.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AnsiCode(Cow<'static, str>);

impl AnsiCode {
    /// The empty sequence. Rendering it writes nothing.
    pub const EMPTY: AnsiCode = AnsiCode(Cow::Borrowed(""));

    /// Create a code from a static escape sequence.
    pub const fn from_static(code: &'static str) -> AnsiCode {
        AnsiCode(Cow::Borrowed(code))
    }

    /// Create a code that owns its escape sequence.
    pub fn new<S: Into<Cow<'static, str>>>(code: S) -> AnsiCode {
        AnsiCode(code.into())
    }

    /// Return the escape sequence as written to a sink.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this code writes no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for AnsiCode {
    fn from(code: &'static str) -> AnsiCode {
        AnsiCode::from_static(code)
    }
}

impl From<String> for AnsiCode {
    fn from(code: String) -> AnsiCode {
        AnsiCode(Cow::Owned(code))
    }
}

impl AsRef<str> for AnsiCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A foreground, background and effect bundled into one reusable token.
///
/// Applying a state always writes its three fragments in the order
/// foreground, background, effect. Empty fragments write nothing.
///
/// A state never emits a reset sequence. Use [`effect::RESET`] when the
/// styling should end, otherwise it carries over into later output.
///
/// [`effect::RESET`]: crate::effect::RESET
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct StyleState {
    fg: AnsiCode,
    bg: AnsiCode,
    effect: AnsiCode,
}

impl StyleState {
    /// Create a new state from a foreground, background and effect fragment.
    ///
    /// Any of them may be [`AnsiCode::EMPTY`] (or `""`).
    pub fn new<F, B, E>(fg: F, bg: B, effect: E) -> StyleState
    where
        F: Into<AnsiCode>,
        B: Into<AnsiCode>,
        E: Into<AnsiCode>,
    {
        StyleState { fg: fg.into(), bg: bg.into(), effect: effect.into() }
    }

    /// Get the foreground fragment.
    pub fn fg(&self) -> &AnsiCode {
        &self.fg
    }

    /// Get the background fragment.
    pub fn bg(&self) -> &AnsiCode {
        &self.bg
    }

    /// Get the effect fragment.
    pub fn effect(&self) -> &AnsiCode {
        &self.effect
    }

    /// Write this state to stdout.
    ///
    /// Errors are whatever stdout reports.
    pub fn apply(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock)
    }

    /// Write this state to the given writer.
    pub fn write_to<W: io::Write + ?Sized>(
        &self,
        wtr: &mut W,
    ) -> io::Result<()> {
        wtr.write_all(self.fg.as_str().as_bytes())?;
        wtr.write_all(self.bg.as_str().as_bytes())?;
        wtr.write_all(self.effect.as_str().as_bytes())
    }
}

impl fmt::Display for StyleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.fg, self.bg, self.effect)
    }
}

/// Writes a single `\n`.
///
/// There is no flush and no platform line ending translation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Endl;

/// The newline marker.
pub const ENDL: Endl = Endl;

impl fmt::Display for Endl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")
    }
}

impl Endl {
    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        wtr: &mut W,
    ) -> io::Result<()> {
        wtr.write_all(b"\n")
    }
}
