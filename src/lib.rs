/*!
This crate provides a small vocabulary of ANSI escape codes for coloring and
styling terminal output.

Every code is an [`AnsiCode`]: a piece of text holding one complete escape
sequence. Codes are written to any `io::Write` sink, in order, and the
terminal interprets them left to right. Nothing is parsed, buffered or
detected; the bytes you write are the bytes that arrive.

# Organization

[`color`], [`background`] and [`effect`] hold the named codes for the 16
standard foreground colors, the 16 standard background colors and the text
effects. The `palette` and `rgb` functions in those modules build codes for
256 color and 24-bit terminals.

The [`Render`] trait is implemented by everything that can be written:
codes, [`StyleState`], the [`ENDL`] newline marker and plain strings.
[`WriteAnsi`] adds a chaining `put` method to every writer. All of these
values also implement `Display`.

[`StyleState`] bundles a foreground, a background and an effect so they are
always written together.

On Windows, call [`enable_virtual_terminal`] once at startup so the console
interprets escape sequences instead of printing them.

# Example

```rust,no_run
# fn test() -> std::io::Result<()> {
use std::io;
use kani::{WriteAnsi, background, color, effect, ENDL};

kani::enable_virtual_terminal();

let mut stdout = io::stdout().lock();
stdout
    .put(&background::WHITE)?
    .put(&color::RED)?
    .put("Hello, World!")?
    .put(&effect::RESET)?
    .put(&ENDL)?;
# Ok(()) }
```

Styling is never reset for you. Write [`effect::RESET`] before handing the
terminal back.
*/

pub mod ansi;
mod console;
mod traits;
mod types;

pub use ansi::{background, color, effect};
pub use console::enable_virtual_terminal;
pub use traits::{Render, WriteAnsi};
pub use types::{AnsiCode, ENDL, Endl, StyleState};
