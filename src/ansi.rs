//! Named ANSI escape codes and palette generators.
//!
//! Codes are grouped the way terminals group them: foreground colors live in
//! [`color`], background colors in [`background`] and text attributes in
//! [`effect`]. Every constant is a compile-time [`AnsiCode`].
//!
//! Later codes of the same kind override earlier ones. That is the
//! terminal's doing; nothing here tracks what has been written.
//!
//! [`AnsiCode`]: crate::AnsiCode

/// Expands to a `const` escape code of the form `ESC [ <sgr> m`.
macro_rules! sgr {
    ($($name:ident = $code:literal;)+) => {
        $(
            pub const $name: AnsiCode =
                AnsiCode::from_static(concat!("\x1B[", $code, "m"));
        )+
    };
}

/// Foreground colors.
pub mod color {
    use crate::AnsiCode;

    sgr! {
        BLACK = 30;
        RED = 31;
        GREEN = 32;
        YELLOW = 33;
        BLUE = 34;
        MAGENTA = 35;
        CYAN = 36;
        WHITE = 37;

        BRIGHT_BLACK = 90;
        BRIGHT_RED = 91;
        BRIGHT_GREEN = 92;
        BRIGHT_YELLOW = 93;
        BRIGHT_BLUE = 94;
        BRIGHT_MAGENTA = 95;
        BRIGHT_CYAN = 96;
        BRIGHT_WHITE = 97;
    }

    /// Foreground color from the 256 color palette.
    pub fn palette(index: u8) -> AnsiCode {
        AnsiCode::from(format!("\x1B[38;5;{index}m"))
    }

    /// 24-bit foreground color.
    pub fn rgb(r: u8, g: u8, b: u8) -> AnsiCode {
        AnsiCode::from(format!("\x1B[38;2;{r};{g};{b}m"))
    }
}

/// Background colors.
pub mod background {
    use crate::AnsiCode;

    sgr! {
        BLACK = 40;
        RED = 41;
        GREEN = 42;
        YELLOW = 43;
        BLUE = 44;
        MAGENTA = 45;
        CYAN = 46;
        WHITE = 47;

        BRIGHT_BLACK = 100;
        BRIGHT_RED = 101;
        BRIGHT_GREEN = 102;
        BRIGHT_YELLOW = 103;
        BRIGHT_BLUE = 104;
        BRIGHT_MAGENTA = 105;
        BRIGHT_CYAN = 106;
        BRIGHT_WHITE = 107;
    }

    /// Background color from the 256 color palette.
    pub fn palette(index: u8) -> AnsiCode {
        AnsiCode::from(format!("\x1B[48;5;{index}m"))
    }

    /// 24-bit background color.
    pub fn rgb(r: u8, g: u8, b: u8) -> AnsiCode {
        AnsiCode::from(format!("\x1B[48;2;{r};{g};{b}m"))
    }
}

/// Text effects.
pub mod effect {
    use crate::AnsiCode;

    sgr! {
        RESET = 0;
        BOLD = 1;
        DIM = 2;
        ITALIC = 3;
        UNDERLINE = 4;
        BLINK = 5;
        REVERSE = 7;
        HIDDEN = 8;
        STRIKETHROUGH = 9;
        DOUBLE_UNDERLINE = 21;
        FRAME = 51;
        ENCIRCLE = 52;
        OVERLINE = 53;
    }

    /// Palette color on the effect channel.
    ///
    /// SGR has no palette for effects, so this uses the foreground prefix
    /// and is byte for byte the same as [`color::palette`].
    ///
    /// [`color::palette`]: super::color::palette
    pub fn palette(index: u8) -> AnsiCode {
        super::color::palette(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{background, color, effect};

    #[test]
    fn named_foreground() {
        assert_eq!(color::BLACK.as_str(), "\x1B[30m");
        assert_eq!(color::RED.as_str(), "\x1B[31m");
        assert_eq!(color::WHITE.as_str(), "\x1B[37m");
        assert_eq!(color::BRIGHT_BLACK.as_str(), "\x1B[90m");
        assert_eq!(color::BRIGHT_RED.as_str(), "\x1B[91m");
        assert_eq!(color::BRIGHT_WHITE.as_str(), "\x1B[97m");
    }

    #[test]
    fn named_background() {
        assert_eq!(background::BLACK.as_str(), "\x1B[40m");
        assert_eq!(background::WHITE.as_str(), "\x1B[47m");
        assert_eq!(background::BRIGHT_BLACK.as_str(), "\x1B[100m");
        assert_eq!(background::BRIGHT_CYAN.as_str(), "\x1B[106m");
        assert_eq!(background::BRIGHT_WHITE.as_str(), "\x1B[107m");
    }

    #[test]
    fn named_effects() {
        let cases = [
            (effect::BOLD, "\x1B[1m"),
            (effect::DIM, "\x1B[2m"),
            (effect::ITALIC, "\x1B[3m"),
            (effect::UNDERLINE, "\x1B[4m"),
            (effect::BLINK, "\x1B[5m"),
            (effect::REVERSE, "\x1B[7m"),
            (effect::HIDDEN, "\x1B[8m"),
            (effect::STRIKETHROUGH, "\x1B[9m"),
            (effect::DOUBLE_UNDERLINE, "\x1B[21m"),
            (effect::FRAME, "\x1B[51m"),
            (effect::ENCIRCLE, "\x1B[52m"),
            (effect::OVERLINE, "\x1B[53m"),
        ];
        for (code, want) in cases {
            assert_eq!(code.as_str(), want);
        }
        assert_eq!(effect::RESET.as_str(), "\x1B[0m");
    }

    #[test]
    fn palette_covers_every_index() {
        for i in 0..=255u8 {
            assert_eq!(color::palette(i).as_str(), format!("\x1B[38;5;{}m", i));
            assert_eq!(
                background::palette(i).as_str(),
                format!("\x1B[48;5;{}m", i)
            );
        }
    }

    #[test]
    fn palette_has_no_padding() {
        assert_eq!(color::palette(0).as_str(), "\x1B[38;5;0m");
        assert_eq!(color::palette(7).as_str(), "\x1B[38;5;7m");
        assert_eq!(background::palette(255).as_str(), "\x1B[48;5;255m");
    }

    #[test]
    fn effect_palette_uses_foreground_prefix() {
        assert_eq!(effect::palette(200), color::palette(200));
        assert_eq!(effect::palette(9).as_str(), "\x1B[38;5;9m");
    }

    #[test]
    fn rgb_components_in_decimal() {
        assert_eq!(color::rgb(255, 0, 128).as_str(), "\x1B[38;2;255;0;128m");
        assert_eq!(background::rgb(0, 0, 0).as_str(), "\x1B[48;2;0;0;0m");
        assert_eq!(background::rgb(1, 20, 255).as_str(), "\x1B[48;2;1;20;255m");
    }
}
