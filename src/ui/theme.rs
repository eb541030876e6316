use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Color scheme of the whole surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    White,
    Green,
    Blue,
    Pink,
}

/// Concrete colors for one theme.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Highlight for the focused button and the running clock.
    pub accent: Color,
}

const ALL: [Theme; 4] = [Theme::White, Theme::Green, Theme::Blue, Theme::Pink];

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        ALL.into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn names() -> Vec<&'static str> {
        ALL.iter().map(|theme| theme.name()).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::White => "white",
            Theme::Green => "green",
            Theme::Blue => "blue",
            Theme::Pink => "pink",
        }
    }

    /// Next theme in the cycle, wrapping after the last one.
    pub fn next(self) -> Self {
        let index = ALL.iter().position(|t| *t == self).unwrap_or(0);
        ALL[(index + 1) % ALL.len()]
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::White => Palette {
                background: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x00, 0x00, 0x00),
                accent: Color::Rgb(0x38, 0x38, 0x38),
            },
            Theme::Green => Palette {
                background: Color::Rgb(0xd7, 0xff, 0xe4),
                text: Color::Rgb(0x58, 0x68, 0x5e),
                accent: Color::Rgb(0x2f, 0x4f, 0x4f),
            },
            Theme::Blue => Palette {
                background: Color::Rgb(0x89, 0xcf, 0xf0),
                text: Color::Rgb(0x00, 0x66, 0xb2),
                accent: Color::Rgb(0x02, 0x09, 0x3b),
            },
            Theme::Pink => Palette {
                background: Color::Rgb(0xff, 0xb6, 0xc1),
                text: Color::Rgb(0xff, 0x69, 0xb4),
                accent: Color::Rgb(0xff, 0x14, 0x93),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme_and_wraps() {
        let mut theme = Theme::White;
        let mut seen = vec![theme];
        for _ in 0..3 {
            theme = theme.next();
            seen.push(theme);
        }
        assert_eq!(seen, ALL.to_vec());
        assert_eq!(theme.next(), Theme::White);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Theme::from_name("Blue"), Some(Theme::Blue));
        assert_eq!(Theme::from_name(" pink "), Some(Theme::Pink));
        assert_eq!(Theme::from_name("purple"), None);
    }
}
