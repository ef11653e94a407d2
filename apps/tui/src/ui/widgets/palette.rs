use metafinder_core::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub baseline: Color,
    pub matched: Color,
    pub focus: Color,
}

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                baseline: Color::DarkGray,
                matched: Color::Green,
                focus: Color::Yellow,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                baseline: Color::Gray,
                matched: Color::Rgb(0, 128, 0),
                focus: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border(&self, focused: bool) -> Style {
        let color = if focused { self.accent } else { self.muted };
        Style::default().fg(color)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.background_or_black())
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    const fn background_or_black(&self) -> Color {
        match self.background {
            Color::Reset => Color::Black,
            color => color,
        }
    }
}
