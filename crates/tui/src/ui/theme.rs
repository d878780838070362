use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(160, 160, 160),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(110, 190, 120),
            negative: Color::Rgb(220, 120, 90),
            error: Color::Rgb(200, 80, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(246, 246, 242),
            surface: Color::Rgb(232, 234, 236),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(90, 90, 90),
            dim: Color::Rgb(120, 120, 120),
            accent: Color::Rgb(20, 110, 120),
            border: Color::Rgb(180, 185, 190),
            border_focused: Color::Rgb(20, 110, 120),
            positive: Color::Rgb(40, 130, 60),
            negative: Color::Rgb(180, 70, 40),
            error: Color::Rgb(180, 40, 40),
        }
    }

    pub fn for_mode(lightmode: bool) -> Self {
        if lightmode { Self::light() } else { Self::dark() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
