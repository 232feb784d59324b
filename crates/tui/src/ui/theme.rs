use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub amount: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(102, 126, 234),
            border: Color::Rgb(60, 66, 74),
            border_focused: Color::Rgb(118, 75, 162),
            amount: Color::Rgb(229, 115, 115),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
