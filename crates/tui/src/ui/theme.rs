use ratatui::style::Color;

/// Frutiger Aero palette: light-blue chrome, glassy surfaces, a green
/// display, red for withdrawals and errors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::Rgb(14, 24, 34),
            text: Color::Rgb(225, 240, 250),
            text_muted: Color::Rgb(150, 185, 215),
            dim: Color::Rgb(110, 130, 150),
            border: Color::Rgb(70, 110, 150),
            border_focused: Color::Rgb(0, 150, 255),
            accent: Color::Rgb(0, 150, 255),
            positive: Color::Rgb(100, 200, 0),
            negative: Color::Rgb(255, 100, 100),
            error: Color::Rgb(255, 100, 100),
        }
    }
}
