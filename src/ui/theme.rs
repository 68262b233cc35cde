use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub accent: Color,    // Green, the store brand color
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,
    pub error: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color, // Row highlight for list selections
    pub banner: Color,       // Store title banner
    pub number: Color,       // Stock counts, rates, totals
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    accent: Color::Rgb(166, 227, 161),    // Green
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    highlight_bg: Color::Rgb(50, 50, 70),      // Slightly lighter BG for the selected row
    banner: Color::Rgb(137, 180, 250),         // Blue banner text
    number: Color::Rgb(250, 179, 135),         // Orange for amounts
};
