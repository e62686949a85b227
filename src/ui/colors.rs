use ratatui::style::Color;

// Marquee palette
pub const MARQUEE_GOLD: Color = Color::Rgb(255, 200, 60); // Cinema sign gold
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(165, 165, 165);
pub const TEXT_DIM: Color = Color::Rgb(110, 110, 110);
pub const HIGHLIGHT_BG: Color = Color::Rgb(45, 45, 45);
