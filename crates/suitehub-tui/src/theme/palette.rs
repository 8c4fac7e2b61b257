//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Catalog families ---
/// Cycled by family position so each family keeps a stable color
pub const FAMILY_COLORS: [Color; 6] = [
    Color::Magenta,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::LightRed,
    Color::LightCyan,
];

// --- Form inputs ---
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);
pub const INPUT_INACTIVE_BG: Color = Color::Rgb(40, 40, 50);
