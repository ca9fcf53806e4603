use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(0, 0, 0);
pub const BG_PANEL: Color = Color::Rgb(12, 12, 12);
pub const FG_PRIMARY: Color = Color::Rgb(190, 190, 190);
pub const FG_DIM: Color = Color::Rgb(128, 128, 128);

pub const BAR_BG: Color = Color::Rgb(23, 52, 127);
pub const BAR_TEXT: Color = Color::Rgb(235, 240, 255);

pub const BORDER_IDLE: Color = Color::Rgb(61, 120, 120);
pub const BORDER_FOCUS: Color = Color::Rgb(187, 94, 0);

pub const REGION_BORDER: Color = Color::Rgb(160, 160, 160);
pub const SELECTED_BG: Color = Color::Rgb(196, 180, 0);
pub const SELECTED_FG: Color = Color::Rgb(20, 20, 20);
pub const SELECTED_BORDER: Color = Color::Rgb(255, 255, 0);

pub const RESULT_FG: Color = Color::Rgb(120, 220, 120);
pub const ERROR_FG: Color = Color::Rgb(235, 80, 80);

pub const BUTTON_BG: Color = Color::Rgb(52, 52, 52);
pub const BUTTON_TEXT: Color = Color::Rgb(230, 230, 230);
