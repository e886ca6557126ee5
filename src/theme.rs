use eframe::egui::{self, Color32};

// Buttons
pub const PRIMARY_BUTTON_BG: Color32 = Color32::from_rgb(76, 154, 255);
pub const BUTTON_MAIN_TEXT: Color32 = Color32::from_rgb(255, 255, 255);

// Inputs
pub const INPUT_BG: Color32 = Color32::from_rgb(250, 250, 250);
pub const INPUT_BORDER: Color32 = Color32::LIGHT_GRAY;
pub const INPUT_HEIGHT: f32 = 40.0;
pub const INPUT_FONT_SIZE: f32 = 16.0;

pub const BORDER_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 67, 15);

// Sizing & Spacing
pub const ROUNDING_FRAME: f32 = 4.0;
pub const ROUNDING_BUTTON: f32 = 6.0;
pub const MIN_SIZE_BUTTON: egui::Vec2 = egui::Vec2::new(160.0, 40.0);
pub const BUTTON_FONT_SIZE: f32 = 16.0;
pub const SECTION_SPACING: f32 = 16.0;
