use egui::{Color32, Vec2};

use super::card::CARD_NATURAL_SIZE;

pub const MARGIN_SM: f32 = 8.0;
pub const MARGIN_MD: f32 = 12.0;
pub const MARGIN_LG: f32 = 16.0;

pub const FONT_SIZE_SM: f32 = 16.0;
pub const FONT_SIZE_MD: f32 = 24.0;
pub const FONT_SIZE_LG: f32 = 40.0;

pub const UI_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=2.0;

pub const BUTTON_MIN_HEIGHT: f32 = 24.0;
pub const BUTTON_MIN_WIDTH: f32 = 80.0;

pub const CARD_DISPLAY_WIDTH: f32 = 100.0;
/// Cards in the hand keep the aspect ratio of the image files
pub const CARD_DISPLAY_SIZE: Vec2 = Vec2::new(
    CARD_DISPLAY_WIDTH,
    CARD_DISPLAY_WIDTH * CARD_NATURAL_SIZE.y / CARD_NATURAL_SIZE.x,
);
pub const PICKER_WIDTH: f32 = 240.0;

pub const MESSAGE_SUCCESS: Color32 = Color32::from_rgb(0x2e, 0xa0, 0x43);
pub const MESSAGE_ERROR: Color32 = Color32::from_rgb(0xd0, 0x3b, 0x3b);
