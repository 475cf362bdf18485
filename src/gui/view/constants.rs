//! View constants (layout/sizing).

pub(crate) const WINDOW_W: f32 = 700.0;
pub(crate) const WINDOW_H: f32 = 580.0;

pub(crate) const PADDING: f32 = 16.0;
pub(crate) const SECTION_SPACING: f32 = 14.0;

pub(crate) const STEP_TEXT: f32 = 16.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;
pub(crate) const LOG_TEXT: f32 = 12.0;

pub(crate) const BUTTON_W: f32 = 180.0;
pub(crate) const DIALOG_W: f32 = 360.0;
