//! Constants used throughout the UI.

use eframe::egui::Color32;

/// Width of the explorer and properties side panels.
pub const SIDE_PANEL_WIDTH: f32 = 300.0;

pub const STATUS_READY: Color32 = Color32::from_rgb(34, 197, 94);
pub const STATUS_LOADING: Color32 = Color32::from_rgb(234, 179, 8);
pub const STATUS_FAILED: Color32 = Color32::from_rgb(239, 68, 68);

pub const RESOURCES_LABEL: &str = "Resources: Menagerie (Google DeepMind)";
