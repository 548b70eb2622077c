//! Score-derived styling tiers for external renderers.
//!
//! The margin doodler and the reading typography both key their look
//! off the AI-Q score. The mappings live here so every renderer agrees
//! on the tier edges; the renderers themselves subscribe to progress
//! updates and re-style independently.

use serde::Serialize;

/// Pen styling for the margin doodler canvases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    /// Stroke color as a CSS hex value.
    pub color: &'static str,
    /// Multiplier applied to the renderer's base stroke width.
    pub width_factor: f64,
    /// Global alpha of the stroke.
    pub opacity: f64,
    /// Shadow blur radius; 0 disables the glow.
    pub glow: u8,
}

/// Stroke tier for a score. Four bands: rough gray below 70, clean blue
/// to 89, glowing purple to 109, emerald from 110 up.
pub fn stroke_style(iq: u64) -> StrokeStyle {
    if iq < 70 {
        StrokeStyle {
            color: "#6b7280",
            width_factor: 0.8,
            opacity: 0.6,
            glow: 0,
        }
    } else if iq < 90 {
        StrokeStyle {
            color: "#3b82f6",
            width_factor: 1.0,
            opacity: 0.7,
            glow: 0,
        }
    } else if iq < 110 {
        StrokeStyle {
            color: "#7c3aed",
            width_factor: 1.2,
            opacity: 0.8,
            glow: 2,
        }
    } else {
        StrokeStyle {
            color: "#059669",
            width_factor: 1.4,
            opacity: 0.9,
            glow: 4,
        }
    }
}

/// Typography sophistication level for the reading view, 0 (baseline)
/// through 4.
pub fn typography_level(iq: u64) -> u8 {
    if iq < 100 {
        0
    } else if iq < 120 {
        1
    } else if iq < 140 {
        2
    } else if iq < 160 {
        3
    } else {
        4
    }
}
