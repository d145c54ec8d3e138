//! High-level runtime engine settings
//!
//! Selects live or preview mode, how many ticks a headless run takes, and
//! carries the render settings the engine passes through untouched

use crate::configuration::config::RunMode;
use crate::simulation::states::Point3;

/// Per-particle colours used by the live view, cycled by particle index
pub const PALETTE: [u32; 10] = [
    0x00ffff, // cyan
    0xff00ff, // magenta
    0xffff00, // yellow
    0x00ff00, // green
    0xff0000, // red
    0x0000ff, // blue
    0xff8800, // orange
    0x8800ff, // purple
    0x00ff88, // spring green
    0xff0088, // rose
];

pub const DEFAULT_TRAIL_COLOR: &str = "#00ffff";

pub const DEFAULT_STEPS: u64 = 1000;

/// Colour of particle `i` as a `#rrggbb` string
pub fn palette_color(i: usize) -> String {
    format!("#{:06x}", PALETTE[i % PALETTE.len()])
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub show_trail: bool, // whether the renderer asks for trail geometry
    pub trail_color: String, // base colour, opaque to the engine
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_trail: true,
            trail_color: DEFAULT_TRAIL_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: RunMode, // live ticking or static preview
    pub steps: u64, // ticks taken by a headless run
    pub preview_points: usize, // steps in a preview trail
    pub preview_seed: Point3, // fixed start of every preview trail
    pub render: RenderSettings,
}
