use foundation::color::Rgb;
use foundation::math::Vec2;

use crate::symbology::ContinentColors;

/// Legend block offset from the right viewport edge, px.
const OFFSET_FROM_RIGHT_PX: f64 = 200.0;

/// Legend block top, px.
const TOP_PX: f64 = 100.0;

/// Color swatch edge length (also the marker diameter), px.
pub const SWATCH_SIZE_PX: f64 = 20.0;

/// Gap between a swatch and its label, px.
const LABEL_GAP_PX: f64 = 10.0;

/// Vertical advance per legend row, px.
const ROW_HEIGHT_PX: f64 = SWATCH_SIZE_PX + LABEL_GAP_PX;

/// Legend text size, px.
pub const TEXT_SIZE_PX: f64 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    /// Swatch top-left corner.
    pub swatch_pos: Vec2,
    pub label_pos: Vec2,
}

/// Legend geometry for one viewport, in color-table order.
///
/// Geometry only; turning this into draw calls is the render crate's job.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSnapshot {
    pub title_pos: Vec2,
    pub subtitle_pos: Vec2,
    pub entries: Vec<LegendEntry>,
    /// Center of the red countries marker circle.
    pub marker_center: Vec2,
    pub marker_label_pos: Vec2,
}

pub fn legend_geometry(colors: &ContinentColors, viewport_width: f64) -> LegendSnapshot {
    let origin = Vec2::new(viewport_width - OFFSET_FROM_RIGHT_PX, TOP_PX);

    let entries: Vec<LegendEntry> = colors
        .iter()
        .enumerate()
        .map(|(row, (name, color))| {
            let y = origin.y + (row as f64 + 2.0) * ROW_HEIGHT_PX;
            LegendEntry {
                label: name.to_string(),
                color,
                swatch_pos: Vec2::new(origin.x, y),
                label_pos: Vec2::new(origin.x + SWATCH_SIZE_PX + LABEL_GAP_PX, y),
            }
        })
        .collect();

    // The countries marker hangs one row below the last continent entry.
    let marker_y = origin.y + (entries.len() as f64 + 2.0) * ROW_HEIGHT_PX;

    LegendSnapshot {
        title_pos: origin,
        subtitle_pos: Vec2::new(origin.x, origin.y + ROW_HEIGHT_PX),
        entries,
        marker_center: Vec2::new(origin.x, marker_y),
        marker_label_pos: Vec2::new(
            origin.x + SWATCH_SIZE_PX + LABEL_GAP_PX,
            marker_y - SWATCH_SIZE_PX * 0.5,
        ),
    }
}
