use foundation::bounds::Aabb2;
use foundation::math::{LinearScale, Vec2};
use rand::Rng;
use scene::glyph::Glyph;
use scene::table::RiverTable;

/// Column width used to derive a column count from the viewport, px.
const COL_WIDTH_PX: f64 = 150.0;

/// Spacing below this is reported as degenerate (rendering still proceeds).
const MIN_USABLE_SPACING_PX: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphLayoutConfig {
    pub cols: usize,
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    /// Extra vertical gap between grid rows, px.
    pub row_gap: f64,
    pub diameter_min_px: f64,
    pub diameter_max_px: f64,
    /// Length domain mapped onto the diameter range. Unclamped: lengths
    /// outside the domain extrapolate past the diameter bounds.
    pub length_domain_min_km: f64,
    pub length_domain_max_km: f64,
    /// Minimum rim-to-rim clearance between glyphs, px.
    pub min_glyph_gap_px: f64,
    /// Random redraw budget per glyph before an overlap is accepted.
    pub max_attempts: u32,
}

impl Default for GlyphLayoutConfig {
    fn default() -> Self {
        Self {
            cols: 8,
            margin_left: 100.0,
            margin_top: 150.0,
            margin_right: 20.0,
            margin_bottom: 100.0,
            row_gap: 30.0,
            diameter_min_px: 30.0,
            diameter_max_px: 100.0,
            length_domain_min_km: 1000.0,
            length_domain_max_km: 7000.0,
            min_glyph_gap_px: 20.0,
            max_attempts: 50,
        }
    }
}

impl GlyphLayoutConfig {
    /// Column count for a viewport width: one column per 150 px, at least one.
    pub fn cols_for_width(width: f64) -> usize {
        ((width / COL_WIDTH_PX).floor() as usize).max(1)
    }

    fn diameter_scale(&self) -> LinearScale {
        LinearScale::new(
            self.length_domain_min_km,
            self.length_domain_max_km,
            self.diameter_min_px,
            self.diameter_max_px,
        )
    }

    /// Plot interior: the region random redraws are drawn from.
    fn interior(&self, width: f64, height: f64) -> Aabb2 {
        Aabb2::new(
            Vec2::new(self.margin_left, self.margin_top),
            Vec2::new(width - self.margin_right, height - self.margin_bottom),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    /// Row or column spacing collapsed below a usable size. The pass still
    /// runs; positions may overlap or leave the viewport.
    DegenerateSpacing { col_spacing: f64, row_spacing: f64 },
}

/// One layout pass's output. Glyphs keep the relative order of their source
/// rows; the list is rebuilt from scratch every pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlyphLayerSnapshot {
    pub glyphs: Vec<Glyph>,
    pub warnings: Vec<LayoutWarning>,
}

/// Lays the table out as a fixed-column grid of circles, decluttered by
/// greedy randomized retry.
///
/// Ordering contract:
/// - Output order is eligible-row order; ineligible rows keep their grid
///   slot (the cell stays empty) but produce no glyph.
/// - Collision checks run only against glyphs already placed in this pass.
///   Greedy by design: the result depends on insertion order and is not
///   globally collision-free.
///
/// On overlap the candidate is redrawn uniformly at random inside the plot
/// interior, up to `max_attempts` times; after that the last candidate is
/// accepted as-is.
pub fn layout_glyphs<R: Rng>(
    table: &RiverTable,
    width: f64,
    height: f64,
    config: &GlyphLayoutConfig,
    rng: &mut R,
) -> GlyphLayerSnapshot {
    let mut snapshot = GlyphLayerSnapshot::default();
    if table.is_empty() {
        return snapshot;
    }

    let cols = config.cols.max(1);
    let rows = table.len().div_ceil(cols);
    let col_spacing = (width - config.margin_left - config.margin_right) / cols as f64;
    let row_spacing = (height
        - config.margin_top
        - config.margin_bottom
        - config.row_gap * rows as f64)
        / rows as f64;

    if col_spacing < MIN_USABLE_SPACING_PX || row_spacing < MIN_USABLE_SPACING_PX {
        snapshot.warnings.push(LayoutWarning::DegenerateSpacing {
            col_spacing,
            row_spacing,
        });
    }

    let scale = config.diameter_scale();
    let interior = config.interior(width, height);

    for (index, (id, record)) in table.iter().enumerate() {
        if !record.is_eligible() {
            continue;
        }

        let col = index % cols;
        let row = index / cols;
        let mut center = Vec2::new(
            config.margin_left + col as f64 * col_spacing,
            config.margin_top + row as f64 * (row_spacing + config.row_gap),
        );
        let diameter = scale.map(record.length_km);

        let mut attempts = 0;
        'place: while attempts < config.max_attempts {
            for placed in &snapshot.glyphs {
                let min_dist = diameter * 0.5 + placed.radius() + config.min_glyph_gap_px;
                if center.dist(placed.center) < min_dist {
                    let Some(redrawn) = random_interior_point(&interior, rng) else {
                        // Degenerate interior, nowhere to redraw into.
                        break 'place;
                    };
                    center = redrawn;
                    attempts += 1;
                    continue 'place;
                }
            }
            break;
        }

        snapshot.glyphs.push(Glyph::new(id, center, diameter));
    }

    snapshot
}

fn random_interior_point<R: Rng>(interior: &Aabb2, rng: &mut R) -> Option<Vec2> {
    if !(interior.width() > 0.0 && interior.height() > 0.0) {
        return None;
    }
    Some(Vec2::new(
        rng.gen_range(interior.min.x..interior.max.x),
        rng.gen_range(interior.min.y..interior.max.y),
    ))
}
