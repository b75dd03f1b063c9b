use foundation::math::Vec2;

/// Fixed satellite circle diameter, px.
pub const SATELLITE_DIAMETER_PX: f64 = 12.0;

/// Clearance between a glyph's rim and the first ring, px.
const RING_OFFSET_PX: f64 = 10.0;

/// Radius increase per additional ring, px.
const RING_STEP_PX: f64 = SATELLITE_DIAMETER_PX + 5.0;

/// Most satellites one ring holds.
pub const MAX_PER_RING: usize = 12;

/// Lays out `count` country-count satellites on concentric rings around a
/// glyph.
///
/// Each ring is filled index-ordered starting at angle 0, evenly dividing
/// the circle among the satellites that ring actually holds; overflow spills
/// onto the next ring 17 px further out, repeating until all are placed.
/// Purely decorative: satellites are never hit-tested.
pub fn satellite_positions(center: Vec2, glyph_diameter: f64, count: u32) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(count as usize);
    let mut remaining = count as usize;
    let mut radius = glyph_diameter * 0.5 + RING_OFFSET_PX;

    while remaining > 0 {
        let on_ring = remaining.min(MAX_PER_RING);
        let step = std::f64::consts::TAU / on_ring as f64;
        for i in 0..on_ring {
            let angle = i as f64 * step;
            out.push(center + Vec2::new(angle.cos() * radius, angle.sin() * radius));
        }
        remaining -= on_ring;
        radius += RING_STEP_PX;
    }

    out
}
