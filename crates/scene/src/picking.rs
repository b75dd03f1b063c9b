use foundation::math::Vec2;

use crate::glyph::Glyph;
use crate::record::RecordId;

/// First-match point picking over a glyph list.
///
/// Ordering contract:
/// - Glyphs are tested in list order and the first hit wins. When glyphs
///   overlap (the collision resolver is best-effort), the earlier record
///   shadows the later one, which keeps click and hover results stable for a
///   given layout pass.
/// - A point exactly on the rim (distance == radius) is a miss; containment
///   is strict.
pub fn pick_point(glyphs: &[Glyph], point: Vec2) -> Option<&Glyph> {
    glyphs.iter().find(|g| g.contains(point))
}

/// [`pick_point`], resolved to the hit record's id.
pub fn pick_record(glyphs: &[Glyph], point: Vec2) -> Option<RecordId> {
    pick_point(glyphs, point).map(|g| g.record)
}

#[cfg(test)]
mod tests {
    use super::{pick_point, pick_record};
    use crate::glyph::Glyph;
    use crate::record::RecordId;
    use foundation::math::Vec2;

    fn g(id: u32, x: f64, y: f64, d: f64) -> Glyph {
        Glyph::new(RecordId(id), Vec2::new(x, y), d)
    }

    #[test]
    fn picks_glyph_containing_the_point() {
        let glyphs = vec![g(0, 100.0, 100.0, 40.0), g(1, 300.0, 100.0, 60.0)];
        assert_eq!(pick_record(&glyphs, Vec2::new(300.0, 110.0)), Some(RecordId(1)));
        assert_eq!(pick_record(&glyphs, Vec2::new(100.0, 100.0)), Some(RecordId(0)));
    }

    #[test]
    fn misses_outside_every_radius() {
        let glyphs = vec![g(0, 100.0, 100.0, 40.0)];
        assert!(pick_point(&glyphs, Vec2::new(200.0, 200.0)).is_none());
        // Rim is exclusive.
        assert!(pick_point(&glyphs, Vec2::new(120.0, 100.0)).is_none());
    }

    #[test]
    fn overlapping_glyphs_resolve_to_the_first_in_list_order() {
        let glyphs = vec![g(3, 100.0, 100.0, 50.0), g(7, 105.0, 100.0, 50.0)];
        assert_eq!(pick_record(&glyphs, Vec2::new(104.0, 100.0)), Some(RecordId(3)));
    }

    #[test]
    fn empty_list_picks_nothing() {
        assert!(pick_point(&[], Vec2::new(0.0, 0.0)).is_none());
    }
}
