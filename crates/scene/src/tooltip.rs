use foundation::math::Vec2;

use crate::record::RiverRecord;

/// Offset from the pointer to the tooltip anchor, px on both axes.
const POINTER_OFFSET_PX: f64 = 10.0;

/// Hover tooltip state, fully recomputed on every pointer move.
///
/// Nothing here survives a layout change: the next move event rebuilds the
/// whole struct from the current glyph positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub anchor: Vec2,
    pub text: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            anchor: Vec2::new(0.0, 0.0),
            text: String::new(),
        }
    }

    /// Builds the state for one pointer-move: visible and anchored just
    /// past the pointer when a glyph is hovered, hidden otherwise.
    pub fn from_hover(hit: Option<&RiverRecord>, pointer: Vec2) -> Self {
        let Some(record) = hit else {
            return Self::hidden();
        };
        Self {
            visible: true,
            anchor: pointer + Vec2::new(POINTER_OFFSET_PX, POINTER_OFFSET_PX),
            text: format!(
                "Name: {}\nLength: {} km\nCountries: {}",
                record.name, record.length_km, record.countries
            ),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::Tooltip;
    use crate::record::RiverRecord;
    use foundation::math::Vec2;

    #[test]
    fn hover_shows_record_fields_near_the_pointer() {
        let record = RiverRecord::new("Nile", 6650.0, 11, "Africa");
        let t = Tooltip::from_hover(Some(&record), Vec2::new(200.0, 300.0));
        assert!(t.visible);
        assert_eq!(t.anchor, Vec2::new(210.0, 310.0));
        assert!(t.text.contains("Nile"));
        assert!(t.text.contains("6650"));
        assert!(t.text.contains("11"));
        assert_eq!(t.lines().count(), 3);
    }

    #[test]
    fn no_hit_hides_the_tooltip() {
        let t = Tooltip::from_hover(None, Vec2::new(5.0, 5.0));
        assert!(!t.visible);
        assert!(t.text.is_empty());
    }
}
