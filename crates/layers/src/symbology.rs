use foundation::color::Rgb;
use rand::Rng;
use scene::table::RiverTable;

/// Session color table: continent name to fill color, insertion-ordered.
///
/// Assignment walks the table once in row order and gives each
/// previously-unseen continent a random color. It runs at load time, not per
/// redraw, so colors are stable for the whole session.
///
/// Ordering contract:
/// - `iter()` yields continents in first-encounter order; the legend relies
///   on this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContinentColors {
    entries: Vec<(String, Rgb)>,
}

impl ContinentColors {
    pub fn assign<R: Rng>(table: &RiverTable, rng: &mut R) -> Self {
        let mut entries: Vec<(String, Rgb)> = Vec::new();
        for (_, record) in table.iter() {
            if entries.iter().any(|(name, _)| name == &record.continent) {
                continue;
            }
            let r: u8 = rng.gen_range(0..=255);
            let g: u8 = rng.gen_range(0..=255);
            let b: u8 = rng.gen_range(0..=255);
            entries.push((record.continent.clone(), Rgb::new(r, g, b)));
        }
        Self { entries }
    }

    pub fn color_for(&self, continent: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(name, _)| name == continent)
            .map(|(_, color)| *color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ContinentColors;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use scene::record::RiverRecord;
    use scene::table::RiverTable;

    fn sample() -> RiverTable {
        let mut t = RiverTable::new();
        t.push(RiverRecord::new("Nile", 6650.0, 11, "Africa"));
        t.push(RiverRecord::new("Amazon", 6400.0, 7, "South America"));
        t.push(RiverRecord::new("Congo", 4700.0, 9, "Africa"));
        t.push(RiverRecord::new("Danube", 2850.0, 10, "Europe"));
        t
    }

    #[test]
    fn one_color_per_continent_in_first_encounter_order() {
        let mut rng = SmallRng::seed_from_u64(1);
        let colors = ContinentColors::assign(&sample(), &mut rng);
        assert_eq!(colors.len(), 3);
        let names: Vec<&str> = colors.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Africa", "South America", "Europe"]);
    }

    #[test]
    fn repeated_continents_keep_their_first_color() {
        let mut rng = SmallRng::seed_from_u64(1);
        let colors = ContinentColors::assign(&sample(), &mut rng);
        // Both Africa rows resolve to the same entry.
        assert_eq!(colors.color_for("Africa"), colors.color_for("Africa"));
        assert!(colors.color_for("Antarctica").is_none());
    }

    #[test]
    fn same_seed_reproduces_the_palette() {
        let a = ContinentColors::assign(&sample(), &mut SmallRng::seed_from_u64(9));
        let b = ContinentColors::assign(&sample(), &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_table_assigns_nothing() {
        let mut rng = SmallRng::seed_from_u64(1);
        let colors = ContinentColors::assign(&RiverTable::new(), &mut rng);
        assert!(colors.is_empty());
    }
}
