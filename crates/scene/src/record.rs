/// Index of a row in a [`RiverTable`](crate::table::RiverTable).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(pub u32);

impl RecordId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// One immutable input row.
///
/// `length_km` is NaN when the source field was missing or unparseable.
/// Negative lengths are kept as-is; the diameter scale is unclamped and will
/// extrapolate below its range for them.
#[derive(Debug, Clone, PartialEq)]
pub struct RiverRecord {
    pub name: String,
    pub length_km: f64,
    pub countries: u32,
    pub continent: String,
}

impl RiverRecord {
    pub fn new(
        name: impl Into<String>,
        length_km: f64,
        countries: u32,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            length_km,
            countries,
            continent: continent.into(),
        }
    }

    /// Filter rule: only eligible records are laid out, drawn, or selectable.
    ///
    /// NaN and exactly-zero lengths are excluded; everything else passes.
    pub fn is_eligible(&self) -> bool {
        !self.length_km.is_nan() && self.length_km != 0.0
    }
}
