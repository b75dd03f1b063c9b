/// Single-select toggle over record names.
///
/// Transition contract, driven by one click's pick result:
/// - `None --click(G)--> Selected(G)`
/// - `Selected(G) --click(G)--> None`
/// - `Selected(G) --click(H)--> Selected(H)`
/// - `Selected(G) --click(empty)--> Selected(G)` (unchanged)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// Applies one click. `None` means the click landed on empty space,
    /// which is a no-op for selection.
    ///
    /// Returns `true` if the selection changed.
    pub fn apply_click(&mut self, hit: Option<&str>) -> bool {
        let Some(name) = hit else {
            return false;
        };
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        } else {
            self.selected = Some(name.to_string());
        }
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn click_selects_and_second_click_deselects() {
        let mut s = Selection::new();
        assert!(s.apply_click(Some("Nile")));
        assert!(s.is_selected("Nile"));

        assert!(s.apply_click(Some("Nile")));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn clicking_another_glyph_moves_the_selection() {
        let mut s = Selection::new();
        s.apply_click(Some("Nile"));
        assert!(s.apply_click(Some("Amazon")));
        assert!(s.is_selected("Amazon"));
        assert!(!s.is_selected("Nile"));
    }

    #[test]
    fn clicking_empty_space_changes_nothing() {
        let mut s = Selection::new();
        assert!(!s.apply_click(None));
        assert_eq!(s.selected(), None);

        s.apply_click(Some("Nile"));
        assert!(!s.apply_click(None));
        assert!(s.is_selected("Nile"));
    }
}
