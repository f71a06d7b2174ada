/// Maximum number of products compared side by side.
pub const MAX_SELECTION: usize = 3;

/// Result of toggling a product in or out of the comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set already held [`MAX_SELECTION`] products; nothing changed.
    Full,
}

/// Ordered set of up to [`MAX_SELECTION`] distinct product ids.
///
/// The only mutation is [`Selection::toggle`] (plus [`Selection::clear`]),
/// so the length bound and uniqueness hold by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection by toggling each id in turn.
    ///
    /// Repeated ids cancel out and ids beyond capacity are dropped, exactly as
    /// if a user had clicked them in that order.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.toggle(id.as_ref());
        }
        selection
    }

    /// Removes `id` if present, appends it if there is room, otherwise no-op.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(position) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(position);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Full;
        }
        self.ids.push(id.to_string());
        ToggleOutcome::Added
    }

    /// Non-mutating form of [`Selection::toggle`].
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    /// Free slots left before the set is full.
    pub fn remaining(&self) -> usize {
        MAX_SELECTION - self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_empty_adds() {
        let selection = Selection::new().toggled("a");
        assert_eq!(selection.ids(), ["a"]);
    }

    #[test]
    fn test_toggle_when_full_is_noop() {
        let mut selection = Selection::from_ids(["a", "b", "c"]);
        assert_eq!(selection.toggle("d"), ToggleOutcome::Full);
        assert_eq!(selection.ids(), ["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_present_removes_and_keeps_order() {
        let mut selection = Selection::from_ids(["a", "b", "c"]);
        assert_eq!(selection.toggle("b"), ToggleOutcome::Removed);
        assert_eq!(selection.ids(), ["a", "c"]);
        assert_eq!(selection.toggle("d"), ToggleOutcome::Added);
        assert_eq!(selection.ids(), ["a", "c", "d"]);
    }

    #[test]
    fn test_retoggled_id_moves_to_end() {
        let base = Selection::from_ids(["a", "b"]);
        assert_eq!(base.toggled("a").toggled("a").ids(), ["b", "a"]);
    }

    #[test]
    // Membership is restored, order is not: a re-added id goes to the end.
    fn test_toggle_twice_restores_membership_not_order() {
        let bases = [
            Selection::new(),
            Selection::from_ids(["a"]),
            Selection::from_ids(["a", "b"]),
            Selection::from_ids(["a", "b", "c"]),
        ];
        for base in bases {
            for id in ["a", "b", "c", "x"] {
                if base.len() < MAX_SELECTION || base.contains(id) {
                    let round_trip = base.toggled(id).toggled(id);
                    // a present id is re-appended at the end, so compare membership
                    let mut expected = base.ids().to_vec();
                    let mut actual = round_trip.ids().to_vec();
                    expected.sort();
                    actual.sort();
                    assert_eq!(actual, expected);
                    if !base.contains(id) {
                        assert_eq!(round_trip, base);
                    }
                }
            }
        }
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut selection = Selection::new();
        for id in ["a", "b", "c", "d", "e", "a", "f", "g"] {
            selection.toggle(id);
            assert!(selection.len() <= MAX_SELECTION);
        }
    }

    #[test]
    fn test_from_ids_cancels_duplicates() {
        let selection = Selection::from_ids(["a", "b", "a"]);
        assert_eq!(selection.ids(), ["b"]);
    }

    #[test]
    fn test_remaining_and_clear() {
        let mut selection = Selection::from_ids(["a", "b"]);
        assert_eq!(selection.remaining(), 1);
        assert!(!selection.is_full());
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.remaining(), MAX_SELECTION);
    }
}
