//! Tracks which cells are lit this turn versus ever seen this level.
//! Pure state container; the FOV algorithms live in `game::fov`.

use std::collections::HashSet;

use crate::types::Pos;

/// `visible` is replaced wholesale every turn; `explored` only grows until
/// the level is torn down (descend or restart).
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    visible: HashSet<Pos>,
    explored: HashSet<Pos>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_visibility(&mut self, new_visible: HashSet<Pos>) {
        self.explored.extend(new_visible.iter().copied());
        self.visible = new_visible;
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.visible.contains(&pos)
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.explored.contains(&pos)
    }

    pub fn visible(&self) -> &HashSet<Pos> {
        &self.visible
    }

    pub fn explored(&self) -> &HashSet<Pos> {
        &self.explored
    }

    /// Level change or restart: both sets empty again.
    pub fn reset(&mut self) {
        self.visible.clear();
        self.explored.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(cells: &[(i32, i32)]) -> HashSet<Pos> {
        cells.iter().map(|(y, x)| Pos { y: *y, x: *x }).collect()
    }

    #[test]
    fn update_replaces_visible_wholesale() {
        let mut tracker = VisibilityTracker::new();
        tracker.update_visibility(set_of(&[(1, 1), (1, 2)]));
        tracker.update_visibility(set_of(&[(3, 3)]));

        assert!(tracker.is_visible(Pos { y: 3, x: 3 }));
        assert!(!tracker.is_visible(Pos { y: 1, x: 1 }), "old cells go dark");
    }

    #[test]
    fn explored_is_monotone_and_superset_of_visible() {
        let mut tracker = VisibilityTracker::new();
        let updates =
            [set_of(&[(0, 0), (0, 1)]), set_of(&[(5, 5)]), set_of(&[]), set_of(&[(0, 0), (9, 9)])];

        let mut previous_explored = HashSet::new();
        for update in updates {
            tracker.update_visibility(update);
            assert!(tracker.explored().is_superset(tracker.visible()));
            assert!(tracker.explored().is_superset(&previous_explored), "explored never shrinks");
            previous_explored = tracker.explored().clone();
        }

        assert!(tracker.is_explored(Pos { y: 0, x: 1 }));
        assert!(tracker.is_explored(Pos { y: 5, x: 5 }));
    }

    #[test]
    fn reset_empties_both_sets() {
        let mut tracker = VisibilityTracker::new();
        tracker.update_visibility(set_of(&[(2, 2)]));
        tracker.reset();
        assert!(tracker.visible().is_empty());
        assert!(tracker.explored().is_empty());
    }
}
