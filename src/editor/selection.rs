use crate::buffer::Position;

/// A selection: the fixed `anchor` and the moving `active` end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    /// Create a selection spanning `anchor` to `active`.
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Create an empty selection (a plain cursor) at `position`.
    pub const fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Whether anchor and active coincide.
    pub fn is_caret(&self) -> bool {
        self.anchor == self.active
    }

    /// Move the active end to `target`, keeping the anchor when `extend`.
    const fn moved_to(self, target: Position, extend: bool) -> Self {
        if extend {
            Self::new(self.anchor, target)
        } else {
            Self::caret(target)
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::caret(Position::default())
    }
}

/// The cursors of an editor. Always holds at least one selection; the
/// first one is the primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    selections: Vec<Selection>,
}

impl SelectionSet {
    /// A single selection.
    pub fn single(selection: Selection) -> Self {
        Self {
            selections: vec![selection],
        }
    }

    /// Build a set from `selections`, or `None` if it is empty.
    pub fn from_vec(selections: Vec<Selection>) -> Option<Self> {
        if selections.is_empty() {
            None
        } else {
            Some(Self { selections })
        }
    }

    /// One caret per position, or `None` if there are no positions.
    pub fn carets(positions: impl IntoIterator<Item = Position>) -> Option<Self> {
        Self::from_vec(positions.into_iter().map(Selection::caret).collect())
    }

    pub fn primary(&self) -> Selection {
        self.selections[0]
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.selections.iter()
    }

    /// Move every selection's active end to `find(active)`.
    ///
    /// Selections for which `find` returns `None` stay where they are. With
    /// `extend` the anchors are kept, otherwise each moved selection
    /// collapses to a caret. All targets are computed before the set is
    /// replaced, so the update is all-or-nothing from a reader's view.
    ///
    /// Returns `true` if `find` produced a target for any selection.
    pub fn apply<F>(&mut self, mut find: F, extend: bool) -> bool
    where
        F: FnMut(Position) -> Option<Position>,
    {
        let mut found = false;
        let next = self
            .selections
            .iter()
            .map(|selection| match find(selection.active) {
                Some(target) => {
                    found = true;
                    selection.moved_to(target, extend)
                }
                None => *selection,
            })
            .collect();
        self.selections = next;
        found
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::single(Selection::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize, character: usize) -> Position {
        Position::new(line, character)
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(SelectionSet::from_vec(Vec::new()).is_none());
        assert!(SelectionSet::carets([]).is_none());
    }

    #[test]
    fn test_default_set_is_caret_at_origin() {
        let set = SelectionSet::default();
        assert_eq!(set.len(), 1);
        assert!(set.primary().is_caret());
        assert_eq!(set.primary().active, pos(0, 0));
    }

    #[test]
    fn test_apply_collapses_to_caret() {
        let mut set = SelectionSet::single(Selection::new(pos(0, 0), pos(0, 2)));
        assert!(set.apply(|p| Some(pos(p.line, p.character + 3)), false));
        assert_eq!(set.primary(), Selection::caret(pos(0, 5)));
    }

    #[test]
    fn test_apply_extend_keeps_anchor() {
        let mut set = SelectionSet::single(Selection::new(pos(0, 1), pos(0, 2)));
        assert!(set.apply(|_| Some(pos(1, 0)), true));
        assert_eq!(set.primary(), Selection::new(pos(0, 1), pos(1, 0)));
    }

    #[test]
    fn test_apply_keeps_unmatched_selections() {
        let mut set = SelectionSet::carets([pos(0, 0), pos(1, 0)]).unwrap();
        let found = set.apply(|p| (p.line == 1).then(|| pos(1, 4)), false);
        assert!(found);
        let all: Vec<_> = set.iter().copied().collect();
        assert_eq!(all, vec![Selection::caret(pos(0, 0)), Selection::caret(pos(1, 4))]);
    }

    #[test]
    fn test_apply_reports_nothing_found() {
        let mut set = SelectionSet::carets([pos(0, 0), pos(2, 3)]).unwrap();
        let before = set.clone();
        assert!(!set.apply(|_| None, true));
        assert_eq!(set, before);
    }
}
