//! Two-state selection protocol.
//!
//! `NoSelection` --click own point--> `SelectedOrigin(p)`
//! `SelectedOrigin(p)` --click p / off-board--> `NoSelection` (cancel)
//! `SelectedOrigin(p)` --click q--> `NoSelection` (move attempt p -> q)
//!
//! A move attempt always returns to `NoSelection`, whether or not the move
//! is accepted. The player reselects to try again.

use serde::{Deserialize, Serialize};

use crate::core::point::PointIndex;

/// Current selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    NoSelection,
    SelectedOrigin(PointIndex),
}

/// What a click means given the selection it landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Nothing happens.
    Ignore,
    /// An origin was picked.
    Select(PointIndex),
    /// The existing selection was cancelled.
    Deselect,
    /// Try to move from `origin` to `destination`.
    Attempt {
        origin: PointIndex,
        destination: PointIndex,
    },
}

impl Selection {
    /// Transition on a click.
    ///
    /// `clicked` is the resolved point (`None` for off-board). `selectable`
    /// reports whether the player on move has a piece on a point; it is only
    /// consulted when nothing is selected.
    pub fn on_click(
        self,
        clicked: Option<PointIndex>,
        selectable: impl Fn(PointIndex) -> bool,
    ) -> (Selection, SelectionEvent) {
        match (self, clicked) {
            (Selection::NoSelection, Some(point)) if selectable(point) => {
                (Selection::SelectedOrigin(point), SelectionEvent::Select(point))
            }
            (Selection::NoSelection, _) => (Selection::NoSelection, SelectionEvent::Ignore),
            (Selection::SelectedOrigin(origin), Some(destination)) if destination != origin => (
                Selection::NoSelection,
                SelectionEvent::Attempt {
                    origin,
                    destination,
                },
            ),
            (Selection::SelectedOrigin(_), _) => (Selection::NoSelection, SelectionEvent::Deselect),
        }
    }
}
