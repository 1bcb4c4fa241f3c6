//! Drag-and-drop reordering
//!
//! A gesture is `Idle -> Dragging -> Idle`. While dragging, each drag-over
//! event inside a column places the card before the first card whose
//! vertical midpoint lies below the pointer, or at the end of the column.

use tracing::debug;
use uplokal_domain::{Result, UplokalError};

use super::board::{Board, CardId, ColumnCount, ColumnId};

/// On-screen box of a rendered card, in the pointer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub card: CardId,
    pub top: f64,
    pub height: f64,
}

impl CardGeometry {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Card the dragged card should be inserted before, or `None` to append.
///
/// Picks, among cards whose midpoint is strictly below `pointer_y`, the one
/// closest to the pointer. The dragged card must not be part of `cards`.
pub fn drop_target<'a, I>(cards: I, pointer_y: f64) -> Option<CardId>
where
    I: IntoIterator<Item = &'a CardGeometry>,
{
    cards
        .into_iter()
        .fold((f64::NEG_INFINITY, None), |(best, target), geometry| {
            let offset = pointer_y - geometry.midpoint();
            if offset < 0.0 && offset > best {
                (offset, Some(geometry.card))
            } else {
                (best, target)
            }
        })
        .1
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        card: CardId,
        origin: ColumnId,
    },
}

/// Result of a finished gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub card: CardId,
    pub from: ColumnId,
    pub to: ColumnId,
    /// Recomputed card counts for every column.
    pub counts: Vec<ColumnCount>,
}

impl DragEnd {
    pub fn changed_column(&self) -> bool {
        self.from != self.to
    }
}

/// One drag gesture over a [`Board`].
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &DragState {
        &self.state
    }

    pub fn dragging(&self) -> Option<CardId> {
        match &self.state {
            DragState::Dragging { card, .. } => Some(*card),
            DragState::Idle => None,
        }
    }

    /// Drag start on `card`.
    ///
    /// # Errors
    /// `InvalidInput` if a gesture is already in flight, `NotFound` if the
    /// card is not on the board.
    pub fn begin(&mut self, board: &Board, card: CardId) -> Result<()> {
        if let DragState::Dragging { card: current, .. } = &self.state {
            return Err(UplokalError::InvalidInput(format!("card {current} is already being dragged")));
        }

        let origin = board
            .column_of(&card)
            .cloned()
            .ok_or_else(|| UplokalError::NotFound(format!("card {card}")))?;

        debug!(card = %card, column = %origin, "drag started");
        self.state = DragState::Dragging { card, origin };
        Ok(())
    }

    /// Drag-over inside `column` with the pointer at `pointer_y`.
    ///
    /// `layout` describes the cards currently rendered in that column; the
    /// dragged card is ignored if present. Returns the card the dragged
    /// card now sits before (`None` when appended).
    ///
    /// # Errors
    /// `InvalidInput` when no gesture is in flight; board errors from the move.
    pub fn drag_over(
        &mut self,
        board: &mut Board,
        column: &ColumnId,
        layout: &[CardGeometry],
        pointer_y: f64,
    ) -> Result<Option<CardId>> {
        let DragState::Dragging { card, .. } = &self.state else {
            return Err(UplokalError::InvalidInput("drag-over without an active drag".into()));
        };
        let card = *card;

        let target = drop_target(layout.iter().filter(|g| g.card != card), pointer_y);
        board.move_card(card, column, target)?;
        Ok(target)
    }

    /// Drag end: back to idle, with the per-column counts recomputed.
    ///
    /// # Errors
    /// `InvalidInput` when no gesture is in flight.
    pub fn end(&mut self, board: &Board) -> Result<DragEnd> {
        let DragState::Dragging { card, origin } = std::mem::take(&mut self.state) else {
            return Err(UplokalError::InvalidInput("drag end without an active drag".into()));
        };

        let to = board.column_of(&card).cloned().unwrap_or_else(|| origin.clone());
        debug!(card = %card, from = %origin, to = %to, "drag finished");

        Ok(DragEnd { card, from: origin, to, counts: board.counts() })
    }
}
