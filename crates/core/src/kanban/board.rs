//! Board model: columns of ordered card ids over a card arena

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uplokal_domain::{impl_wire_enum, Result, UplokalError};
use uuid::Uuid;

/// Short Indonesian month names, as the workspace shows due dates.
const MONTHS_ID: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Column key, doubling as the task status (`todo`, `in-progress`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskLabel {
    #[default]
    Design,
    Marketing,
    Production,
    Legal,
}

impl_wire_enum!(TaskLabel {
    Design => "design",
    Marketing => "marketing",
    Production => "production",
    Legal => "legal",
});

impl TaskLabel {
    /// Text shown on the card badge.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Marketing => "Marketing",
            Self::Production => "Produksi",
            Self::Legal => "Legal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCard {
    pub id: CardId,
    pub title: String,
    pub description: Option<String>,
    pub due: Option<NaiveDate>,
    pub label: TaskLabel,
}

impl TaskCard {
    /// Due date as `day month` (e.g. `3 Agu`).
    pub fn due_label(&self) -> Option<String> {
        self.due.map(|date| format!("{} {}", date.day(), MONTHS_ID[date.month0() as usize]))
    }
}

/// Input for [`Board::add_task`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due: Option<NaiveDate>,
    pub label: TaskLabel,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<CardId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCount {
    pub column: ColumnId,
    pub count: usize,
}

/// Ordered columns of cards.
///
/// Invariant: every card in the arena is listed in exactly one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    cards: HashMap<CardId, TaskCard>,
}

impl Board {
    /// Empty board with the given `(id, title)` columns, in order.
    pub fn new<I, C, T>(columns: I) -> Self
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let columns = columns
            .into_iter()
            .map(|(id, title)| Column { id: ColumnId::new(id), title: title.into(), cards: Vec::new() })
            .collect();
        Self { columns, cards: HashMap::new() }
    }

    /// The project workspace layout.
    pub fn workspace() -> Self {
        Self::new([
            ("todo", "To Do"),
            ("in-progress", "In Progress"),
            ("review", "Review"),
            ("done", "Done"),
        ])
    }

    /// Append a new card at the end of `column`.
    ///
    /// # Errors
    /// `InvalidInput` for a blank title, `NotFound` for an unknown column.
    pub fn add_task(&mut self, column: &ColumnId, task: NewTask) -> Result<CardId> {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(UplokalError::InvalidInput("task title is required".into()));
        }

        let id = CardId::new();
        let card = TaskCard {
            id,
            title: title.to_string(),
            description: task.description.filter(|d| !d.trim().is_empty()),
            due: task.due,
            label: task.label,
        };

        self.column_mut(column)?.cards.push(id);
        self.cards.insert(id, card);
        debug!(card = %id, column = %column, "task added");
        Ok(id)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn card(&self, id: &CardId) -> Option<&TaskCard> {
        self.cards.get(id)
    }

    pub fn cards_in(&self, column: &ColumnId) -> Option<&[CardId]> {
        self.columns.iter().find(|c| &c.id == column).map(|c| c.cards.as_slice())
    }

    pub fn column_of(&self, card: &CardId) -> Option<&ColumnId> {
        self.columns.iter().find(|c| c.cards.contains(card)).map(|c| &c.id)
    }

    /// Card count per column, in column order.
    pub fn counts(&self) -> Vec<ColumnCount> {
        self.columns
            .iter()
            .map(|c| ColumnCount { column: c.id.clone(), count: c.cards.len() })
            .collect()
    }

    /// Move `card` into `to`, directly before `before` or at the end.
    ///
    /// The card is detached from its current column first, so it is never
    /// listed twice.
    ///
    /// # Errors
    /// `NotFound` for an unknown card, column or anchor; `InvalidInput` when
    /// the anchor is the moving card itself.
    pub fn move_card(&mut self, card: CardId, to: &ColumnId, before: Option<CardId>) -> Result<()> {
        if !self.cards.contains_key(&card) {
            return Err(UplokalError::NotFound(format!("card {card}")));
        }
        if before == Some(card) {
            return Err(UplokalError::InvalidInput("a card cannot be placed before itself".into()));
        }

        let target = self.column_index(to)?;
        if let Some(anchor) = before {
            if !self.columns[target].cards.contains(&anchor) {
                return Err(UplokalError::NotFound(format!("card {anchor} in column {to}")));
            }
        }

        for column in &mut self.columns {
            column.cards.retain(|c| *c != card);
        }

        let cards = &mut self.columns[target].cards;
        match before.and_then(|anchor| cards.iter().position(|c| *c == anchor)) {
            Some(index) => cards.insert(index, card),
            None => cards.push(card),
        }
        Ok(())
    }

    fn column_index(&self, column: &ColumnId) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| &c.id == column)
            .ok_or_else(|| UplokalError::NotFound(format!("column {column}")))
    }

    fn column_mut(&mut self, column: &ColumnId) -> Result<&mut Column> {
        let index = self.column_index(column)?;
        Ok(&mut self.columns[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> ColumnId {
        ColumnId::from("todo")
    }

    #[test]
    fn workspace_has_four_empty_columns() {
        let board = Board::workspace();
        let ids: Vec<_> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["todo", "in-progress", "review", "done"]);
        assert!(board.counts().iter().all(|c| c.count == 0));
    }

    #[test]
    fn add_task_appends_to_column() {
        let mut board = Board::workspace();
        let first = board.add_task(&todo(), NewTask::titled("Foto produk")).unwrap();
        let second = board.add_task(&todo(), NewTask::titled("Label kemasan")).unwrap();

        assert_eq!(board.cards_in(&todo()).unwrap(), &[first, second]);
        assert_eq!(board.column_of(&second), Some(&todo()));
        assert_eq!(board.card(&first).unwrap().label, TaskLabel::Design);
    }

    #[test]
    fn add_task_rejects_blank_title() {
        let mut board = Board::workspace();
        let err = board.add_task(&todo(), NewTask::titled("   ")).unwrap_err();
        assert!(matches!(err, UplokalError::InvalidInput(_)));
    }

    #[test]
    fn add_task_to_unknown_column_fails() {
        let mut board = Board::workspace();
        let err = board.add_task(&ColumnId::from("archive"), NewTask::titled("x")).unwrap_err();
        assert!(matches!(err, UplokalError::NotFound(_)));
    }

    #[test]
    fn move_card_places_before_anchor() {
        let mut board = Board::workspace();
        let a = board.add_task(&todo(), NewTask::titled("A")).unwrap();
        let b = board.add_task(&todo(), NewTask::titled("B")).unwrap();
        let c = board.add_task(&todo(), NewTask::titled("C")).unwrap();

        board.move_card(c, &todo(), Some(a)).unwrap();
        assert_eq!(board.cards_in(&todo()).unwrap(), &[c, a, b]);
    }

    #[test]
    fn move_card_across_columns_keeps_single_membership() {
        let mut board = Board::workspace();
        let a = board.add_task(&todo(), NewTask::titled("A")).unwrap();
        let done = ColumnId::from("done");

        board.move_card(a, &done, None).unwrap();

        assert!(board.cards_in(&todo()).unwrap().is_empty());
        assert_eq!(board.cards_in(&done).unwrap(), &[a]);
        let listed: usize = board.counts().iter().map(|c| c.count).sum();
        assert_eq!(listed, 1);
    }

    #[test]
    fn move_card_rejects_anchor_outside_target() {
        let mut board = Board::workspace();
        let a = board.add_task(&todo(), NewTask::titled("A")).unwrap();
        let b = board.add_task(&todo(), NewTask::titled("B")).unwrap();

        let err = board.move_card(a, &ColumnId::from("done"), Some(b)).unwrap_err();
        assert!(matches!(err, UplokalError::NotFound(_)));
        assert_eq!(board.cards_in(&todo()).unwrap(), &[a, b]);
    }

    #[test]
    fn due_label_uses_indonesian_months() {
        let mut board = Board::workspace();
        let task = NewTask {
            due: NaiveDate::from_ymd_opt(2026, 8, 3),
            label: TaskLabel::Production,
            ..NewTask::titled("Produksi batch 2")
        };
        let id = board.add_task(&todo(), task).unwrap();
        let card = board.card(&id).unwrap();

        assert_eq!(card.due_label().as_deref(), Some("3 Agu"));
        assert_eq!(card.label.display_name(), "Produksi");
    }
}
