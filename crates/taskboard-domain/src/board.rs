use chrono::Utc;
use serde::{Deserialize, Serialize};
use taskboard_core::{Entity, EntityKind, TaskboardError, TaskboardResult};

use crate::activity::{Activity, ActivityLog};
use crate::column::Column;

pub type BoardId = String;

/// Top-level container: an ordered sequence of columns plus an optional
/// activity log. The only cross-column operation is [`move_card`](Board::move_card).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    name: String,
    columns: Vec<Column>,
    activity_log: Option<ActivityLog>,
}

impl Board {
    pub fn new(id: BoardId, name: String) -> Self {
        Self {
            id,
            name,
            columns: Vec::new(),
            activity_log: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Appends at the end; a column with an id already present is silently
    /// ignored.
    pub fn add_column(&mut self, column: Column) {
        if !self.has_column(column.id()) {
            self.columns.push(column);
        }
    }

    /// Removes and returns the column with the given id, if present.
    pub fn remove_column(&mut self, column_id: &str) -> Option<Column> {
        let index = self.position_of(column_id)?;
        Some(self.columns.remove(index))
    }

    pub fn find_column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    pub fn find_column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }

    pub fn has_column(&self, column_id: &str) -> bool {
        self.columns.iter().any(|column| column.id() == column_id)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Wholesale replacement, used for reordering.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    pub fn set_activity_log(&mut self, log: ActivityLog) {
        self.activity_log = Some(log);
    }

    pub fn activity_log(&self) -> Option<&ActivityLog> {
        self.activity_log.as_ref()
    }

    pub fn activity_log_mut(&mut self) -> Option<&mut ActivityLog> {
        self.activity_log.as_mut()
    }

    /// Drops all columns and detaches the activity log.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.activity_log = None;
    }

    /// Moves a card from one of this board's columns to another.
    ///
    /// Both columns are resolved and the card removed before anything is
    /// written to the destination, so a failed lookup leaves the board
    /// untouched. The destination append never fails. A successful move is
    /// recorded in the activity log when one is attached.
    pub fn move_card(
        &mut self,
        card_id: &str,
        from_column_id: &str,
        to_column_id: &str,
    ) -> TaskboardResult<()> {
        let from_index = self.position_of(from_column_id).ok_or_else(|| {
            TaskboardError::NotFound(EntityKind::Column, from_column_id.to_string())
        })?;
        let to_index = self
            .position_of(to_column_id)
            .ok_or_else(|| TaskboardError::NotFound(EntityKind::Column, to_column_id.to_string()))?;

        let card = self.columns[from_index]
            .remove_card(card_id)
            .ok_or_else(|| TaskboardError::NotFound(EntityKind::Card, card_id.to_string()))?;
        let title = card.title().to_string();

        let end = self.columns[to_index].len();
        self.columns[to_index].insert_card_at(end, card);

        let from_name = self.columns[from_index].name().to_string();
        let to_name = self.columns[to_index].name().to_string();
        if let Some(log) = self.activity_log.as_mut() {
            let description =
                format!("Card '{title}' moved from '{from_name}' to '{to_name}'");
            log.add(Activity::new(
                format!("{card_id}_move"),
                description,
                Utc::now(),
            ));
        }

        Ok(())
    }

    fn position_of(&self, column_id: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.id() == column_id)
    }
}

impl Entity for Board {
    const KIND: EntityKind = EntityKind::Board;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn board_with_two_columns() -> Board {
        let mut board = Board::new("board_1".to_string(), "Project".to_string());
        board.add_column(Column::new("column_1".to_string(), "To Do".to_string()));
        board.add_column(Column::new("column_2".to_string(), "Doing".to_string()));
        board
    }

    fn card(id: &str, title: &str) -> Card {
        Card::new(id.to_string(), title.to_string())
    }

    #[test]
    fn test_add_column_idempotent_on_duplicate_id() {
        let mut board = board_with_two_columns();
        board.add_column(Column::new("column_1".to_string(), "Renamed".to_string()));

        assert_eq!(board.column_count(), 2);
        assert_eq!(board.find_column("column_1").unwrap().name(), "To Do");
    }

    #[test]
    fn test_remove_column() {
        let mut board = board_with_two_columns();

        let removed = board.remove_column("column_1").unwrap();
        assert_eq!(removed.name(), "To Do");
        assert_eq!(board.column_count(), 1);
        assert!(board.remove_column("column_1").is_none());
    }

    #[test]
    fn test_set_columns_replaces_order() {
        let mut board = board_with_two_columns();
        let mut reordered: Vec<Column> = board.columns().to_vec();
        reordered.reverse();

        board.set_columns(reordered);
        assert_eq!(board.columns()[0].id(), "column_2");
    }

    #[test]
    fn test_clear_drops_columns_and_detaches_log() {
        let mut board = board_with_two_columns();
        board.set_activity_log(ActivityLog::new());

        board.clear();
        assert_eq!(board.column_count(), 0);
        assert!(board.activity_log().is_none());
    }

    #[test]
    fn test_move_card_is_all_or_nothing() {
        let mut board = board_with_two_columns();
        board
            .find_column_mut("column_1")
            .unwrap()
            .add_card(card("card_1", "Write spec"));

        board.move_card("card_1", "column_1", "column_2").unwrap();

        assert!(board.find_column("column_1").unwrap().is_empty());
        let destination = board.find_column("column_2").unwrap();
        assert_eq!(destination.len(), 1);
        assert_eq!(destination.cards()[0].title(), "Write spec");
    }

    #[test]
    fn test_move_card_missing_source_column() {
        let mut board = board_with_two_columns();

        let err = board.move_card("card_1", "column_9", "column_2").unwrap_err();
        assert_eq!(
            err,
            TaskboardError::NotFound(EntityKind::Column, "column_9".to_string())
        );
    }

    #[test]
    fn test_move_card_missing_destination_column() {
        let mut board = board_with_two_columns();

        let err = board.move_card("card_1", "column_1", "column_9").unwrap_err();
        assert_eq!(
            err,
            TaskboardError::NotFound(EntityKind::Column, "column_9".to_string())
        );
    }

    #[test]
    fn test_move_card_missing_card_leaves_columns_untouched() {
        let mut board = board_with_two_columns();
        board
            .find_column_mut("column_1")
            .unwrap()
            .add_card(card("card_1", "Write spec"));

        let err = board.move_card("card_9", "column_1", "column_2").unwrap_err();
        assert_eq!(
            err,
            TaskboardError::NotFound(EntityKind::Card, "card_9".to_string())
        );
        assert_eq!(board.find_column("column_1").unwrap().len(), 1);
        assert!(board.find_column("column_2").unwrap().is_empty());
    }

    #[test]
    fn test_move_card_records_activity() {
        let mut board = board_with_two_columns();
        board.set_activity_log(ActivityLog::new());
        board
            .find_column_mut("column_1")
            .unwrap()
            .add_card(card("card_1", "Write spec"));

        board.move_card("card_1", "column_1", "column_2").unwrap();

        let log = board.activity_log().unwrap();
        assert_eq!(log.len(), 1);
        let activity = log.last().unwrap();
        assert_eq!(activity.id(), "card_1_move");
        assert!(activity.description().contains("Write spec"));
        assert!(activity.description().contains("To Do"));
        assert!(activity.description().contains("Doing"));
    }

    #[test]
    fn test_move_card_without_log_is_silent() {
        let mut board = board_with_two_columns();
        board
            .find_column_mut("column_1")
            .unwrap()
            .add_card(card("card_1", "Write spec"));

        board.move_card("card_1", "column_1", "column_2").unwrap();
        assert!(board.activity_log().is_none());
    }

    #[test]
    fn test_failed_move_does_not_log() {
        let mut board = board_with_two_columns();
        board.set_activity_log(ActivityLog::new());

        assert!(board.move_card("card_9", "column_1", "column_2").is_err());
        assert!(board.activity_log().unwrap().is_empty());
    }
}
