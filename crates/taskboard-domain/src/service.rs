use taskboard_core::{Entity, EntityKind, Repository, TaskboardError, TaskboardResult};

use crate::activity::ActivityLog;
use crate::board::{Board, BoardId};
use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};
use crate::operations::TaskboardOperations;
use crate::user::{User, UserId};

/// Flat registry entry for a column. The board repository owns the column
/// itself; this record only pins the id globally and remembers which board
/// holds it.
#[derive(Debug, Clone)]
struct ColumnLocator {
    id: ColumnId,
    board_id: BoardId,
}

impl Entity for ColumnLocator {
    const KIND: EntityKind = EntityKind::Column;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Flat registry entry for a card; see [`ColumnLocator`].
#[derive(Debug, Clone)]
struct CardLocator {
    id: CardId,
    column_id: ColumnId,
}

impl Entity for CardLocator {
    const KIND: EntityKind = EntityKind::Card;

    fn id(&self) -> &str {
        &self.id
    }
}

/// The façade every front end talks to. Owns the whole board tree through
/// the board repository; the column and card repositories hold locator
/// records, so each entity has exactly one owner. Ids are sequential per
/// entity type and are generated only after validation passes, so a failed
/// call never consumes one.
pub struct TaskboardService {
    boards: Repository<Board>,
    columns: Repository<ColumnLocator>,
    cards: Repository<CardLocator>,
    users: Repository<User>,
    next_board_id: u64,
    next_column_id: u64,
    next_card_id: u64,
    next_user_id: u64,
}

impl TaskboardService {
    pub fn new() -> Self {
        Self {
            boards: Repository::new(),
            columns: Repository::new(),
            cards: Repository::new(),
            users: Repository::new(),
            next_board_id: 1,
            next_column_id: 1,
            next_card_id: 1,
            next_user_id: 1,
        }
    }

    fn generate_board_id(&mut self) -> BoardId {
        let id = format!("board_{}", self.next_board_id);
        self.next_board_id += 1;
        id
    }

    fn generate_column_id(&mut self) -> ColumnId {
        let id = format!("column_{}", self.next_column_id);
        self.next_column_id += 1;
        id
    }

    fn generate_card_id(&mut self) -> CardId {
        let id = format!("card_{}", self.next_card_id);
        self.next_card_id += 1;
        id
    }

    fn generate_user_id(&mut self) -> UserId {
        let id = format!("user_{}", self.next_user_id);
        self.next_user_id += 1;
        id
    }

    fn validate_board_exists(&self, board_id: &str) -> TaskboardResult<()> {
        if self.boards.exists(board_id) {
            Ok(())
        } else {
            Err(TaskboardError::NotFound(
                EntityKind::Board,
                board_id.to_string(),
            ))
        }
    }

    fn validate_column_exists(&self, column_id: &str) -> TaskboardResult<()> {
        if self.columns.exists(column_id) {
            Ok(())
        } else {
            Err(TaskboardError::NotFound(
                EntityKind::Column,
                column_id.to_string(),
            ))
        }
    }
}

impl Default for TaskboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskboardOperations for TaskboardService {
    fn create_sample_data(&mut self) -> TaskboardResult<()> {
        let board_id = self.create_board("Sample Kanban Project".to_string())?;

        let todo = self.add_column(&board_id, "To Do".to_string())?;
        let doing = self.add_column(&board_id, "Doing".to_string())?;
        let done = self.add_column(&board_id, "Done".to_string())?;

        self.add_card(&board_id, &todo, "Set up the development environment".to_string())?;
        self.add_card(&board_id, &todo, "Implement the domain model".to_string())?;
        self.add_card(&board_id, &doing, "Build the service layer".to_string())?;
        self.add_card(&board_id, &done, "Define the project architecture".to_string())?;

        Ok(())
    }

    fn create_board(&mut self, name: String) -> TaskboardResult<BoardId> {
        let board_id = self.generate_board_id();
        let mut board = Board::new(board_id.clone(), name);
        board.set_activity_log(ActivityLog::new());
        self.boards.add(board)?;
        Ok(board_id)
    }

    fn add_column(&mut self, board_id: &str, name: String) -> TaskboardResult<ColumnId> {
        self.validate_board_exists(board_id)?;

        let column_id = self.generate_column_id();
        self.columns.add(ColumnLocator {
            id: column_id.clone(),
            board_id: board_id.to_string(),
        })?;

        if let Some(board) = self.boards.find_by_id_mut(board_id) {
            board.add_column(Column::new(column_id.clone(), name));
        }

        Ok(column_id)
    }

    fn add_card(
        &mut self,
        board_id: &str,
        column_id: &str,
        title: String,
    ) -> TaskboardResult<CardId> {
        self.validate_board_exists(board_id)?;
        self.validate_column_exists(column_id)?;

        let card_id = self.generate_card_id();
        self.cards.add(CardLocator {
            id: card_id.clone(),
            column_id: column_id.to_string(),
        })?;

        // The owning board comes from the column's locator, not from
        // `board_id`: the column check above is global, so a column held by
        // a different board passes and receives the card there.
        let owner = self
            .columns
            .find_by_id(column_id)
            .map(|locator| locator.board_id.clone());
        if let Some(owner_board_id) = owner {
            if let Some(board) = self.boards.find_by_id_mut(&owner_board_id) {
                if let Some(column) = board.find_column_mut(column_id) {
                    column.add_card(Card::new(card_id.clone(), title));
                }
            }
        }

        Ok(card_id)
    }

    fn move_card(
        &mut self,
        board_id: &str,
        card_id: &str,
        from_column_id: &str,
        to_column_id: &str,
    ) -> TaskboardResult<()> {
        self.validate_board_exists(board_id)?;
        self.validate_column_exists(from_column_id)?;
        self.validate_column_exists(to_column_id)?;

        let board = self.boards.find_by_id_mut(board_id).ok_or_else(|| {
            TaskboardError::NotFound(EntityKind::Board, board_id.to_string())
        })?;
        // Board scoping is enforced here: the board resolves both columns
        // from its own list and rejects ids it does not hold.
        board.move_card(card_id, from_column_id, to_column_id)?;

        if let Some(locator) = self.cards.find_by_id_mut(card_id) {
            locator.column_id = to_column_id.to_string();
        }

        Ok(())
    }

    fn create_user(&mut self, name: String) -> TaskboardResult<UserId> {
        let user_id = self.generate_user_id();
        self.users.add(User::new(user_id.clone(), name))?;
        Ok(user_id)
    }

    fn list_boards(&self) -> Vec<Board> {
        self.boards.get_all().into_iter().cloned().collect()
    }

    fn find_board(&self, board_id: &str) -> Option<Board> {
        self.boards.find_by_id(board_id).cloned()
    }

    fn list_columns(&self, board_id: &str) -> TaskboardResult<Vec<Column>> {
        self.validate_board_exists(board_id)?;
        Ok(self
            .boards
            .find_by_id(board_id)
            .map(|board| board.columns().to_vec())
            .unwrap_or_default())
    }

    fn list_cards(&self, column_id: &str) -> TaskboardResult<Vec<Card>> {
        self.validate_column_exists(column_id)?;
        Ok(self
            .columns
            .find_by_id(column_id)
            .and_then(|locator| self.boards.find_by_id(&locator.board_id))
            .and_then(|board| board.find_column(column_id))
            .map(|column| column.cards().to_vec())
            .unwrap_or_default())
    }
}
