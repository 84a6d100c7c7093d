use taskboard_core::TaskboardResult;

use crate::board::{Board, BoardId};
use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};
use crate::user::UserId;

/// The full service contract. Front ends code against this trait so every
/// one of them drives the same operations; [`TaskboardService`](crate::TaskboardService)
/// is the canonical implementation.
///
/// Listing methods return owned snapshots, not live views.
pub trait TaskboardOperations {
    /// Seeds one demo board with the standard three columns and a few cards.
    fn create_sample_data(&mut self) -> TaskboardResult<()>;

    fn create_board(&mut self, name: String) -> TaskboardResult<BoardId>;

    fn add_column(&mut self, board_id: &str, name: String) -> TaskboardResult<ColumnId>;

    fn add_card(
        &mut self,
        board_id: &str,
        column_id: &str,
        title: String,
    ) -> TaskboardResult<CardId>;

    fn move_card(
        &mut self,
        board_id: &str,
        card_id: &str,
        from_column_id: &str,
        to_column_id: &str,
    ) -> TaskboardResult<()>;

    fn create_user(&mut self, name: String) -> TaskboardResult<UserId>;

    fn list_boards(&self) -> Vec<Board>;

    fn find_board(&self, board_id: &str) -> Option<Board>;

    fn list_columns(&self, board_id: &str) -> TaskboardResult<Vec<Column>>;

    fn list_cards(&self, column_id: &str) -> TaskboardResult<Vec<Card>>;
}
