use crate::board::Board;
use crate::card::Card;
use crate::column::Column;

/// Presentation seam implemented by front ends. The domain and service
/// layers never format user-facing text; anything a user should read goes
/// through one of these methods.
pub trait View {
    fn show_message(&self, message: &str);

    fn show_error(&self, message: &str);

    fn display_boards(&self, boards: &[Board]);

    fn display_columns(&self, columns: &[Column]);

    fn display_cards(&self, cards: &[Card]);
}
