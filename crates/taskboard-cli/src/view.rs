use taskboard_domain::{Board, Card, Column, View};

/// Plain-text rendering to stdout/stderr. All user-facing formatting for the
/// console lives here.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ConsoleView {
    fn show_message(&self, message: &str) {
        println!(">> {message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn display_boards(&self, boards: &[Board]) {
        if boards.is_empty() {
            println!("No boards found.");
            return;
        }
        println!("Boards:");
        for board in boards {
            println!(
                "  {} (ID: {}) - {} columns",
                board.name(),
                board.id(),
                board.column_count()
            );
        }
    }

    fn display_columns(&self, columns: &[Column]) {
        if columns.is_empty() {
            println!("No columns found.");
            return;
        }
        println!("Columns:");
        for column in columns {
            println!(
                "  {} (ID: {}) - {} cards",
                column.name(),
                column.id(),
                column.len()
            );
        }
    }

    fn display_cards(&self, cards: &[Card]) {
        if cards.is_empty() {
            println!("No cards found.");
            return;
        }
        for card in cards {
            let mut line = format!("  * {} (ID: {})", card.title(), card.id());
            if let Some(description) = card.description() {
                line.push_str(&format!(" - {description}"));
            }
            line.push_str(&format!(" [priority: {}]", card.priority()));
            if !card.tags().is_empty() {
                let names: Vec<&str> = card.tags().iter().map(|tag| tag.name()).collect();
                line.push_str(&format!(" [tags: {}]", names.join(", ")));
            }
            println!("{line}");
        }
    }
}
