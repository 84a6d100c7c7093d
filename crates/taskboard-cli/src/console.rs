use std::io::{self, BufRead, Write};

use taskboard_core::AppConfig;
use taskboard_domain::{TaskboardOperations, View};

/// The interactive line-oriented front end. Reads one command per line,
/// routes every service error to [`View::show_error`], and keeps going until
/// `exit` or EOF.
pub struct Console<'a, S, V> {
    service: &'a mut S,
    view: &'a V,
    config: AppConfig,
}

impl<'a, S: TaskboardOperations, V: View> Console<'a, S, V> {
    pub fn new(service: &'a mut S, view: &'a V, config: AppConfig) -> Self {
        Self {
            service,
            view,
            config,
        }
    }

    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        self.view
            .show_message("Interactive console started. Type 'help' for commands, 'exit' to quit.");
        self.view
            .show_message("State is kept in memory only and is discarded on exit.");

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (command, args) = split_first(line);
            tracing::debug!(command, "console command");
            if command == "exit" {
                break;
            }
            self.dispatch(command, args);
        }

        Ok(())
    }

    fn dispatch(&mut self, command: &str, args: &str) {
        match command {
            "help" => self.show_help(),
            "create-board" => self.handle_create_board(args),
            "add-column" => self.handle_add_column(args),
            "add-card" => self.handle_add_card(args),
            "move-card" => self.handle_move_card(args),
            "list-boards" => self.handle_list_boards(),
            "list-columns" => self.handle_list_columns(args),
            "list-cards" => self.handle_list_cards(args),
            "activity" => self.handle_activity(args),
            "export" => self.handle_export(args),
            "sample-data" => self.handle_sample_data(),
            _ => self
                .view
                .show_error("Unknown command. Type 'help' for the command list."),
        }
    }

    fn handle_create_board(&mut self, args: &str) {
        let name = args.trim();
        if name.is_empty() {
            self.view.show_error("Usage: create-board <name>");
            return;
        }
        match self.service.create_board(name.to_string()) {
            Ok(board_id) => {
                self.view
                    .show_message(&format!("Board created: '{name}' (ID: {board_id})"));
                for column_name in self.config.default_columns.clone() {
                    match self.service.add_column(&board_id, column_name.clone()) {
                        Ok(column_id) => self.view.show_message(&format!(
                            "Column added: '{column_name}' (ID: {column_id})"
                        )),
                        Err(err) => self
                            .view
                            .show_error(&format!("Failed to add column: {err}")),
                    }
                }
            }
            Err(err) => self
                .view
                .show_error(&format!("Failed to create board: {err}")),
        }
    }

    fn handle_add_column(&mut self, args: &str) {
        let (board_id, name) = split_first(args);
        if board_id.is_empty() || name.is_empty() {
            self.view.show_error("Usage: add-column <board-id> <name>");
            return;
        }
        match self.service.add_column(board_id, name.to_string()) {
            Ok(column_id) => self
                .view
                .show_message(&format!("Column added: '{name}' (ID: {column_id})")),
            Err(err) => self
                .view
                .show_error(&format!("Failed to add column: {err}")),
        }
    }

    fn handle_add_card(&mut self, args: &str) {
        let (board_id, rest) = split_first(args);
        let (column_id, title) = split_first(rest);
        if board_id.is_empty() || column_id.is_empty() || title.is_empty() {
            self.view
                .show_error("Usage: add-card <board-id> <column-id> <title>");
            return;
        }
        match self
            .service
            .add_card(board_id, column_id, title.to_string())
        {
            Ok(card_id) => self
                .view
                .show_message(&format!("Card added: '{title}' (ID: {card_id})")),
            Err(err) => self.view.show_error(&format!("Failed to add card: {err}")),
        }
    }

    fn handle_move_card(&mut self, args: &str) {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let (board_id, card_id, from_column_id, to_column_id) = match tokens[..] {
            [board_id, card_id, from_column_id, to_column_id] => {
                (board_id, card_id, from_column_id, to_column_id)
            }
            _ => {
                self.view.show_error(
                    "Usage: move-card <board-id> <card-id> <from-column-id> <to-column-id>",
                );
                return;
            }
        };
        match self
            .service
            .move_card(board_id, card_id, from_column_id, to_column_id)
        {
            Ok(()) => self.view.show_message(&format!("Card moved: {card_id}")),
            Err(err) => self.view.show_error(&format!("Failed to move card: {err}")),
        }
    }

    fn handle_list_boards(&self) {
        let boards = self.service.list_boards();
        self.view.display_boards(&boards);
    }

    fn handle_list_columns(&self, args: &str) {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let board_id = match tokens[..] {
            [board_id] => board_id,
            _ => {
                self.view.show_error("Usage: list-columns <board-id>");
                return;
            }
        };
        match self.service.list_columns(board_id) {
            Ok(columns) => self.view.display_columns(&columns),
            Err(err) => self
                .view
                .show_error(&format!("Failed to list columns: {err}")),
        }
    }

    fn handle_list_cards(&self, args: &str) {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let (column_id, sorted) = match tokens[..] {
            [column_id] => (column_id, false),
            [column_id, "sorted"] => (column_id, true),
            _ => {
                self.view
                    .show_error("Usage: list-cards <column-id> [sorted]");
                return;
            }
        };
        match self.service.list_cards(column_id) {
            Ok(mut cards) => {
                if sorted {
                    cards.sort_by(|a, b| a.compare_priority(b));
                }
                self.view.display_cards(&cards);
            }
            Err(err) => self
                .view
                .show_error(&format!("Failed to list cards: {err}")),
        }
    }

    fn handle_activity(&self, args: &str) {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let board_id = match tokens[..] {
            [board_id] => board_id,
            _ => {
                self.view.show_error("Usage: activity <board-id>");
                return;
            }
        };
        let Some(board) = self.service.find_board(board_id) else {
            self.view
                .show_error(&format!("Board not found: {board_id}"));
            return;
        };
        match board.activity_log() {
            Some(log) if !log.is_empty() => {
                for activity in log.activities() {
                    self.view.show_message(&format!(
                        "[{}] {}",
                        activity.timestamp().format("%Y-%m-%d %H:%M:%S"),
                        activity.description()
                    ));
                }
            }
            _ => self.view.show_message("No activity recorded."),
        }
    }

    fn handle_export(&self, args: &str) {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let board_id = match tokens[..] {
            [board_id] => board_id,
            _ => {
                self.view.show_error("Usage: export <board-id>");
                return;
            }
        };
        let Some(board) = self.service.find_board(board_id) else {
            self.view
                .show_error(&format!("Board not found: {board_id}"));
            return;
        };
        match serde_json::to_string_pretty(&board) {
            Ok(json) => println!("{json}"),
            Err(err) => self
                .view
                .show_error(&format!("Failed to export board: {err}")),
        }
    }

    fn handle_sample_data(&mut self) {
        match self.service.create_sample_data() {
            Ok(()) => self.view.show_message("Sample data created."),
            Err(err) => self
                .view
                .show_error(&format!("Failed to create sample data: {err}")),
        }
    }

    fn show_help(&self) {
        println!("Available commands:");
        println!("  create-board <name>                - Create a board and print its ID");
        println!("  add-column <board-id> <name>       - Add a column to a board");
        println!("  add-card <board-id> <column-id> <title>");
        println!("                                     - Add a card to a column");
        println!("  move-card <board-id> <card-id> <from-column-id> <to-column-id>");
        println!("                                     - Move a card between columns");
        println!("  list-boards                        - List all boards");
        println!("  list-columns <board-id>            - List the columns of a board");
        println!("  list-cards <column-id> [sorted]    - List a column's cards, optionally by priority");
        println!("  activity <board-id>                - Show a board's activity log");
        println!("  export <board-id>                  - Print a board as JSON");
        println!("  sample-data                        - Seed a demo board");
        println!("  help                               - Show this help");
        println!("  exit                               - Quit");
    }
}

/// Splits the first whitespace-delimited token from the rest of the line.
fn split_first(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}
