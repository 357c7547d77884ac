use std::io::{self, BufRead, Write};

use crate::sweep_registry::{SweepKind, SweepRegistry};

/// What the user picked from the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sweep(SweepKind),
    RunAll,
    Exit,
}

impl MenuChoice {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(MenuChoice::Exit),
            "8" => Some(MenuChoice::RunAll),
            other => {
                let number: usize = other.parse().ok()?;
                SweepKind::ALL
                    .get(number.checked_sub(1)?)
                    .map(|kind| MenuChoice::Sweep(*kind))
            }
        }
    }
}

pub struct SweeperInterface;

impl SweeperInterface {
    pub fn new() -> Self {
        Self
    }

    pub fn get_menu_text(&self) -> String {
        let mut text = String::from("Available sweeps:\n");
        for (number, definition) in SweepRegistry::global().definitions().enumerate() {
            text.push_str(&format!("  {}. {}\n", number + 1, definition.name));
        }
        text.push_str("  8. Run all sweeps\n  0. Exit");
        text
    }

    pub fn show_menu(&self) {
        println!("=== Seals Sweeper ===");
        println!("{}", self.get_menu_text());
    }

    /// Asks until a valid choice is entered. End of input counts as exit.
    pub fn prompt(&self, input: &mut impl BufRead) -> io::Result<MenuChoice> {
        self.show_menu();
        loop {
            print!("\nSelect sweep (0-8): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(MenuChoice::Exit);
            }
            match MenuChoice::from_input(&line) {
                Some(choice) => return Ok(choice),
                None => {
                    println!("Invalid choice. Please enter a number from 0 to 8.");
                    println!("{}", self.get_menu_text());
                }
            }
        }
    }
}

impl Default for SweeperInterface {
    fn default() -> Self {
        Self::new()
    }
}
