use crate::error::Result;
use crate::machine::VendingMachine;
use colored::Colorize;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Main menu choices, in the order they are listed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    InsertMoney,
    Purchase,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Choice::InsertMoney),
            "2" => Some(Choice::Purchase),
            "3" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Text-based interaction loop around one [`VendingMachine`].
///
/// Generic over its input and output streams so it can be driven from a
/// terminal or from a test harness. All business decisions stay in the
/// machine; this type only renders outcomes and validates raw input before
/// it reaches the core.
pub struct Shell<R, W> {
    input: R,
    output: W,
    machine: VendingMachine,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(machine: VendingMachine, input: R, output: W) -> Self {
        Self {
            input,
            output,
            machine,
        }
    }

    /// Runs the menu loop until the customer exits or input reaches EOF.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(line) = self.prompt("Select Option")? else {
                break;
            };
            match Choice::parse(&line) {
                Some(Choice::InsertMoney) => self.insert_money()?,
                Some(Choice::Purchase) => self.purchase()?,
                Some(Choice::Exit) => break,
                None => self.error_message("Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn insert_money(&mut self) -> Result<()> {
        self.draw_header("Insert Money")?;
        let Some(raw) = self.prompt("Enter amount to insert (e.g., 1.00)")? else {
            return Ok(());
        };
        if raw.is_empty() {
            return self.error_message("Amount cannot be empty.");
        }
        let Ok(amount) = Decimal::from_str(&raw) else {
            return self.error_message("Cannot parse amount. Please enter a valid decimal number.");
        };
        if amount <= Decimal::ZERO {
            return self.error_message("Amount cannot be negative or zero.");
        }
        self.machine.deposit(amount);
        Ok(())
    }

    fn purchase(&mut self) -> Result<()> {
        self.draw_header("Purchase Product")?;
        self.show_products()?;
        self.show_balance()?;
        let Some(name) = self.prompt("Insert product name")? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.error_message("Product name cannot be empty.");
        }
        match self.machine.purchase(&name) {
            Ok(product) => {
                let thanks = format!("Thank you for purchasing '{name}'.");
                writeln!(self.output, "\n{}", thanks.green())?;
                writeln!(self.output, "{}", product.usage_instructions().yellow())?;
            }
            Err(denied) => {
                self.error_message(&format!("Error: {denied}"))?;
            }
        }
        Ok(())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        self.draw_header("Vending Machine")?;
        self.show_products()?;
        self.show_balance()?;
        writeln!(self.output, "Choose an option:\n")?;
        writeln!(self.output, "  1. Insert Money")?;
        writeln!(self.output, "  2. Purchase Product")?;
        writeln!(self.output, "  3. Exit\n")?;
        Ok(())
    }

    fn show_products(&mut self) -> Result<()> {
        let rule = "--------------- Available Products ---------------";
        writeln!(self.output, "{}", rule.green())?;
        for product in self.machine.inventory() {
            writeln!(self.output, "{product}")?;
        }
        writeln!(
            self.output,
            "{}\n",
            "--------------------------------------------------".green()
        )?;
        Ok(())
    }

    fn show_balance(&mut self) -> Result<()> {
        let line = format!("Your balance: {}", self.machine.balance());
        writeln!(self.output, "{}\n", line.bright_green())?;
        Ok(())
    }

    fn draw_header(&mut self, title: &str) -> Result<()> {
        let rule = "==================================================";
        writeln!(self.output, "{}", rule.cyan())?;
        writeln!(self.output, "{}", format!("      {title}").cyan())?;
        writeln!(self.output, "{}\n", rule.cyan())?;
        Ok(())
    }

    fn error_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", message.red())?;
        Ok(())
    }

    /// Prints a prompt and reads one trimmed line. Returns `None` on EOF.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", message.blue())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
