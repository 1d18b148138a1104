//! Terminal
//!
//! Interactive teller menu. Reads from any `BufRead` and writes to any
//! `Write`, so the same loop serves stdin/stdout and in-memory sessions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::StatementFormat;
use crate::directory::Directory;
use crate::error::{AppError, AppResult};
use crate::handlers::{
    CreateClientCommand, CreateClientHandler, DepositCommand, DepositHandler, OpenAccountCommand,
    OpenAccountHandler, WithdrawCommand, WithdrawHandler,
};
use crate::ledger::Ledger;
use crate::statement::{AccountSummary, Statement};

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Whether the menu loop keeps going after an action
enum Flow {
    Continue,
    Quit,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    statement_format: StatementFormat,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, ledger: Ledger, statement_format: StatementFormat) -> Self {
        Self {
            input,
            output,
            ledger,
            statement_format,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu until `q` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            let Some(option) = self.prompt(MENU)? else {
                break;
            };
            tracing::debug!(option = %option, "Menu option selected");

            let flow = match option.as_str() {
                "d" => self.deposit()?,
                "s" => self.withdraw()?,
                "e" => self.show_statement()?,
                "nc" => self.create_account()?,
                "lc" => self.list_accounts()?,
                "nu" => self.create_client()?,
                "q" => Flow::Quit,
                _ => {
                    writeln!(
                        self.output,
                        "Invalid operation, please select the desired operation again."
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    // =========================================================================
    // Menu actions
    // =========================================================================

    fn deposit(&mut self) -> AppResult<Flow> {
        let Some(tax_id) = self.prompt("Enter the client's tax id: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_amount) = self.prompt("Enter the deposit amount: ")? else {
            return Ok(Flow::Quit);
        };

        let result = parse_amount(&raw_amount).and_then(|amount| {
            DepositHandler::new(&mut self.ledger).execute(DepositCommand::new(tax_id, amount))
        });
        match result {
            Ok(done) => writeln!(
                self.output,
                "\n=== Deposit completed successfully! Balance: $ {} ===",
                done.balance
            )?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> AppResult<Flow> {
        let Some(tax_id) = self.prompt("Enter the client's tax id: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_amount) = self.prompt("Enter the withdrawal amount: ")? else {
            return Ok(Flow::Quit);
        };

        let result = parse_amount(&raw_amount).and_then(|amount| {
            WithdrawHandler::new(&mut self.ledger).execute(WithdrawCommand::new(tax_id, amount))
        });
        match result {
            Ok(done) => writeln!(
                self.output,
                "\n=== Withdrawal completed successfully! Balance: $ {} ===",
                done.balance
            )?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_statement(&mut self) -> AppResult<Flow> {
        let Some(tax_id) = self.prompt("Enter the client's tax id: ")? else {
            return Ok(Flow::Quit);
        };

        let statement = self.ledger.find_client(&tax_id).and_then(|client| {
            client
                .accounts()
                .first()
                .map(|account| Statement::for_account(account, client))
        });

        match statement {
            Some(statement) => match self.statement_format {
                StatementFormat::Text => writeln!(self.output, "\n{}", statement)?,
                StatementFormat::Json => writeln!(self.output, "{}", statement.to_json()?)?,
            },
            None => writeln!(self.output, "\n@@@ Account not found. @@@")?,
        }
        Ok(Flow::Continue)
    }

    fn create_client(&mut self) -> AppResult<Flow> {
        let Some(tax_id) = self.prompt("Enter the tax id (numbers only): ")? else {
            return Ok(Flow::Quit);
        };
        if self.ledger.find_client(&tax_id).is_some() {
            writeln!(self.output, "\n@@@ A client with this tax id already exists! @@@")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Enter the full name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_birth_date) = self.prompt("Enter the birth date (dd-mm-yyyy): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(address) =
            self.prompt("Enter the address (street, number - district - city/state): ")?
        else {
            return Ok(Flow::Quit);
        };

        let result = parse_birth_date(&raw_birth_date).and_then(|birth_date| {
            CreateClientHandler::new(&mut self.ledger).execute(CreateClientCommand::new(
                tax_id, name, birth_date, address,
            ))
        });
        match result {
            Ok(_) => writeln!(self.output, "=== Client created successfully! ===")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> AppResult<Flow> {
        let Some(tax_id) = self.prompt("Enter the client's tax id: ")? else {
            return Ok(Flow::Quit);
        };

        let result =
            OpenAccountHandler::new(&mut self.ledger).execute(OpenAccountCommand::new(tax_id));
        match result {
            Ok(opened) => writeln!(
                self.output,
                "\n=== Account {} created successfully! ===",
                opened.account_number
            )?,
            Err(AppError::Domain(e)) if e.is_not_found() => writeln!(
                self.output,
                "\n@@@ Client not found, account creation flow ended! @@@"
            )?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> AppResult<Flow> {
        let summaries: Vec<_> = self
            .ledger
            .accounts()
            .into_iter()
            .map(|(client, account)| AccountSummary::new(account, client))
            .collect();

        if summaries.is_empty() {
            writeln!(self.output, "No accounts opened yet.")?;
        }
        for summary in summaries {
            writeln!(self.output, "{}", "=".repeat(100))?;
            writeln!(self.output, "{}", summary)?;
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // I/O helpers
    // =========================================================================

    /// Print `label` and read one trimmed line. `None` at end of input.
    /// Invalid UTF-8 is replaced, not treated as an I/O error.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Print a recoverable error; propagate anything else.
    fn report(&mut self, err: AppError) -> AppResult<()> {
        if !err.is_user_error() {
            return Err(err);
        }
        writeln!(self.output, "\n@@@ {} @@@", err.user_message())?;
        Ok(())
    }
}

/// Parse a decimal amount typed at the terminal.
pub fn parse_amount(raw: &str) -> AppResult<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a valid amount", raw)))
}

/// Parse a `dd-mm-yyyy` birth date.
pub fn parse_birth_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a dd-mm-yyyy date", raw)))
}
