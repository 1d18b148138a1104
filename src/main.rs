//! bank_ledger - interactive teller terminal
//!
//! Keeps clients, accounts and their transaction history in memory for the
//! duration of one session.

use std::io;

use bank_ledger::terminal::Terminal;
use bank_ledger::{Config, Ledger};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging on stderr, keeping stdout for the menu
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(
        branch = %config.branch,
        withdrawal_limit = %config.checking_withdrawal_limit,
        max_withdrawals = config.checking_max_withdrawals,
        environment = %config.environment,
        "Starting bank_ledger session"
    );

    let ledger = Ledger::new(config.account_defaults());
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout(), ledger, config.statement_format);
    terminal.run()?;

    let clients = terminal.ledger().clients().len();
    let accounts = terminal.ledger().account_count();
    tracing::info!(clients, accounts, "Session closed");

    Ok(())
}
