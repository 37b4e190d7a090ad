//! shopfront-auth - Entry Point
//!
//! Console driver for the storefront's signup and login validation.

use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

use shopfront_auth::config::AppConfig;
use shopfront_auth::console::{CommandStatus, Session, handle_command, parse_command};
use shopfront_auth::error::AppError;
use shopfront_auth::error::handlers::{exit_code, handle_error};
use shopfront_auth::utils::logging::setup_logging;
use shopfront_auth::SingleSlotStore;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();

    let config_path = std::env::args().nth(1);
    if let Err(e) = run(config_path.as_deref()).await {
        handle_error(&e);
        std::process::exit(exit_code(&e));
    }
}

async fn run(config_path: Option<&str>) -> Result<(), AppError> {
    let config = AppConfig::load(config_path)?;
    info!("Launching shopfront console...");

    let mut store = SingleSlotStore::new();
    let mut session = Session::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    write_out(&mut stdout, "Type HELP for commands.\n").await?;
    write_out(&mut stdout, &config.console.prompt).await?;

    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            let command = parse_command(&line);
            let result = handle_command(&mut session, &command, &mut store, &config);

            if let Some(message) = &result.message {
                write_out(&mut stdout, message).await?;
            }
            if result.status == CommandStatus::Exit {
                break;
            }
        }
        write_out(&mut stdout, &config.console.prompt).await?;
    }

    info!("Console closed");
    Ok(())
}

async fn write_out(stdout: &mut Stdout, text: &str) -> Result<(), AppError> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
