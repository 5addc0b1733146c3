//! Interactive console loop.
//!
//! Reads commands line by line, dispatches them against an [`AddressBook`]
//! and writes each reply on its own line. Generic over the reader and
//! writer so it can be driven by stdin/stdout or by in-memory buffers.

use crate::commands::{self, Reply};
use crate::models::AddressBook;
use anyhow::Result;
use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";

/// Run the console until `close`/`exit` or end of input.
///
/// # Arguments
/// * `book` - The address book commands operate on
/// * `reader` - Source of command lines
/// * `writer` - Destination for the prompt and replies
/// * `prompt` - Text written before each command is read
/// * `today` - Called whenever a command needs the current date
pub async fn run_console<R, W, F>(
    book: &mut AddressBook,
    reader: R,
    mut writer: W,
    prompt: &str,
    today: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Fn() -> NaiveDate,
{
    let mut lines = reader.lines();
    write_line(&mut writer, GREETING).await?;

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };

        match commands::dispatch(book, &line, today()) {
            Some(Reply::Message(message)) => write_line(&mut writer, &message).await?,
            Some(Reply::Exit) => break,
            None => {}
        }
    }

    write_line(&mut writer, FAREWELL).await?;
    info!("Console closed with {} contact(s)", book.len());
    Ok(())
}

async fn write_line<W>(writer: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
