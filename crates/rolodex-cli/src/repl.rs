use crate::commands::output::GOODBYE;
use crate::commands::{help_text, Context, Session};
use crate::history::History;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use rolodex_core::time::local_today;
use rolodex_core::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

pub fn run(ctx: &Context<'_>, book: AddressBook) -> Result<()> {
    let mut session = Session::new(book, ctx.config.upcoming_window_days);
    let mut history = match &ctx.history_path {
        Some(path) => History::open(path),
        None => History::disabled(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = run_session(
        &mut session,
        stdin.lock(),
        &mut stdout,
        &mut history,
        local_today,
    );
    // Save whatever was changed even if the terminal went away.
    save_session(ctx, &mut session)?;
    result
}

pub fn run_session<R, W>(
    session: &mut Session,
    input: R,
    output: &mut W,
    history: &mut History,
    today: fn() -> NaiveDate,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{WELCOME}")?;
    writeln!(output, "Available commands:")?;
    writeln!(output, "{}", help_text())?;

    let mut lines = input.lines();
    while session.is_running() {
        write!(output, "\n{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{GOODBYE}")?;
            break;
        };
        let line = line.with_context(|| "read command")?;
        history.record(&line);

        match session.handle_line(&line, today()) {
            Ok(reply) => {
                if let Some(text) = reply.to_text() {
                    writeln!(output, "{text}")?;
                }
            }
            Err(err) => {
                debug!(error = %err, "command failed");
                writeln!(output, "{err}")?;
            }
        }
    }
    Ok(())
}

pub fn save_session(ctx: &Context<'_>, session: &mut Session) -> Result<()> {
    if !session.is_dirty() {
        return Ok(());
    }
    ctx.store
        .contacts()
        .save_book(session.book())
        .with_context(|| "save contacts")?;
    info!(contacts = session.book().len(), "address book saved");
    session.mark_saved();
    Ok(())
}
