//! Interactive line-oriented front end over a [`SessionStore`].

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::render;
use crate::domain::{HealthStatus, ReviewType};
use crate::infra::source::load_source_file;
use crate::session::SessionStore;

const PASTE_TERMINATOR: &str = ".";

const HELP: &str = "\
Commands:
  load <path>        load code from a file (sets the filename too)
  sample             load the sample snippet
  paste              enter code line by line, finish with a single '.'
  filename <name>    set the filename sent with the code
  type <review type> general | security | performance | style
  submit             send the current code for review
  show               print the current result or error
  history            list recent reviews
  clear-history      forget recent reviews
  reset              clear the current result or error
  health             check whether the service is reachable
  help               show this text
  quit               leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Load(PathBuf),
    Sample,
    Paste,
    Filename(String),
    Type(ReviewType),
    Submit,
    Show,
    History,
    ClearHistory,
    Reset,
    Health,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_shell_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "load" | "open" => {
            if arg.is_empty() {
                return Err("usage: load <path>".into());
            }
            ShellCommand::Load(PathBuf::from(arg))
        }
        "sample" => ShellCommand::Sample,
        "paste" => ShellCommand::Paste,
        "filename" | "name" => {
            if arg.is_empty() {
                return Err("usage: filename <name>".into());
            }
            ShellCommand::Filename(arg.to_string())
        }
        "type" => ShellCommand::Type(arg.parse().map_err(|e| format!("{e}"))?),
        "submit" | "review" | "run" => ShellCommand::Submit,
        "show" => ShellCommand::Show,
        "history" => ShellCommand::History,
        "clear-history" => ShellCommand::ClearHistory,
        "reset" => ShellCommand::Reset,
        "health" => ShellCommand::Health,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };
    Ok(Some(command))
}

/// Runs the shell until `quit` or end of input.
pub async fn run_shell<R, W>(store: &mut SessionStore, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "Type 'help' for commands.")?;

    loop {
        write!(
            out,
            "[{} | {}]> ",
            store.state().draft.filename,
            store.state().draft.review_type
        )?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = match parse_shell_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            ShellCommand::Load(path) => match load_source_file(&path) {
                Ok(source) => {
                    let lines_loaded = source.code.lines().count();
                    store.load_source(source);
                    writeln!(out, "Loaded {} lines", lines_loaded)?;
                }
                Err(err) => writeln!(out, "{:#}", err)?,
            },
            ShellCommand::Sample => {
                store.load_sample();
                writeln!(out, "Loaded sample code")?;
            }
            ShellCommand::Paste => {
                writeln!(out, "Paste code, end with a line containing only '.'")?;
                out.flush()?;
                let mut code = String::new();
                while let Some(line) = lines.next_line().await.context("Failed to read input")? {
                    if line.trim_end() == PASTE_TERMINATOR {
                        break;
                    }
                    code.push_str(&line);
                    code.push('\n');
                }
                store.update_code(code);
                store.reset();
            }
            ShellCommand::Filename(name) => store.update_filename(name),
            ShellCommand::Type(review_type) => store.select_review_type(review_type),
            ShellCommand::Submit => {
                store.submit_draft();
                if store.state().loading {
                    write!(out, "{}", render::render_state(store.state()))?;
                    out.flush()?;
                }
                store.settle().await;
                write!(out, "{}", render::render_state(store.state()))?;
            }
            ShellCommand::Show => write!(out, "{}", render::render_state(store.state()))?,
            ShellCommand::History => {
                write!(out, "{}", render::render_history(&store.state().history))?
            }
            ShellCommand::ClearHistory => {
                store.clear_history();
                writeln!(out, "History cleared")?;
            }
            ShellCommand::Reset => store.reset(),
            ShellCommand::Health => {
                store.check_health();
                store.settle().await;
                let status = store
                    .state()
                    .health
                    .clone()
                    .unwrap_or_else(HealthStatus::offline);
                write!(out, "{}", render::render_health(&status))?;
            }
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}
