// File: src/protocol.rs
//! Line protocol used to drive the service from another process.
//!
//! Each input line is `COMMAND [argument]`; each answer is one JSON document
//! on its own line. `PROCESS` takes raw text, `PROCESS_JSON` a `{"text": ...}` body.

use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::Value;

use crate::api::{ErrorBody, IslService, TextInput};
use crate::error::{AppError, RequestError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Process(String),
    ProcessJson(String),
    Health,
    Phrases,
    Info,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word {
            "PROCESS" | "CONVERT" => Self::Process(rest.to_string()),
            "PROCESS_JSON" => Self::ProcessJson(rest.to_string()),
            "HEALTH" => Self::Health,
            "PHRASES" => Self::Phrases,
            "INFO" => Self::Info,
            "EXIT" => Self::Exit,
            _ => Self::Unknown(word.to_string()),
        }
    }
}

fn to_value<T: Serialize>(body: T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(body)?)
}

/// Runs one command. Returns `None` for `EXIT`.
pub fn handle(service: &IslService, command: &Command) -> Result<Option<Value>, AppError> {
    let reply = match command {
        Command::Process(text) => {
            let input = TextInput { text: text.clone() };
            match service.process(&input) {
                Ok(response) => to_value(response)?,
                Err(err) => error_value(&err)?,
            }
        }
        Command::ProcessJson(body) => match service.process_json(body) {
            Ok(response) => to_value(response)?,
            Err(err) => error_value(&err)?,
        },
        Command::Health => to_value(service.health())?,
        Command::Phrases => to_value(service.phrases())?,
        Command::Info => to_value(service.info())?,
        Command::Exit => return Ok(None),
        Command::Unknown(word) => to_value(ErrorBody {
            status: 404,
            detail: format!("unknown command: {word}"),
        })?,
    };
    Ok(Some(reply))
}

fn error_value(err: &RequestError) -> Result<Value, AppError> {
    log::debug!("Rejected request: {err}");
    to_value(ErrorBody::from(err))
}

/// Serves commands from `input` until `EXIT` or end of input.
/// A line that is not valid UTF-8 is answered with an error body; the session goes on.
pub fn run<R: BufRead, W: Write>(service: &IslService, mut input: R, mut output: W) -> Result<(), AppError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let reply = match std::str::from_utf8(&buf) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                log::debug!("<- {line:?}");

                match handle(service, &Command::parse(line))? {
                    Some(reply) => reply,
                    None => {
                        log::info!("Received EXIT, shutting down");
                        break;
                    }
                }
            }
            Err(err) => error_value(&RequestError::Malformed(format!(
                "line is not valid UTF-8: {err}"
            )))?,
        };

        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}
