use std::io::{self, stdin, stdout, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use isl_core::api::{ConvertResponse, ErrorBody, TextInput};
use isl_core::{logging, Config, IslService};

fn main() -> io::Result<()> {
    logging::init(false, true);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            Config::default()
        }
    };
    let service = IslService::from_config(&config);
    let mut stdout = stdout();
    let mut last: Option<(String, Result<ConvertResponse, ErrorBody>)> = None;

    loop {
        print_ui(&service, last.as_ref(), &mut stdout)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let text = input.trim_end_matches(['\r', '\n']);

        match text {
            "exit" => break,
            ":phrases" => {
                print_phrases(&service, &mut stdout)?;
                stdin().read_line(&mut String::new())?;
            }
            _ => {
                let result = service
                    .process(&TextInput {
                        text: text.to_string(),
                    })
                    .map_err(|err| ErrorBody::from(&err));
                last = Some((text.to_string(), result));
            }
        }
    }

    execute!(stdout, ResetColor, Print("\nBye.\n"))
}

fn print_ui(
    service: &IslService,
    last: Option<&(String, Result<ConvertResponse, ErrorBody>)>,
    stdout: &mut Stdout,
) -> io::Result<()> {
    let health = service.health();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        stdout,
        Print("ISL Sign Mapper Simulator\n"),
        Print("---------------------------------------------------------------\n"),
        Print("Type text and press [Enter] to convert it.\n"),
        Print("':phrases' lists known phrases, 'exit' quits.\n\n")
    )?;

    let colour = if health.issues.is_empty() && health.missing_letters.is_empty() {
        Color::Green
    } else {
        Color::Yellow
    };
    queue!(
        stdout,
        SetForegroundColor(colour),
        Print(format!(
            "Catalogs: {} phrases, {} letters ({:?})\n",
            health.phrases_count, health.letters_count, health.status
        )),
        ResetColor
    )?;
    for issue in &health.issues {
        queue!(stdout, Print(format!("  ! {issue}\n")))?;
    }

    if let Some((text, result)) = last {
        queue!(stdout, Print(format!("\nInput: [{text}]\n")))?;
        match result {
            Ok(ConvertResponse::Gif { src, alt }) => queue!(
                stdout,
                SetForegroundColor(Color::Cyan),
                Print(format!("Phrase '{alt}' -> {src}\n")),
                ResetColor
            )?,
            Ok(ConvertResponse::Sequence { data, .. }) => {
                queue!(
                    stdout,
                    SetForegroundColor(Color::Cyan),
                    Print(format!("Spelled with {} letters:\n", data.len())),
                    ResetColor
                )?;
                for (i, src) in data.iter().enumerate() {
                    queue!(stdout, Print(format!("  {:>2}: {src}\n", i + 1)))?;
                }
            }
            Err(body) => queue!(
                stdout,
                SetForegroundColor(Color::Red),
                Print(format!("Rejected ({}): {}\n", body.status, body.detail)),
                ResetColor
            )?,
        }
    }

    queue!(stdout, Print("\n> "))?;
    stdout.flush()
}

fn print_phrases(service: &IslService, stdout: &mut Stdout) -> io::Result<()> {
    let listing = service.phrases();
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(stdout, Print(format!("{} known phrases:\n", listing.count)))?;
    for phrase in &listing.phrases {
        queue!(stdout, Print(format!("  {phrase}\n")))?;
    }
    queue!(stdout, Print("\nPress [Enter] to go back."))?;
    stdout.flush()
}
