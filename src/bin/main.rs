use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use isl_core::api::{ErrorBody, TextInput};
use isl_core::error::AppError;
use isl_core::{logging, protocol, Config, IslService};

/// Map text to Indian Sign Language phrase animations or finger-spelled letters
#[derive(Debug, FromArgs)]
struct Args {
    /// enable verbose logging, overridden by "quiet" if passed
    #[argh(switch, short = 'v', long = "verbose")]
    verbose: bool,
    /// disable all logging, overrides verbose
    #[argh(switch, short = 'q', long = "quiet")]
    quiet: bool,
    /// path to a JSON config file, ISL_* environment variables are used when absent
    #[argh(option)]
    config: Option<PathBuf>,
    /// directory holding the phrase animations
    #[argh(option)]
    gifs_dir: Option<PathBuf>,
    /// directory holding the letter images
    #[argh(option)]
    letters_dir: Option<PathBuf>,
    #[argh(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
enum Commands {
    Convert(ConvertCommand),
    Status(StatusCommand),
    Phrases(PhrasesCommand),
    Serve(ServeCommand),
}

/// Convert one piece of text and print the response
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "convert")]
struct ConvertCommand {
    /// text to convert
    #[argh(positional)]
    text: Vec<String>,
}

/// Print catalog health
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "status")]
struct StatusCommand {}

/// List every known phrase
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "phrases")]
struct PhrasesCommand {}

/// Answer line commands on stdin (the default)
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "serve")]
struct ServeCommand {}

impl Args {
    fn config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::from_env()?,
        };
        if let Some(dir) = &self.gifs_dir {
            config.gifs_dir = dir.clone();
        }
        if let Some(dir) = &self.letters_dir {
            config.letters_dir = dir.clone();
        }
        Ok(config)
    }
}

fn print_json<T: serde::Serialize>(body: &T) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, body)?;
    writeln!(stdout)?;
    Ok(())
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    let config = args.config()?;
    let service = IslService::from_config(&config);

    match args.command {
        Some(Commands::Convert(cmd)) => {
            let input = TextInput {
                text: cmd.text.join(" "),
            };
            match service.process(&input) {
                Ok(response) => print_json(&response)?,
                Err(err) => {
                    print_json(&ErrorBody::from(&err))?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Status(_)) => print_json(&service.health())?,
        Some(Commands::Phrases(_)) => print_json(&service.phrases())?,
        Some(Commands::Serve(_)) | None => {
            log::info!(
                "{} {} ready on stdin",
                isl_core::api::SERVICE_NAME,
                isl_core::api::VERSION
            );
            protocol::run(&service, io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    logging::init(args.verbose, args.quiet);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[ERROR] {err}");
            ExitCode::FAILURE
        }
    }
}
