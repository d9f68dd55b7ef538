mod config;
mod error;
mod session;

use config::{ConfigError, Options, USAGE};
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal, Write}, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Runs one line of input, printing the result to `out` or the failure to stderr. Returns true
/// on success.
fn run_line(session: &mut Session, input: &str, out: &mut dyn Write) -> bool {
    match session.run_line(input, out) {
        Ok(()) => true,
        Err(err) => {
            err.report_to_stderr(input);
            false
        },
    }
}

/// Runs every non-blank line of the reader. Returns true if every line succeeded.
fn run_lines(session: &mut Session, reader: impl BufRead, out: &mut dyn Write) -> io::Result<bool> {
    let mut ok = true;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        ok &= run_line(session, &line, out);
    }
    Ok(ok)
}

/// Runs the interactive prompt until end of input or interruption.
fn run_prompt(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run_line(session, &input, &mut io::stdout().lock());
        Ok(())
    }

    loop {
        match process_line(&mut rl, session) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(ConfigError::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        },
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        },
    };
    let mut session = Session::new(options);

    let result = if let Some(filename) = session.options().file.clone() {
        // run source file
        File::open(&filename)
            .and_then(|file| run_lines(&mut session, BufReader::new(file), &mut io::stdout().lock()))
            .map_err(|err| format!("could not read `{}`: {}", filename.display(), err))
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        run_lines(&mut session, io::stdin().lock(), &mut io::stdout().lock())
            .map_err(|err| format!("could not read stdin: {}", err))
    } else {
        // run the repl / interactive mode
        run_prompt(&mut session)
            .map(|()| true)
            .map_err(|err| err.to_string())
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
