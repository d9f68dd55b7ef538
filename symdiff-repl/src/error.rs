use std::io;
use symdiff_error::Error as SymdiffError;

/// Utility enum to package errors that can occur while parsing / evaluating.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed.
    Parse(SymdiffError),

    /// A derivative could not be evaluated at the requested point.
    Eval(SymdiffError),

    /// Output (stdout or a Graphviz file) could not be written.
    Io(io::Error),
}

impl Error {
    /// Report the error to stderr. Evaluation errors carry no spans, so only their message and
    /// help are shown.
    pub fn report_to_stderr(&self, input: &str) {
        let printed = match self {
            Self::Parse(err) | Self::Eval(err) => err.report_to_stderr("input", input),
            Self::Io(err) => {
                eprintln!("error: {}", err);
                Ok(())
            },
        };

        if let Err(err) = printed {
            eprintln!("error: could not print report: {}", err);
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
