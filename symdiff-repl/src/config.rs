//! Command-line options.

use std::path::PathBuf;
use symdiff_parser::tree::lowercase_identifier;
use thiserror::Error;

/// Printed on `--help` and after a bad argument.
pub const USAGE: &str = "\
usage: symdiff-repl [options] [file]

Differentiates every expression read from `file`, from piped stdin, or from an interactive prompt.

options:
    --var <letter>   differentiate with respect to this variable (default: x)
    --order <n>      number of successive derivatives to print (default: 1)
    --at <value>     also evaluate every derivative at this point
    --latex          print LaTeX instead of source notation
    --steps          print the simplification steps of every derivative
    --dot <dir>      write a Graphviz file per tree into this directory
    -h, --help       print this message";

/// How expressions are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Fully parenthesized infix that the parser reads back.
    ///
    /// This is the default option.
    #[default]
    Source,

    /// LaTeX, with only the parentheses precedence requires.
    Latex,
}

/// Options controlling what the REPL prints for each expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// The variable to differentiate with respect to.
    ///
    /// The default value is `x`.
    pub variable: char,

    /// How many successive derivatives to print.
    ///
    /// The default value is `1`.
    pub order: usize,

    /// If set, every derivative is also evaluated at this point.
    pub at: Option<f64>,

    /// The notation used for printing expressions.
    pub notation: Notation,

    /// Whether to print the simplification steps of every derivative.
    pub steps: bool,

    /// If set, a Graphviz file is written into this directory for every printed tree.
    pub dot_dir: Option<PathBuf>,

    /// The file to read expressions from, one per line.
    pub file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variable: 'x',
            order: 1,
            at: None,
            notation: Notation::default(),
            steps: false,
            dot_dir: None,
            file: None,
        }
    }
}

impl Options {
    /// Wraps the given [`Options`] into a builder for further customization.
    pub fn into_builder(self) -> OptionsBuilder {
        OptionsBuilder(self)
    }

    /// Parses options from command-line arguments, not including the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut builder = OptionsBuilder::new();
        let mut file = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &'static str| args.next().ok_or(ConfigError::MissingValue(flag));
            builder = match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::Help),
                "--var" => builder.variable(parse_variable(value("--var")?)?),
                "--order" => builder.order(parse_order(value("--order")?)?),
                "--at" => builder.at(Some(parse_point(value("--at")?)?)),
                "--latex" => builder.notation(Notation::Latex),
                "--steps" => builder.steps(true),
                "--dot" => builder.dot_dir(Some(PathBuf::from(value("--dot")?))),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                },
                _ if file.is_some() => return Err(ConfigError::ExtraArgument(arg.clone())),
                _ => {
                    file = Some(PathBuf::from(&arg));
                    builder
                },
            };
        }

        Ok(builder.file(file).build())
    }
}

/// The command-line arguments could not be turned into [`Options`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `--help` was given; not a failure.
    #[error("help requested")]
    Help,

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("missing value for `{0}`")]
    MissingValue(&'static str),

    #[error("invalid value `{value}` for `{flag}`: expected {expected}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unexpected argument `{0}`: only one input file is accepted")]
    ExtraArgument(String),
}

fn parse_variable(value: String) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(lowercase_identifier(c)),
        _ => Err(ConfigError::InvalidValue { flag: "--var", value, expected: "a single letter" }),
    }
}

fn parse_order(value: String) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(order) if order > 0 => Ok(order),
        _ => Err(ConfigError::InvalidValue { flag: "--order", value, expected: "a positive integer" }),
    }
}

fn parse_point(value: String) -> Result<f64, ConfigError> {
    match value.parse::<f64>() {
        Ok(point) if point.is_finite() => Ok(point),
        _ => Err(ConfigError::InvalidValue { flag: "--at", value, expected: "a finite number" }),
    }
}

/// Helper struct to build an [`Options`] struct.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable to differentiate with respect to.
    pub fn variable(mut self, variable: char) -> Self {
        self.0.variable = variable;
        self
    }

    /// Sets the number of successive derivatives to print.
    pub fn order(mut self, order: usize) -> Self {
        self.0.order = order;
        self
    }

    /// Sets the point every derivative is evaluated at, if any.
    pub fn at(mut self, at: Option<f64>) -> Self {
        self.0.at = at;
        self
    }

    /// Sets the notation. See [`Notation`] for more information.
    pub fn notation(mut self, notation: Notation) -> Self {
        self.0.notation = notation;
        self
    }

    /// Sets whether to print simplification steps.
    pub fn steps(mut self, steps: bool) -> Self {
        self.0.steps = steps;
        self
    }

    /// Sets the directory Graphviz files are written to, if any.
    pub fn dot_dir(mut self, dot_dir: Option<PathBuf>) -> Self {
        self.0.dot_dir = dot_dir;
        self
    }

    /// Sets the file expressions are read from, if any.
    pub fn file(mut self, file: Option<PathBuf>) -> Self {
        self.0.file = file;
        self
    }

    /// Builds the [`Options`] struct.
    pub fn build(self) -> Options {
        self.0
    }
}
