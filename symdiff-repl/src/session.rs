use crate::{config::{Notation, Options}, error::Error};
use std::{fs::{self, File}, io::{BufWriter, Write}};
use symdiff_compute::{dump::{DumpCounter, GraphDump}, evaluate, Stages};
use symdiff_parser::{parser::parse, tree::{fmt::Latex, Node}};
use tracing::debug;

/// Differentiates expressions one line at a time, according to the [`Options`].
#[derive(Debug)]
pub struct Session {
    options: Options,

    /// Numbers the Graphviz files written during this session.
    counter: DumpCounter,
}

impl Session {
    pub fn new(options: Options) -> Self {
        Self { options, counter: DumpCounter::default() }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Renders the expression in the configured notation.
    fn render(&self, node: &Node) -> String {
        match self.options.notation {
            Notation::Source => node.to_string(),
            Notation::Latex => node.as_display().to_string(),
        }
    }

    /// Writes a Graphviz file for the tree, if a directory was configured.
    fn dump(&mut self, node: &Node) -> Result<(), Error> {
        let Some(dir) = &self.options.dot_dir else {
            return Ok(());
        };

        fs::create_dir_all(dir)?;
        let path = dir.join(self.counter.next_file_name());
        let mut file = BufWriter::new(File::create(&path)?);
        node.write_dot(&mut self.counter, &mut file)?;
        file.flush()?;

        debug!(path = %path.display(), "wrote graph");
        Ok(())
    }

    /// Parses the input, then prints it followed by its derivatives up to the configured order.
    pub fn run_line(&mut self, input: &str, out: &mut dyn Write) -> Result<(), Error> {
        let expr = parse(input).map_err(Error::Parse)?;
        let var = self.options.variable;

        writeln!(out, "f({var}) = {}", self.render(&expr))?;
        self.dump(&expr)?;

        for stage in Stages::new(&expr, var).take(self.options.order) {
            let label = match stage.order {
                1 => format!("d/d{var}"),
                n => format!("d^{n}/d{var}^{n}"),
            };
            writeln!(out, "{label} = {}", self.render(&stage.expr))?;

            if let Some(at) = self.options.at {
                let value = evaluate(&stage.expr, var, at).map_err(Error::Eval)?;
                writeln!(out, "    at {var} = {at}: {value}")?;
            }

            if self.options.steps {
                for step in &stage.steps {
                    writeln!(out, "    {step}")?;
                }
            }

            self.dump(&stage.expr)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symdiff_compute::eval::error::DivisionByZero;
    use symdiff_parser::parser::error::is_syntax_error;
    use crate::config::OptionsBuilder;
    use super::*;

    fn run(options: Options, input: &str) -> Result<String, Error> {
        let mut out = Vec::new();
        Session::new(options).run_line(input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn first_derivative() {
        let out = run(Options::default(), "x^2 + 3*x").unwrap();
        assert_eq!(out, "f(x) = ((x)^(2))+((3)*(x))\nd/dx = ((x)*(2))+(3)\n");
    }

    #[test]
    fn latex_and_evaluation() {
        let options = OptionsBuilder::new()
            .notation(Notation::Latex)
            .at(Some(2.0))
            .build();
        let out = run(options, "x^2 + 3*x").unwrap();
        assert_eq!(out, "f(x) = x^{2}+3x\nd/dx = x\\cdot 2+3\n    at x = 2: 7\n");
    }

    #[test]
    fn higher_orders_and_steps() {
        let options = OptionsBuilder::new()
            .variable('t')
            .order(3)
            .steps(true)
            .build();
        let out = run(options, "t^3").unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "f(t) = (t)^(3)");
        assert!(lines.contains(&"d/dt = ((t)^(2))*(3)"));
        assert!(lines.contains(&"d^3/dt^3 = 6"));
        assert!(lines.contains(&"    a^1 = a"));
    }

    #[test]
    fn parse_failure() {
        match run(Options::default(), "(2+") {
            Err(Error::Parse(err)) => assert!(is_syntax_error(&err)),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn evaluation_failure() {
        let options = OptionsBuilder::new().at(Some(0.0)).build();
        match run(options, "1/x") {
            Err(Error::Eval(err)) => assert!(err.is::<DivisionByZero>()),
            other => panic!("expected an evaluation error, got {:?}", other),
        }
    }
}
