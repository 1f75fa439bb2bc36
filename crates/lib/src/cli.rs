//! CLI helpers.

mod answer;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;

use anyhow::{anyhow, bail, ensure, Context, Result};

use crate::input::IStr;

pub use self::answer::Answer;
#[doc(hidden)]
pub use self::error::error_context;
pub use self::error::LineCol;
use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Options of a puzzle binary.
#[derive(Default)]
pub struct Opts {
    /// Print diagnostics.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Only report the given part.
    part: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1).map(|arg| arg.into_string()))?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    fn parse_from<I, E>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String, E>>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Ok(arg) = arg else {
                bail!("non-utf8 argument");
            };

            match arg.as_str() {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--part" => {
                    let part = it.next().context("missing argument to `--part`")?;
                    let Ok(part) = part else {
                        bail!("missing string argument to `--part`");
                    };

                    let part = part
                        .parse::<usize>()
                        .context("bad argument to `--part`")?;

                    ensure!(matches!(part, 1 | 2), "`--part` must be 1 or 2, got {part}");
                    opts.part = Some(part);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Print the answers of a solver.
    pub fn report<T>(&self, value: &T) -> Result<()>
    where
        T: ?Sized + Answer,
    {
        let parts = value.parts();

        if let Some(part) = self.part {
            ensure!(part <= parts.len(), "there is no part {part} to report");
        }

        let stdout = std::io::stdout();

        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        let mut o = Output::new(stdout.lock(), kind);

        for (n, answer) in parts.into_iter().enumerate() {
            let part = n + 1;

            if self.part.is_some_and(|p| p != part) {
                continue;
            }

            o.answer(part, answer)?;
        }

        Ok(())
    }
}

/// Run a solver over the given input and report its answers.
#[doc(hidden)]
pub fn run<T, F>(opts: &Opts, path: &'static str, input: IStr, solve: F) -> Result<()>
where
    F: FnOnce(IStr) -> Result<T>,
    T: Answer,
{
    let value = solve(input).map_err(|error| error_context(path, input, error))?;
    opts.report(&value)
}

/// Run a solver over the given input and check its answers against the
/// expected ones before reporting them.
#[doc(hidden)]
pub fn run_expect<T, C, F>(
    opts: &Opts,
    path: &'static str,
    input: IStr,
    expected: C,
    solve: F,
) -> Result<()>
where
    F: FnOnce(IStr) -> Result<T>,
    T: fmt::Debug + Answer + OutputEq<C>,
    C: fmt::Debug,
{
    let value = solve(input).map_err(|error| error_context(path, input, error))?;

    if !value.output_eq(&expected) {
        bail!("{path}: {value:?} (value) != {expected:?} (expected)");
    }

    opts.report(&value)
}

#[cfg(test)]
mod tests {
    use super::Opts;

    fn parse(args: &[&str]) -> anyhow::Result<Opts> {
        Opts::parse_from(args.iter().map(|arg| Ok::<_, ()>(arg.to_string())))
    }

    #[test]
    fn test_parse_opts() {
        let opts = parse(&["--verbose", "--part", "2"]).unwrap();
        assert!(opts.verbose);
        assert!(!opts.json);
        assert_eq!(opts.part, Some(2));
    }

    #[test]
    fn test_bad_opts() {
        assert!(parse(&["--part"]).is_err());
        assert!(parse(&["--part", "3"]).is_err());
        assert!(parse(&["--part", "one"]).is_err());
        assert!(parse(&["--bench"]).is_err());
    }

    #[test]
    fn test_stop_at_separator() {
        let opts = parse(&["--json", "--", "--bench"]).unwrap();
        assert!(opts.json);
    }
}
