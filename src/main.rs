use anyhow::{Context, Result};
use clap::Parser;
use deskcalc::calculator::{CalculatorState, Token, tokenize};
use deskcalc::config::Config;
use deskcalc::items::DisplayItem;
use deskcalc::ui::{render_display, render_keypad};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// A desk calculator driven by keypad labels.
///
/// Each KEYS argument is a keystroke string such as "12.5+3=" or "9 sqrt".
/// Without KEYS, lines are read from stdin until EOF or "q".
#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about)]
struct Cli {
    /// Print each display as a JSON object.
    #[arg(long)]
    json: bool,

    /// Print the display after every token rather than once per input.
    #[arg(long)]
    trace: bool,

    /// Print the keypad layout and exit.
    #[arg(long)]
    keypad: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Keystroke strings to apply in order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

/// Owns one calculator and writes its display to stdout.
struct Frontend<W: Write> {
    state: CalculatorState,
    config: Config,
    json: bool,
    trace: bool,
    out: W,
}

impl<W: Write> Frontend<W> {
    /// Tokenize and apply one input line.
    ///
    /// An untokenizable line is reported and skipped without touching the
    /// calculator.
    fn process(&mut self, input: &str) -> Result<()> {
        let tokens = match tokenize(input) {
            Ok(tokens) => tokens,
            Err(err) => {
                error!(%err, input, "invalid keys");
                eprintln!("deskcalc: {err}");
                return Ok(());
            }
        };

        for token in &tokens {
            self.state.apply(*token);
            if self.trace {
                self.show(Some(*token))?;
            }
        }
        if !self.trace && !tokens.is_empty() {
            self.show(None)?;
        }

        Ok(())
    }

    fn show(&mut self, token: Option<Token>) -> Result<()> {
        let item = DisplayItem::from(&self.state);
        if self.json {
            serde_json::to_writer(&mut self.out, &item)?;
            writeln!(self.out)?;
        } else {
            if let Some(token) = token {
                writeln!(self.out, "{token}")?;
            }
            writeln!(self.out, "{}", render_display(&item, self.config.display_width))?;
        }
        Ok(())
    }

    fn run_interactive(&mut self, input: impl BufRead, prompt: bool) -> Result<()> {
        if self.config.show_keypad {
            writeln!(self.out, "{}", render_keypad())?;
        }
        self.prompt(prompt)?;

        for line in input.lines() {
            let line = line.context("Failed to read from stdin")?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                break;
            }
            self.process(line)?;
            self.prompt(prompt)?;
        }

        Ok(())
    }

    fn prompt(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            write!(self.out, "{}", self.config.prompt)?;
            self.out.flush()?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.keypad {
        println!("{}", render_keypad());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "starting calculator");

    let mut frontend = Frontend {
        state: CalculatorState::new(),
        config,
        json: cli.json,
        trace: cli.trace,
        out: io::stdout().lock(),
    };

    if cli.keys.is_empty() {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal() && !cli.json;
        frontend.run_interactive(stdin.lock(), prompt)?;
    } else {
        for keys in &cli.keys {
            frontend.process(keys)?;
        }
    }

    Ok(())
}
