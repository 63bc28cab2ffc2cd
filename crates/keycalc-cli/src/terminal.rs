//! Interactive terminal mode
//!
//! Puts the terminal into raw mode and redraws a single display line after
//! every key. `q` or Ctrl-C leaves.

use std::io::{self, Write};

use console::style;
use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::Print,
    terminal::{self, ClearType},
};
use keycalc::driver::{Calculator, DisplaySink};
use keycalc::EngineConfig;

use crate::error::CliResult;
use crate::keys::KeyInput;

/// Display line drawn in place on a terminal writer
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a display over `out`
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Takes the first write error since the last call
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// The underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print(style(text).bold())
        )?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show(&mut self, text: &str) {
        if let Err(err) = self.draw(text) {
            self.error.get_or_insert(err);
        }
    }
}

/// Runs the interactive loop until the user quits
pub fn run_interactive(config: EngineConfig) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "{}",
        style("keycalc - type an expression, Enter evaluates, q quits").dim()
    )?;

    terminal::enable_raw_mode()?;
    let result = event_loop(config);
    terminal::disable_raw_mode()?;
    writeln!(stdout)?;
    result
}

fn event_loop(config: EngineConfig) -> CliResult<()> {
    let mut calc = Calculator::with_config(config, TerminalDisplay::new(io::stdout()));
    loop {
        if let Some(err) = calc.sink_mut().take_error() {
            return Err(err.into());
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match KeyInput::from_event(key) {
            KeyInput::Quit => return Ok(()),
            KeyInput::Key(name) => {
                calc.handle_key(&name);
            }
            KeyInput::Ignore => {}
        }
    }
}
