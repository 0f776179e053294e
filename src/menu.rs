//! Interactive menu shell.
//!
//! Four options: look up one item, list every item, show the histogram,
//! exit. Each view clears the screen, switches color and waits for Enter
//! before returning to the menu. End of input counts as exit.

use std::io::{self, BufRead, Write};

use crate::engine::Engine;
use crate::report;

const RULE: &str =
    "*************************************************************************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Lookup,
    List,
    Histogram,
    Exit,
    Invalid,
}

impl Choice {
    pub fn from_number(n: i64) -> Self {
        match n {
            1 => Choice::Lookup,
            2 => Choice::List,
            3 => Choice::Histogram,
            4 => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

/// Terminal tint for each view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Menu,
    Lookup,
    List,
    Histogram,
}

pub struct Menu<R, W> {
    engine: Engine,
    input: R,
    out: W,
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(engine: Engine, input: R, out: W, color: bool) -> Self {
        Menu {
            engine,
            input,
            out,
            color,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.screen(Tint::Menu)?;
            self.print_main_menu()?;

            let Some(choice) = self.read_choice()? else {
                break;
            };

            match choice {
                Choice::Lookup => {
                    self.screen(Tint::Lookup)?;
                    self.lookup_view()?;
                }
                Choice::List => {
                    self.screen(Tint::List)?;
                    self.list_view()?;
                }
                Choice::Histogram => {
                    self.screen(Tint::Histogram)?;
                    self.histogram_view()?;
                }
                Choice::Exit => break,
                Choice::Invalid => writeln!(self.out, "Invalid selection.")?,
            }

            if !self.pause()? {
                break;
            }
        }

        self.reset()
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "{:^85}", "Corner Grocer Tracking")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out)?;
        writeln!(self.out, "Please enter your selection as a number (1, 2, 3, or 4)")?;
        writeln!(self.out)?;
        writeln!(self.out, "1: Look up how many times a specific item was purchased")?;
        writeln!(self.out, "2: See a list of all items and how many times each was purchased")?;
        writeln!(self.out, "3: View a star chart showing item purchase frequency")?;
        writeln!(self.out, "4: Exit program")?;
        writeln!(self.out)?;
        write!(self.out, "Enter your selection: ")?;
        self.out.flush()
    }

    /// Re-prompts until a line parses as a number. `None` on end of input.
    fn read_choice(&mut self) -> io::Result<Option<Choice>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(Some(Choice::from_number(n))),
                Err(_) => {
                    write!(self.out, "Invalid Input! Please enter 1, 2, 3, or 4: ")?;
                    self.out.flush()?;
                }
            }
        }
    }

    fn lookup_view(&mut self) -> io::Result<()> {
        write!(self.out, "Please enter the item or word you wish to look for: ")?;
        self.out.flush()?;

        let line = self.read_line()?.unwrap_or_default();
        writeln!(self.out)?;

        // one token, like the record itself
        let Some(item) = line.split_whitespace().next() else {
            return writeln!(self.out, "{}", report::lookup_message("", None));
        };

        match self.engine.lookup(item) {
            Ok(found) => writeln!(self.out, "{}", report::lookup_message(item, found.count()))?,
            Err(e) => self.show_error(&e)?,
        }
        writeln!(self.out)
    }

    fn list_view(&mut self) -> io::Result<()> {
        match self.engine.list_all() {
            Ok(items) => {
                for (name, count) in items {
                    writeln!(self.out, "{name} {count}")?;
                }
                Ok(())
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn histogram_view(&mut self) -> io::Result<()> {
        match self.engine.render_histogram() {
            Ok(lines) => {
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
                writeln!(self.out)
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn show_error(&mut self, e: &crate::error::Error) -> io::Result<()> {
        log::warn!("{e}");
        writeln!(self.out, "Error: {e}")
    }

    /// Wait for Enter. Returns false when input is exhausted.
    fn pause(&mut self) -> io::Result<bool> {
        write!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;
        Ok(self.read_line()?.is_some())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn screen(&mut self, tint: Tint) -> io::Result<()> {
        if self.color {
            terminal::paint(&mut self.out, tint)?;
        }
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.color {
            terminal::reset(&mut self.out)?;
        }
        self.out.flush()
    }
}

#[cfg(feature = "tui")]
mod terminal {
    use super::Tint;
    use crossterm::cursor::MoveTo;
    use crossterm::style::{Color, ResetColor, SetForegroundColor};
    use crossterm::terminal::{Clear, ClearType};
    use std::io::{self, Write};

    fn color(tint: Tint) -> Color {
        match tint {
            Tint::Menu => Color::Reset,
            Tint::Lookup => Color::Red,
            Tint::List => Color::Magenta,
            Tint::Histogram => Color::Blue,
        }
    }

    pub fn paint<W: Write>(out: &mut W, tint: Tint) -> io::Result<()> {
        crossterm::execute!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetForegroundColor(color(tint))
        )
    }

    pub fn reset<W: Write>(out: &mut W) -> io::Result<()> {
        crossterm::execute!(out, ResetColor)
    }
}

#[cfg(not(feature = "tui"))]
mod terminal {
    use super::Tint;
    use std::io::{self, Write};

    pub fn paint<W: Write>(_out: &mut W, _tint: Tint) -> io::Result<()> {
        Ok(())
    }

    pub fn reset<W: Write>(_out: &mut W) -> io::Result<()> {
        Ok(())
    }
}
