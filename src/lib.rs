pub mod engine;
pub mod error;
pub mod world;

use std::io::{BufRead, Write};

use engine::{Choice, Output, OutputBlock, QUIT_TEXT, parse_choice, render_room, try_move};
use error::{MoveError, Result};
use world::Room;

pub use world::{Direction, mansion};

/// Why the exploration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    LeafReached,
    Quit,
    InputClosed,
}

/// Where the explorer stands. `Active` rooms still wait for a choice;
/// a `Terminated` explorer ignores further input.
#[derive(Debug, Clone, Copy)]
pub enum State<'a> {
    Active(&'a Room),
    Terminated(&'a Room, EndReason),
}

/// Walks a room tree from its root. Borrows the tree for its whole life.
pub struct Explorer<'a> {
    state: State<'a>,
}

impl<'a> Explorer<'a> {
    pub fn new(root: &'a Room) -> Self {
        Explorer {
            state: State::Active(root),
        }
    }

    /// Current state of the walk.
    pub fn state(&self) -> State<'a> {
        self.state
    }

    pub fn current(&self) -> &'a Room {
        match self.state {
            State::Active(room) | State::Terminated(room, _) => room,
        }
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.state {
            State::Active(_) => None,
            State::Terminated(_, reason) => Some(reason),
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, State::Terminated(..))
    }

    /// Output for the first iteration. A root without children ends here.
    pub fn initialize(&mut self) -> Output {
        tracing::info!(room = self.current().name(), "exploration started");
        let mut out = Output::new();
        self.enter(&mut out);
        out
    }

    /// Process a single line of input; returns (output, terminated?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        let room = match self.state {
            State::Active(room) => room,
            State::Terminated(..) => return (out, true),
        };

        match parse_choice(input) {
            Choice::Quit => {
                out.event(QUIT_TEXT);
                self.terminate(EndReason::Quit);
            }
            Choice::Go(direction) => match try_move(room, direction) {
                Ok(next) => {
                    tracing::debug!(from = room.name(), to = next.name(), ?direction, "moved");
                    self.state = State::Active(next);
                    self.enter(&mut out);
                }
                Err(err) => self.reject(&mut out, err),
            },
            Choice::Invalid(raw) => self.reject(&mut out, MoveError::InvalidChoice(raw)),
        }

        (out, self.is_terminated())
    }

    /// End of input: stop where we are.
    pub fn close_input(&mut self) {
        if !self.is_terminated() {
            self.terminate(EndReason::InputClosed);
        }
    }

    fn enter(&mut self, out: &mut Output) {
        let room = self.current();
        render_room(out, room);
        if room.is_leaf() {
            self.terminate(EndReason::LeafReached);
        }
    }

    fn reject(&mut self, out: &mut Output, err: MoveError) {
        tracing::debug!(room = self.current().name(), error = ?err, "choice rejected");
        out.event(err.to_string());
        render_room(out, self.current());
    }

    fn terminate(&mut self, reason: EndReason) {
        let room = self.current();
        tracing::info!(room = room.name(), ?reason, "exploration finished");
        self.state = State::Terminated(room, reason);
    }
}

/// Where and why a [`run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<'a> {
    pub room: &'a str,
    pub reason: EndReason,
}

const SEPARATOR: &str = "----------------------------------------";

/// Writes output blocks in the console layout: room banner, blank line
/// around events, exits list, prompt without newline.
pub fn flush_output<W: Write>(writer: &mut W, out: Output) -> Result<()> {
    let mut after_event = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                if after_event {
                    writeln!(writer)?;
                }
                writeln!(writer, "{SEPARATOR}")?;
                writeln!(writer, "VOCÊ ESTÁ EM: {t}")?;
                writeln!(writer, "{SEPARATOR}")?;
                after_event = false;
            }
            OutputBlock::Text(line) => {
                writeln!(writer, "{line}")?;
            }
            OutputBlock::Event(ev) => {
                writeln!(writer)?;
                writeln!(writer, "{ev}")?;
                after_event = true;
            }
            OutputBlock::Exits(exits) => {
                writeln!(writer, "Caminhos disponiveis:")?;
                for line in exits {
                    writeln!(writer, "{line}")?;
                }
            }
            OutputBlock::Prompt(p) => {
                write!(writer, "{p}")?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Runs the explorer to completion over `input` and `output`.
pub fn run<'a, R: BufRead, W: Write>(
    mut explorer: Explorer<'a>,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome<'a>> {
    flush_output(output, explorer.initialize())?;

    // bytes first: a line that is not UTF-8 is just an invalid choice
    let mut buf = Vec::new();
    while !explorer.is_terminated() {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            explorer.close_input();
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let (out, _) = explorer.step(&line);
        flush_output(output, out)?;
    }

    let reason = explorer.end_reason().unwrap_or(EndReason::InputClosed);
    Ok(Outcome {
        room: explorer.current().name(),
        reason,
    })
}
