//! Line commands for the interactive session.

use std::str::FromStr;

use hue_core::{HarmonyMode, Hsl, RandomSource, ScaleStep};

use crate::error::AppError;

use super::format::ColorFormat;
use super::namer::Namer;
use super::session::{PaletteSession, Swatch};

pub const HELP: &str = "\
commands:
  base HEX     set the base color
  mode MODE    random | monochromatic | analogous | complementary | split-complementary | triadic
  lock SLOT    lock or unlock slot 0-4
  random       generate a new palette (locked slots are kept)
  format FMT   hex | rgb | hsl | hsb | cmyk
  scale SLOT   show the tonal scale of slot 0-4
  show         show the current palette
  help         show this help
  quit         leave the session";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Base(Hsl),
    Mode(HarmonyMode),
    Lock(usize),
    Random,
    Format(ColorFormat),
    Scale(usize),
    Show,
    Help,
    Quit,
}

/// What a command produced, for the caller to print.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Palette(Vec<Swatch>),
    Scale(Vec<ScaleStep>),
    Message(String),
    Quit,
}

fn parse_slot(arg: &str) -> Result<usize, AppError> {
    arg.parse::<usize>()
        .map_err(|_| AppError::InvalidSlot(arg.to_string()))
}

impl FromStr for SessionCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(SessionCommand::Show);
        };
        let arg = parts.next();

        let required = |command: &'static str, expected: &'static str| {
            arg.ok_or(AppError::MissingArgument { command, expected })
        };

        match command.to_ascii_lowercase().as_str() {
            "base" => {
                let hex = required("base", "a hex color")?;
                Hsl::from_hex(hex)
                    .map(SessionCommand::Base)
                    .ok_or_else(|| AppError::InvalidHex(hex.to_string()))
            }
            "mode" => Ok(SessionCommand::Mode(
                required("mode", "a harmony mode")?.parse()?,
            )),
            "lock" => Ok(SessionCommand::Lock(parse_slot(required("lock", "a slot")?)?)),
            "random" | "r" => Ok(SessionCommand::Random),
            "format" => Ok(SessionCommand::Format(
                required("format", "a color format")?.parse()?,
            )),
            "scale" => Ok(SessionCommand::Scale(parse_slot(required("scale", "a slot")?)?)),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

impl SessionCommand {
    /// Apply the command to a session.
    pub fn apply<R: RandomSource, N: Namer>(
        self,
        session: &mut PaletteSession<R, N>,
    ) -> Result<CommandOutcome, AppError> {
        let outcome = match self {
            SessionCommand::Base(color) => {
                session.set_base(color);
                CommandOutcome::Palette(session.swatches())
            }
            SessionCommand::Mode(mode) => {
                session.set_mode(mode);
                CommandOutcome::Palette(session.swatches())
            }
            SessionCommand::Lock(slot) => {
                let locked = session.toggle_lock(slot)?;
                let state = if locked { "locked" } else { "unlocked" };
                CommandOutcome::Message(format!("slot {slot} {state}"))
            }
            SessionCommand::Random => {
                session.randomize();
                CommandOutcome::Palette(session.swatches())
            }
            SessionCommand::Format(format) => {
                session.set_format(format);
                CommandOutcome::Palette(session.swatches())
            }
            SessionCommand::Scale(slot) => CommandOutcome::Scale(session.scale(slot)?),
            SessionCommand::Show => CommandOutcome::Palette(session.swatches()),
            SessionCommand::Help => CommandOutcome::Message(HELP.to_string()),
            SessionCommand::Quit => CommandOutcome::Quit,
        };
        Ok(outcome)
    }
}
