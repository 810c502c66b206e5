pub mod command;
pub mod format;
pub mod namer;
pub mod session;

pub use command::{CommandOutcome, SessionCommand};
pub use format::{format_color, ColorFormat, ColorReport};
pub use namer::{Namer, NearestNamer, UNKNOWN_NAME};
pub use session::{CliSession, PaletteSession, Swatch};
