use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hue_core::{HarmonyMode, Rgb};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huekit::error::AppError;
use huekit::models::AppConfig;
use huekit::output::{self, ContrastReport};
use huekit::services::{
    CliSession, ColorFormat, ColorReport, CommandOutcome, Namer, NearestNamer, SessionCommand,
};

#[derive(Parser)]
#[command(name = "huekit")]
#[command(about = "Derive harmonious, accessible color palettes from one seed color")]
struct Cli {
    /// YAML config file (overrides HUEKIT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one five-color palette
    Palette {
        /// Base color as hex (e.g. "#3b82f6")
        #[arg(short, long)]
        base: Option<String>,

        /// Harmony mode: random, monochromatic, analogous, complementary,
        /// split-complementary or triadic
        #[arg(short, long)]
        mode: Option<HarmonyMode>,

        /// Value format: hex, rgb, hsl, hsb or cmyk
        #[arg(short, long)]
        format: Option<ColorFormat>,

        /// Seed for reproducible random palettes
        #[arg(long)]
        seed: Option<u64>,

        /// Randomize the palette before rendering
        #[arg(short, long)]
        random: bool,

        /// Keep a slot (0-4) fixed across --random; repeatable
        #[arg(short, long = "lock", value_name = "SLOT")]
        lock: Vec<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the 10-step tonal scale of a color
    Scale {
        /// Color as hex
        color: String,

        /// Value format: hex, rgb, hsl, hsb or cmyk
        #[arg(short, long)]
        format: Option<ColorFormat>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check the contrast of a foreground color on a background color
    Contrast {
        /// Foreground (text) color as hex
        foreground: String,

        /// Background color as hex
        background: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a color in every supported representation
    Convert {
        /// Color as hex
        color: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive palette session reading commands from stdin
    Session,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huekit=warn,hue_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    let mut config = AppConfig::discover(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Palette {
            base,
            mode,
            format,
            seed,
            random,
            lock,
            json,
        }) => {
            if let Some(base) = base {
                // An explicit base must be valid; a bad config value only warns
                parse_hex(&base)?;
                config.base_color = base;
            }
            if let Some(mode) = mode {
                config.harmony_mode = mode;
            }
            if let Some(format) = format {
                config.format = format;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            run_palette_command(&config, &lock, random, json)
        }
        Some(Commands::Scale {
            color,
            format,
            json,
        }) => run_scale_command(&color, format.unwrap_or(config.format), json),
        Some(Commands::Contrast {
            foreground,
            background,
            json,
        }) => run_contrast_command(&foreground, &background, json),
        Some(Commands::Convert { color, json }) => run_convert_command(&config, &color, json),
        Some(Commands::Session) => run_session_command(&config),
        None => run_palette_command(&config, &[], false, false),
    }
}

fn parse_hex(hex: &str) -> Result<Rgb, AppError> {
    hex.parse().map_err(|_| AppError::InvalidHex(hex.to_string()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render one palette from config (plus command-line overrides)
fn run_palette_command(
    config: &AppConfig,
    locks: &[usize],
    random: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = CliSession::from_config(config);

    let mut slots = locks.to_vec();
    slots.sort_unstable();
    slots.dedup();
    for slot in slots {
        session.toggle_lock(slot)?;
    }

    if random {
        session.randomize();
    }

    let swatches = session.swatches();
    if json {
        return print_json(&swatches);
    }

    println!("{} ({})", session.mode(), session.effective_rule());
    print!("{}", output::palette_table(&swatches));
    Ok(())
}

fn run_scale_command(color: &str, format: ColorFormat, json: bool) -> anyhow::Result<()> {
    let base = hue_core::Hsl::from(parse_hex(color)?);
    let steps = hue_core::generate_scale(base);

    if json {
        return print_json(&steps);
    }
    print!("{}", output::scale_table(&steps, format));
    Ok(())
}

fn run_contrast_command(foreground: &str, background: &str, json: bool) -> anyhow::Result<()> {
    let report = ContrastReport::new(parse_hex(foreground)?, parse_hex(background)?);

    if json {
        return print_json(&report);
    }
    println!("{}", output::contrast_text(&report));
    Ok(())
}

fn run_convert_command(config: &AppConfig, color: &str, json: bool) -> anyhow::Result<()> {
    let rgb = parse_hex(color)?;
    let namer = NearestNamer::with_extra(&config.names);
    let report = ColorReport::new(rgb, namer.lookup(&rgb.to_hex()));

    if json {
        return print_json(&report);
    }
    println!("{report}");
    Ok(())
}

/// Line-oriented session over stdin. Bad input prints an error and the
/// session continues.
fn run_session_command(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = CliSession::from_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", output::palette_table(&session.swatches()));
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let result = line
            .parse::<SessionCommand>()
            .and_then(|command| command.apply(&mut session));

        match result {
            Ok(CommandOutcome::Palette(swatches)) => {
                println!("{} ({})", session.mode(), session.effective_rule());
                print!("{}", output::palette_table(&swatches));
            }
            Ok(CommandOutcome::Scale(steps)) => {
                print!("{}", output::scale_table(&steps, session.format()));
            }
            Ok(CommandOutcome::Message(message)) => println!("{message}"),
            Ok(CommandOutcome::Quit) => return Ok(()),
            Err(e) => {
                tracing::debug!(%e, %line, "Rejected session command");
                println!("error: {e}");
            }
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
