//! Command-line interface for generating charts and tracking stitch progress

use crate::io::configuration::{
    DEFAULT_COLORS, DEFAULT_SESSION_DIR, MAX_COLORS, MAX_GRID_DIMENSION, MIN_COLORS,
    MIN_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::persistence::{JsonDirectoryStore, PatternStore};
use crate::io::progress::GenerationProgress;
use crate::pattern::dimensions::default_target_width;
use crate::pattern::{GenerationConfig, PixelBuffer, ProgressStats, Session, spawn_generation};
use crate::render::{export_chart_png, render};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stitchgrid")]
#[command(
    author,
    version,
    about = "Turn images into cross-stitch charts and track stitching progress"
)]
/// Command-line arguments for the chart tool
pub struct Cli {
    /// Action to perform
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the saved pattern and progress
    #[arg(short, long, global = true, default_value = DEFAULT_SESSION_DIR)]
    pub session: PathBuf,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Chart tool subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build a new pattern from an image, resetting progress
    Generate {
        /// Source image (PNG, JPEG, ...)
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Number of thread colours
        #[arg(short, long, default_value_t = DEFAULT_COLORS, value_parser = parse_colors)]
        colors: usize,

        /// Grid width in stitches (height follows the image aspect ratio)
        #[arg(short, long, value_parser = parse_width)]
        width: Option<usize>,
    },
    /// Flip the stitched mark on one cell
    Toggle {
        /// Column, starting at 0 on the left
        x: usize,
        /// Row, starting at 0 at the top
        y: usize,
    },
    /// Mark every cell unstitched
    Clear,
    /// Show grid size, progress and colour key
    Status,
    /// Export the chart as a PNG image
    Render {
        /// Output PNG path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Zoom factor (cell size is 20 px at 1.0)
        #[arg(short, long, default_value_t = 1.0)]
        zoom: f32,
    },
}

fn parse_bounded(value: &str, min: usize, max: usize) -> std::result::Result<usize, String> {
    let parsed: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a whole number: {e}"))?;
    if (min..=max).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!("must be between {min} and {max}"))
    }
}

fn parse_colors(value: &str) -> std::result::Result<usize, String> {
    parse_bounded(value, MIN_COLORS, MAX_COLORS)
}

fn parse_width(value: &str) -> std::result::Result<usize, String> {
    parse_bounded(value, MIN_GRID_DIMENSION, MAX_GRID_DIMENSION)
}

impl Cli {
    /// Check if log output should be emitted
    pub const fn should_log(&self) -> bool {
        !self.quiet
    }

    /// Check if the generation spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Install the stderr log subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stitchgrid=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Summary of a session for terminal display
pub fn format_status(session: &Session) -> String {
    let pattern = session.pattern();
    let stats = session.stats();
    let mut out = format!(
        "Pattern: {} x {} stitches, {} colours\nProgress: {} / {} stitched ({:.1}%)\n",
        pattern.width(),
        pattern.height(),
        pattern.legend().len(),
        stats.stitched,
        stats.total,
        stats.fraction() * 100.0
    );
    out.push_str("Colour key:\n");
    for entry in pattern.legend() {
        let _ = writeln!(
            out,
            "  {}  #{:02x}{:02x}{:02x}  {}",
            entry.symbol, entry.color.r, entry.color.g, entry.color.b, entry.label
        );
    }
    out
}

/// Executes parsed commands against a session directory
pub struct CommandRunner {
    cli: Cli,
    store: JsonDirectoryStore,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let store = JsonDirectoryStore::new(&cli.session);
        Self { cli, store }
    }

    /// Session store used by this runner
    pub const fn store(&self) -> &JsonDirectoryStore {
        &self.store
    }

    /// Run the parsed command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; see the individual operations
    // Allow print for command output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Generate {
                image,
                colors,
                width,
            } => {
                let session = self.generate(&image, colors, width)?;
                if !self.cli.quiet {
                    println!("{}", format_status(&session));
                }
            }
            Command::Toggle { x, y } => {
                let stitched = self.toggle(x, y)?;
                if !self.cli.quiet {
                    let state = if stitched { "stitched" } else { "unstitched" };
                    println!("Cell ({x}, {y}) marked {state}");
                }
            }
            Command::Clear => {
                self.clear()?;
                if !self.cli.quiet {
                    println!("Progress cleared");
                }
            }
            Command::Status => {
                let session = self.load()?;
                println!("{}", format_status(&session));
            }
            Command::Render { output, zoom } => {
                self.render(&output, zoom)?;
                if !self.cli.quiet {
                    println!("Chart written to {}", output.display());
                }
            }
        }
        Ok(())
    }

    /// Generate a pattern from an image file and save it with fresh progress
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be loaded or decoded
    /// - Generation parameters are invalid
    /// - The session cannot be saved
    pub fn generate(&self, image: &Path, colors: usize, width: Option<usize>) -> Result<Session> {
        let progress = if self.cli.should_show_progress() {
            GenerationProgress::start("Decoding image")
        } else {
            GenerationProgress::hidden()
        };

        let pixels = PixelBuffer::open(image)?;
        let target_width = width.unwrap_or_else(|| default_target_width(pixels.width()));
        let config = GenerationConfig::for_image(&pixels, colors, target_width);
        tracing::info!(
            image = %image.display(),
            colors,
            width = config.target_width,
            height = config.target_height,
            "generating pattern"
        );

        progress.set_stage("Quantizing and resampling");
        let pattern = progress.track(spawn_generation(pixels, config))?;

        let session = Session::new(pattern);
        self.store.save_session(&session)?;
        Ok(session)
    }

    /// Load the saved session
    ///
    /// # Errors
    ///
    /// Returns an error if no valid pattern/progress pair is stored
    pub fn load(&self) -> Result<Session> {
        self.store.load_session().ok_or_else(|| {
            invalid_parameter(
                "session",
                &self.store.dir().display(),
                &"no saved pattern; run `generate` first",
            )
        })
    }

    /// Flip one cell and persist the progress
    ///
    /// # Errors
    ///
    /// Returns an error if no session is stored, the cell is outside the pattern, or
    /// progress cannot be saved
    pub fn toggle(&self, x: usize, y: usize) -> Result<bool> {
        let mut session = self.load()?;
        let stitched = session.toggle(x, y)?;
        self.store.save_progress(session.progress())?;
        Ok(stitched)
    }

    /// Reset all progress and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if no session is stored or progress cannot be saved
    pub fn clear(&self) -> Result<ProgressStats> {
        let mut session = self.load()?;
        session.clear();
        self.store.save_progress(session.progress())?;
        Ok(session.stats())
    }

    /// Export the saved chart as PNG
    ///
    /// # Errors
    ///
    /// Returns an error if no session is stored or the image cannot be written
    pub fn render(&self, output: &Path, zoom: f32) -> Result<()> {
        let session = self.load()?;
        let chart = render(session.pattern(), session.progress(), zoom)?;
        export_chart_png(&chart, output)
    }
}
