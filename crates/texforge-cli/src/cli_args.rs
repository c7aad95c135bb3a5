//! CLI argument definitions for the texforge command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use texforge_cli::controls::FillControls;
use texforge_cli::terminal::DEFAULT_MAX_WIDTH;

/// texforge - Procedural texture generation
#[derive(Parser)]
#[command(name = "texforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a PNG texture from a spec file or inline fill controls
    Generate {
        /// Path to the spec JSON file (omit to use inline controls)
        #[arg(
            short,
            long,
            conflicts_with_all = [
                "mode", "size", "color", "outline_color", "outline_thickness",
                "axis", "stops", "blend", "output",
            ]
        )]
        spec: Option<String>,

        #[command(flatten)]
        controls: FillControls,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Save path for inline mode; without it the save is cancelled
        #[arg(long)]
        output: Option<String>,

        /// PNG compression preset
        #[arg(long, default_value = "default", value_parser = ["default", "best", "fast"])]
        compression: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show a texture in the terminal without writing a file
    Preview {
        /// Path to the spec JSON file (omit to use inline controls)
        #[arg(
            short,
            long,
            conflicts_with_all = [
                "mode", "size", "color", "outline_color", "outline_thickness",
                "axis", "stops", "blend",
            ]
        )]
        spec: Option<String>,

        #[command(flatten)]
        controls: FillControls,

        /// Maximum preview width in terminal columns
        #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
        max_width: u32,
    },

    /// Validate a spec file without generating a texture
    Validate {
        /// Path to the spec JSON file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print a starter spec for a fill mode
    Template {
        /// Fill mode of the template
        #[arg(short, long, value_parser = ["solid", "outlined", "gradient"])]
        mode: String,

        /// Texture name (default: derived from the mode)
        #[arg(long)]
        name: Option<String>,

        /// Write the template to this file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
}
