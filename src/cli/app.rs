//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rasterflow::api::ApiClient;
use rasterflow::config::Config;
use rasterflow::output::OutputMode;

use super::commands;

/// rasterflow - client for a raster-imagery processing platform
#[derive(Parser, Debug)]
#[command(
    name = "rasterflow",
    version,
    about = "Client for a raster-imagery processing platform",
    long_about = "Manage imagery mosaics, geoprocessing jobs and projects on a\n\
                  remote raster processing platform.\n\n\
                  Configure the endpoint via the BASE_URL and USER_TOKEN\n\
                  environment variables (a .env file is read when present)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level command groups, one per remote resource kind.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Basic operations with imagery mosaics
    Mosaic {
        /// The mosaic operation to run
        #[command(subcommand)]
        command: MosaicCommand,
    },

    /// Basic operations with processings
    Processing {
        /// The processing operation to run
        #[command(subcommand)]
        command: ProcessingCommand,
    },

    /// Basic operations with projects (processing collections)
    Project {
        /// The project operation to run
        #[command(subcommand)]
        command: ProjectCommand,
    },
}

/// Mosaic operations.
#[derive(Subcommand, Debug)]
pub enum MosaicCommand {
    /// Create a mosaic
    Create {
        /// Mosaic name
        #[arg(short, long)]
        name: String,

        /// Mosaic tags with ", " separator. E.g: -t "tag1, tag2, ..."
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Upload an image or a folder of images into a mosaic
    Upload {
        /// Path to the uploaded image or folder with images
        #[arg(short, long)]
        path: PathBuf,

        /// Target mosaic id
        #[arg(long)]
        mosaic_id: String,
    },

    /// List mosaics
    Mosaics,

    /// List the images in a mosaic
    Images {
        /// Mosaic id
        #[arg(long)]
        mosaic_id: String,
    },
}

/// Processing operations.
#[derive(Subcommand, Debug)]
pub enum ProcessingCommand {
    /// List available workflow models
    Models,

    /// Create a processing
    Start {
        /// Processing name
        #[arg(short, long)]
        name: String,

        /// Source image id; only one of --image-id and --mosaic-id can be
        /// provided
        #[arg(long, conflicts_with = "mosaic_id")]
        image_id: Option<String>,

        /// Source mosaic id; only one of --mosaic-id and --image-id can be
        /// provided
        #[arg(long)]
        mosaic_id: Option<String>,

        /// Work definition id
        #[arg(long)]
        wd_id: String,

        /// Optional blocks with ", " separator; none are enabled if not
        /// provided
        #[arg(short, long)]
        options: Option<String>,

        /// Path to the geometry (AOI). If not provided - the footprint of
        /// the image or mosaic will be used automatically
        #[arg(short, long)]
        geometry: Option<PathBuf>,

        /// Processing will be created in the default project if no other is
        /// provided
        #[arg(long)]
        project_id: Option<String>,
    },

    /// Show the current status of a processing
    Status {
        /// Processing id
        #[arg(long)]
        processing_id: String,
    },

    /// Download the results of a finished processing
    Download {
        /// Processing id
        #[arg(long)]
        processing_id: String,

        /// Destination file path for the results
        #[arg(short, long)]
        path: PathBuf,
    },
}

/// Project operations.
#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// Create a project
    Create {
        /// Project name
        #[arg(short, long)]
        name: String,

        /// Project description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List projects
    Projects,

    /// List the processings in a project
    Processings {
        /// Project id
        #[arg(long)]
        project_id: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::from_env()?;
    let api = ApiClient::new(config.base_url, &config.user_token)?;

    match cli.command {
        Command::Mosaic { command } => commands::mosaic(&api, command, mode),
        Command::Processing { command } => commands::processing(&api, command, mode),
        Command::Project { command } => commands::project(&api, command, mode),
    }
}
