// Imports
use crate::{color, describe, export, validators};
use anyhow::Context;
use bodyviz_shapes::{Scene, ShapeKind};
use clap::Parser;
use smol::fs::File;
use smol::io::{AsyncReadExt, AsyncWriteExt};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

///    bodyviz-cli{n}{n}
///    Inspect and export shape descriptors of multibody visualizations.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Prints every shape of the specified scene files.
    Describe {
        /// The scene files.
        scene_files: Vec<PathBuf>,
        /// Only print shapes of this kind.
        #[arg(short = 'k', long)]
        kind: Option<ShapeKind>,
    },
    /// Exports the data maps of all shapes in the scene file as JSON.{n}
    /// "--output-file" and "--stdout" are mutually exclusive and specifying one of them is required.
    Export {
        /// The scene file.
        scene_file: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        /// Overwrite the output file if it already exists.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        overwrite: bool,
    },
    /// Resolves color names and prints their rgb values.
    Color {
        /// The color names.
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub(crate) struct OutputArgs {
    /// The export output file. Exclusive with "--stdout".
    #[arg(short = 'o', long)]
    pub(crate) output_file: Option<PathBuf>,
    /// Write the export to stdout. Exclusive with "--output-file".
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub(crate) stdout: bool,
}

/// Logs go to stderr, filtered by `RUST_LOG`. Defaults to warnings only.
pub(crate) fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Describe { scene_files, kind } => {
            describe::run_describe(&scene_files, kind).await?;
        }
        Command::Export {
            scene_file,
            output,
            overwrite,
        } => {
            export::run_export(&scene_file, output, overwrite).await?;
        }
        Command::Color { names } => {
            color::run_color(&names)?;
        }
    }

    Ok(())
}

pub(crate) async fn load_scene(scene_file: impl AsRef<Path>) -> anyhow::Result<Scene> {
    let scene_file = scene_file.as_ref();
    validators::file_has_ext(scene_file, "json")?;
    let bytes = read_bytes_from_file(scene_file).await?;
    Scene::load_from_bytes(&bytes)
        .with_context(|| format!("Loading scene file \"{}\" failed.", scene_file.display()))
}

pub(crate) async fn read_bytes_from_file(file_path: impl AsRef<Path>) -> anyhow::Result<Vec<u8>> {
    let mut bytes = vec![];
    let mut fh = File::open(file_path).await?;
    fh.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

pub(crate) async fn create_overwrite_file_w_bytes(
    output_file: impl AsRef<Path>,
    bytes: &[u8],
) -> anyhow::Result<()> {
    let mut fh = File::create(output_file).await?;
    fh.write_all(bytes).await?;
    fh.sync_all().await?;
    Ok(())
}
