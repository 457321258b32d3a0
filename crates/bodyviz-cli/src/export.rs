// Imports
use crate::cli::{self, OutputArgs};
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub(crate) async fn run_export(
    scene_file: &Path,
    output: OutputArgs,
    overwrite: bool,
) -> anyhow::Result<()> {
    let scene = cli::load_scene(scene_file).await?;
    let bytes = scene.export_to_bytes()?;

    match output.output_file {
        Some(output_file) => {
            export_to_file(&output_file, &bytes, overwrite).await?;
            println!(
                "Exported {} shapes to \"{}\"",
                scene.shapes.len(),
                output_file.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

pub(crate) async fn export_to_file(
    output_file: &Path,
    bytes: &[u8],
    overwrite: bool,
) -> anyhow::Result<()> {
    if output_file.exists() && !overwrite {
        return Err(anyhow::anyhow!(
            "Output file \"{}\" already exists, pass \"--overwrite\" to replace it.",
            output_file.display()
        ));
    }
    cli::create_overwrite_file_w_bytes(output_file, bytes)
        .await
        .with_context(|| format!("Writing export to \"{}\" failed.", output_file.display()))?;
    info!("Wrote {} bytes to \"{}\"", bytes.len(), output_file.display());
    Ok(())
}
