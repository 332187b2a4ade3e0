use anyhow::{Context, Result};
use clap::Parser;
use glint_core::SceneDescription;
use glint_math::{color, Color};
use glint_renderer::{render, render_with_threads, RenderConfig};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.into())
        .init();

    if let Some(path) = &args.dump_demo {
        std::fs::write(path, SceneDescription::demo().to_json_string()?)
            .with_context(|| format!("Failed to write {}", path))?;
        log::info!("Wrote demo scene to {}", path);
        return Ok(());
    }

    let description = match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path))?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            SceneDescription::demo()
        }
    };
    let scene = description.into_scene().context("Invalid scene")?;

    let config = RenderConfig {
        max_depth: args.max_depth,
        background: background(args.background.as_deref()),
        bucket_size: args.bucket_size,
    };

    let image = match args.threads {
        Some(threads) => render_with_threads(&scene, &config, threads)?,
        None => render(&scene, &config)?,
    };

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to save {}", args.output))?;

    Ok(())
}

fn background(components: Option<&[f64]>) -> Color {
    match components {
        Some([r, g, b]) => color::rgb(*r, *g, *b),
        _ => color::BLACK,
    }
}
