//! ALICE-March CLI
//!
//! Command-line interface for rendering scene files.
//!
//! Author: Moroya Sakamoto

#![allow(clippy::uninlined_format_args)]

#[cfg(feature = "cli")]
use alice_march::io::{get_info, load, render_to_png, save};
#[cfg(feature = "cli")]
use alice_march::prelude::*;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Instant;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "alice-march")]
#[command(author = "Moroya Sakamoto")]
#[command(version = alice_march::VERSION)]
#[command(about = "ALICE-March: sphere-tracing SDF renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render a scene file (or the demo scene) to PNG
    Render {
        /// Input scene file (.json); renders the demo scene if omitted
        scene: Option<PathBuf>,
        /// Output PNG file
        #[arg(short, long, default_value = "render.png")]
        output: PathBuf,
        /// Override image width
        #[arg(long)]
        width: Option<usize>,
        /// Override image height
        #[arg(long)]
        height: Option<usize>,
        /// Render on a single thread
        #[arg(long)]
        serial: bool,
    },

    /// Write the demo scene file
    Demo {
        /// Output file
        #[arg(short, long, default_value = "demo.scene.json")]
        output: PathBuf,
    },

    /// Display scene file information
    Info {
        /// Input scene file (.json)
        file: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            scene,
            output,
            width,
            height,
            serial,
        } => cmd_render(scene, output, width, height, serial),
        Commands::Demo { output } => cmd_demo(output),
        Commands::Info { file } => cmd_info(file),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn cmd_render(
    scene: Option<PathBuf>,
    output: PathBuf,
    width: Option<usize>,
    height: Option<usize>,
    serial: bool,
) {
    let file = match scene {
        Some(path) => match load(&path) {
            Ok(f) => {
                tracing::info!("Loaded {} ({} nodes)", path.display(), f.node_count());
                f
            }
            Err(e) => {
                tracing::error!("Load error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No scene given, rendering the demo scene");
            demo_scene_file()
        }
    };

    let settings = file.settings.with_size(
        width.unwrap_or(file.settings.width),
        height.unwrap_or(file.settings.height),
    );

    tracing::info!(
        "Rendering {}x{} ({})...",
        settings.width,
        settings.height,
        if serial { "serial" } else { "parallel" }
    );
    let start = Instant::now();

    match render_to_png(&settings, &file.scene, &output, serial) {
        Ok(()) => println!(
            "Rendered {} pixels in {:.2?} -> {}",
            settings.pixel_count(),
            start.elapsed(),
            output.display()
        ),
        Err(e) => {
            tracing::error!("Render error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_demo(output: PathBuf) {
    let file = demo_scene_file();
    match save(&file, &output) {
        Ok(()) => println!(
            "Created demo scene: {} ({} nodes)",
            output.display(),
            file.node_count()
        ),
        Err(e) => {
            tracing::error!("Save error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_info(path: PathBuf) {
    match get_info(&path) {
        Ok(info) => println!("{}", info),
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
