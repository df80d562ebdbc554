mod boxed;
mod common;
mod cube;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the integer points of a cube with one shared
    /// exclusive bound.
    Cube(cube::Cube),
    /// Enumerate the integer points of a box with an inclusive bound
    /// per coordinate.
    Box(boxed::Boxed),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Cube(cube) => {
            cube.run()?;
        }
        Commands::Box(boxed) => {
            boxed.run()?;
        }
    }
    Ok(())
}
