use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use showcard::{og, showcase};

#[derive(Parser, Debug)]
#[command(
    name = "showcard",
    version,
    about = "Render the static OG preview and project showcase cards"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the 1200x630 Open-Graph preview to public/og-image.png
    Og,
    /// Render one 1200x675 card per project to public/screenshots/
    Screenshots,
    /// Render everything (the default)
    All,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::All) {
        Command::Og => run_og()?,
        Command::Screenshots => run_screenshots()?,
        Command::All => {
            run_og()?;
            run_screenshots()?;
        }
    }
    Ok(())
}

fn run_og() -> anyhow::Result<()> {
    // public/ is expected to exist already; a missing directory is an error
    let path = og::write_card(Path::new("public")).context("rendering the OG card")?;
    println!("Saved to {}", path.display());
    Ok(())
}

fn run_screenshots() -> anyhow::Result<()> {
    let paths = showcase::write_cards(Path::new("public/screenshots"))
        .context("rendering the showcase cards")?;
    for path in &paths {
        println!("Saved {}", path.display());
    }
    println!("Done!");
    Ok(())
}
