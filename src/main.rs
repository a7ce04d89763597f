//! symnet CLI entry point.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use symnet::{color, data, render};

/// Interactive force-directed symbol network visualizer.
#[derive(Parser, Debug)]
#[command(
    name = "symnet",
    about = "Render a symbol network as an interactive HTML visualization"
)]
struct Cli {
    /// Input JSON file describing nodes and edges
    #[arg(default_value = data::DEFAULT_INPUT)]
    input: PathBuf,

    /// Output HTML file
    #[arg(short = 'o', long = "output", default_value = render::html::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Per-channel color variation magnitude
    #[arg(long = "variation", default_value_t = color::DEFAULT_VARIATION)]
    variation: u8,

    /// Don't open the result in the default browser
    #[arg(long = "no-browser")]
    no_browser: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let abs_path = match symnet::render_network(&cli.input, &cli.output, cli.variation) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    println!("Graph saved to: {}", abs_path.display());

    // Browser launch is best-effort: the artifact is already on disk.
    if !cli.no_browser {
        if let Err(e) = render::html::open_in_browser(&abs_path) {
            log::warn!("browser launch failed: {e}");
            println!("Couldn't open automatically: {e}");
            println!("Please manually open the file at: {}", abs_path.display());
        }
    }
}
