//! banner-render CLI entry point.
//!
//! Reads composed glyph art (one row per line) and re-encodes it for a
//! terminal, HTML or SVG target.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use log::debug;

use banner_render::color::{self, Color};
use banner_render::{RenderConfig, RenderError, document, formats, render_with_config};

/// Encode block-letter banner art for terminal, HTML or SVG output.
#[derive(Parser, Debug)]
#[command(
    name = "banner-render",
    version = env!("BANNER_RENDER_VERSION"),
    about = "Encode block-letter banner art for terminal, HTML or SVG output"
)]
struct Cli {
    /// Input file with composed art (reads from stdin if not provided)
    input: Option<String>,

    /// Output format (terminal, plain, html, svg)
    #[arg(short = 'f', long = "format", default_value = "terminal")]
    format: String,

    /// Colors to cycle over characters: names, hex (FF6B6B) or r,g,b.
    /// Repeat the flag or separate names/hex with commas.
    #[arg(short = 'c', long = "color")]
    colors: Vec<String>,

    /// Wrap svg/html output in a standalone document
    #[arg(long = "document")]
    document: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// List registered output formats and exit
    #[arg(long = "list-formats")]
    list_formats: bool,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

/// A single argument is either one color (possibly an `r,g,b` triple) or a
/// comma-separated list of names/hex values.
fn parse_colors(args: &[String]) -> banner_render::Result<Vec<Color>> {
    let mut colors = Vec::new();
    for arg in args {
        match arg.parse::<Color>() {
            Ok(c) => colors.push(c),
            Err(RenderError::InvalidColor(_)) => colors.extend(color::parse_sequence(arg)?),
            Err(e) => return Err(e),
        }
    }
    Ok(colors)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_formats {
        for name in formats::builtin().names() {
            println!("{}", name);
        }
        return;
    }

    let colors = parse_colors(&cli.colors).unwrap_or_else(|e| fail(e));
    let config = RenderConfig::new()
        .with_format(cli.format.as_str())
        .with_colors(colors);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => fail(format!("cannot read '{}': {}", path, e)),
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };
    let lines: Vec<&str> = text.lines().collect();
    debug!("read {} line(s) of art", lines.len());

    // Render
    let mut rendered = render_with_config(&lines, &config).unwrap_or_else(|e| fail(e));
    if cli.document {
        rendered = document::wrap_document(&config.format, &rendered).unwrap_or_else(|e| fail(e));
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
