use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rectangle::Rectangle;
use std::io::{self, Write};
use tracing_subscriber::fmt::SubscriberBuilder;

mod render;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Print and dump rectangle dimensions")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Rectangle given on the command line; defaults to 10 x 5.
#[derive(Args, Clone, Copy, Debug)]
struct RectArgs {
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    length: i64,
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    width: i64,
}

impl From<RectArgs> for Rectangle {
    fn from(a: RectArgs) -> Self {
        Rectangle::new(a.length, a.width)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print each dimension mapping on its own line
    Print {
        #[command(flatten)]
        rect: RectArgs,
    },
    /// Write the dimension mappings as a JSON array
    Dump {
        #[command(flatten)]
        rect: RectArgs,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    // stdout carries only the mappings
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Print { rect } => print(rect.into(), &mut io::stdout().lock()),
        Action::Dump { rect, out } => dump(rect.into(), out),
    }
}

fn print<W: Write>(rect: Rectangle, out: &mut W) -> Result<()> {
    tracing::info!(length = rect.length, width = rect.width, "print");
    render::write_lines(&rect, out)?;
    out.flush()?;
    Ok(())
}

fn dump(rect: Rectangle, out: String) -> Result<()> {
    tracing::info!(length = rect.length, width = rect.width, out, "dump");
    render::write_json(&rect, &out)
}
