//! `transport_catalogue` — build the catalogue artifact, then query it.
//!
//! Two modes over the same stdin JSON document:
//!
//! - `make_base`: ingest `base_requests` plus settings and write the binary
//!   archive named by `serialization_settings.file`;
//! - `process_requests`: reload that archive and answer `stat_requests`,
//!   writing the JSON response array to stdout.
//!
//! Logs go to stderr via `env_logger` (`RUST_LOG=info` etc.); stdout carries
//! nothing but the response document.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use tc_io::{build_catalogue, InputDocument, StatProcessor};
use tc_persist::{load_archive, save_archive};
use tc_render::MapRenderer;
use tc_routing::TransportRouter;

#[derive(Parser)]
#[command(name = "transport_catalogue")]
struct Args {
    /// Processing phase to run.
    #[arg(value_enum)]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    #[value(name = "make_base")]
    MakeBase,
    #[value(name = "process_requests")]
    ProcessRequests,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .init();

    // Wrong argument count or mode prints a one-line usage message and
    // exits non-zero; clap's multi-line diagnostics stay out of stderr.
    let Ok(args) = Args::try_parse() else {
        eprintln!("Usage: transport_catalogue [make_base|process_requests]");
        std::process::exit(1);
    };
    let document = InputDocument::from_reader(io::stdin().lock())
        .context("reading input document from stdin")?;

    match args.mode {
        Mode::MakeBase => make_base(&document),
        Mode::ProcessRequests => process_requests(&document),
    }
}

fn make_base(document: &InputDocument) -> Result<()> {
    let catalogue = build_catalogue(document)?;
    let render_settings = document.render_settings()?;
    let routing_settings = document.routing_settings()?;
    let file = &document.serialization_settings()?.file;

    save_archive(file, &catalogue, &render_settings, &routing_settings)
        .with_context(|| format!("writing archive {}", file.display()))?;
    Ok(())
}

fn process_requests(document: &InputDocument) -> Result<()> {
    let file = &document.serialization_settings()?.file;
    let (catalogue, render_settings, routing_settings) = load_archive(file)
        .with_context(|| format!("reading archive {}", file.display()))?;

    let renderer = MapRenderer::new(render_settings);
    let router = TransportRouter::new(routing_settings, &catalogue);
    info!("answering {} stat requests", document.stat_requests.len());

    let processor = StatProcessor::new(&renderer, &router);
    processor.write_responses(&document.stat_requests, &mut io::stdout().lock())?;
    Ok(())
}
