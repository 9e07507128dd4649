//! gauge-replay — feed captured link frames through the gauge core.
//!
//! ```text
//! gauge-replay [--config thresholds.json] <frames.txt | ->
//! ```
//!
//! The frames file holds one frame per line as hex bytes (spaces optional).
//! Blank lines and `#` comments are skipped.  After replaying, the final
//! gauge table is printed.  Set `RUST_LOG=debug` to trace every message.
#![deny(unused_must_use)]

use std::io::Read;

use anyhow::{Context, Result, bail};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use gaugelink::adapters::log_sink::LogEventSink;
use gaugelink::app::service::GaugeService;
use gaugelink::config::GaugeConfig;
use gaugelink::gauge::Metric;
use gaugelink::link::inbox::{FrameInbox, INBOX_CAPACITY};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            GaugeConfig::from_json(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => GaugeConfig::default(),
    };

    let mut sink = LogEventSink::new();
    let mut service = GaugeService::new(&config).context("invalid threshold configuration")?;
    service.start(&mut sink);

    let text = read_frames(&args.frames)?;
    let mut inbox = FrameInbox::new();
    let mut total = 0usize;

    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let bytes = match parse_hex(line) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("line {}: {}", lineno + 1, e);
                continue;
            }
        };
        inbox.push(&bytes);
        // Flush at capacity like the main loop would each tick.
        if inbox.len() == INBOX_CAPACITY {
            total += service.poll(&mut inbox, &mut sink);
        }
    }
    total += service.poll(&mut inbox, &mut sink);

    let stats = service.stats();
    info!(
        "Replayed {} frames: routed={} malformed={} unregistered={} inbox_dropped={}",
        total,
        stats.routed,
        stats.malformed,
        stats.unregistered,
        inbox.dropped()
    );

    print_table(&service);
    Ok(())
}

struct Args {
    config: Option<String>,
    frames: String,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = None;
        let mut frames = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    config = Some(args.next().context("--config needs a path")?);
                }
                "--help" | "-h" => {
                    bail!("usage: gauge-replay [--config thresholds.json] <frames.txt | ->");
                }
                _ if frames.is_none() => frames = Some(arg),
                _ => bail!("unexpected argument {arg}"),
            }
        }
        Ok(Self {
            config,
            frames: frames.context("missing frames file (use - for stdin)")?,
        })
    }
}

fn read_frames(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading frames from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading frames {path}"))
    }
}

fn parse_hex(line: &str) -> Result<Vec<u8>> {
    let digits: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if !digits.is_ascii() {
        bail!("non-hex characters in {line:?}");
    }
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits in {line:?}");
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("bad hex byte {:?}", &digits[i..i + 2]))
        })
        .collect()
}

fn print_table(service: &GaugeService) {
    let dash = service.dashboard();
    println!(
        "screen={:?} dimmer={} brightness={} numbers={} link={}",
        dash.channel(),
        dash.dimmer(),
        dash.brightness(),
        dash.show_numbers(),
        if dash.link_online() { "online" } else { "offline" }
    );
    for metric in Metric::ALL {
        let unit = dash.thresholds().get(metric).map_or("", |m| m.unit());
        match service.current_value(metric) {
            Some((value, severity)) => {
                println!("{:<16} {:>10.2} {:<3} {:?}", metric.name(), value, unit, severity);
            }
            None => println!("{:<16} {:>10} {:<3} {:?}", metric.name(), "--", unit, dash.severity(metric)),
        }
    }
}
