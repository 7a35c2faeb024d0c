use pulsenet::config::NetworkDimensions;
use pulsenet::network::Network;
use pulsenet_view::clock::{Clock, ClockConfig, StopHandle};
use pulsenet_view::surface::SvgSurface;
use pulsenet_view::view::{NetworkView, ViewConfig};
use pulsenet_view::View;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Animate randomly regenerated layered networks as SVG frames")]
struct Cli {
    /// RON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(short, long)]
    frames: Option<NonZeroUsize>,

    /// SVG file rewritten on every frame
    #[arg(short, long, default_value = "pulse.svg")]
    out: PathBuf,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    network: NetworkDimensions,
    clock: ClockConfig,
    view: ViewConfig,
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            network: NetworkDimensions {
                input_count: 6,
                hidden_layer_count: 3,
                hidden_layer_size: 8,
                output_count: 4,
            },
            clock: ClockConfig::new(),
            view: ViewConfig::new(),
        }
    }
}

/// Draws each network to SVG and writes it out.
///
/// The first failed write stops the clock and is kept
/// for [`FrameWriter::finish`].
struct FrameWriter {
    view: NetworkView<SvgSurface>,
    out: PathBuf,
    frames: usize,
    limit: Option<NonZeroUsize>,
    stop: StopHandle,
    error: Option<io::Error>,
}

impl FrameWriter {
    fn new(
        config: &ViewConfig,
        out: PathBuf,
        limit: Option<NonZeroUsize>,
        stop: StopHandle,
    ) -> FrameWriter {
        FrameWriter {
            view: NetworkView::new(SvgSurface::new(config.width, config.height), config),
            out,
            frames: 0,
            limit,
            stop,
            error: None,
        }
    }

    /// Returns the number of frames written, or the write error
    /// that stopped the clock.
    fn finish(self) -> Result<usize> {
        match self.error {
            Some(e) => Err(e).with_context(|| format!("writing frame {}", self.out.display())),
            None => Ok(self.frames),
        }
    }
}

impl View for FrameWriter {
    fn draw(&mut self, network: &Network) {
        if self.error.is_some() {
            return;
        }
        self.view.draw(network);
        if let Err(e) = fs::write(&self.out, self.view.surface().finish()) {
            error!(path = %self.out.display(), "failed to write frame: {}", e);
            self.error = Some(e);
            self.stop.stop();
            return;
        }
        self.frames += 1;
        if self.limit.map_or(false, |limit| self.frames >= limit.get()) {
            self.stop.stop();
        }
    }
}

fn load_config(path: &Path) -> Result<DemoConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };
    info!(
        dimensions = ?config.network,
        tick_length = ?config.clock.tick_length,
        out = %cli.out.display(),
        "starting clock"
    );

    let stop = StopHandle::new();
    let writer = FrameWriter::new(&config.view, cli.out, cli.frames, stop.clone());
    let mut clock = Clock::new(config.network, config.clock, writer)?.with_stop_handle(stop);

    let (report, writer) = thread::Builder::new()
        .name("clock".into())
        .spawn(move || {
            let report = clock.run();
            (report, clock.into_view())
        })?
        .join()
        .map_err(|_| anyhow!("clock thread panicked"))?;
    let frames = writer.finish()?;
    let report = report?;

    info!(ticks = report.ticks, frames, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn network() -> Network {
        Network::with_thread_rng(NetworkDimensions {
            input_count: 3,
            hidden_layer_count: 2,
            hidden_layer_size: 4,
            output_count: 2,
        })
        .unwrap()
    }

    #[test]
    fn bundled_config_parses() {
        let config: DemoConfig = ron::from_str(include_str!("../pulse.ron")).unwrap();
        assert_eq!(config.network, DemoConfig::default().network);
        assert_eq!(config.clock.tick_length, Duration::from_secs(2));
        assert_eq!(config.view, ViewConfig::new());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: DemoConfig =
            ron::from_str("(clock: (tick_length: (secs: 0, nanos: 40000000)))").unwrap();
        assert_eq!(config.clock.tick_length, Duration::from_millis(40));
        assert_eq!(config.network, DemoConfig::default().network);
    }

    #[test]
    fn frames_flag_rejects_zero() {
        assert!(Cli::try_parse_from(["pulse", "--frames", "0"]).is_err());
        let cli = Cli::try_parse_from(["pulse", "--frames", "2"]).unwrap();
        assert_eq!(cli.frames, NonZeroUsize::new(2));
    }

    #[test]
    fn writer_stops_after_limit() {
        let out = std::env::temp_dir().join(format!("pulse-limit-{}.svg", std::process::id()));
        let stop = StopHandle::new();
        let mut writer =
            FrameWriter::new(&ViewConfig::new(), out.clone(), NonZeroUsize::new(3), stop.clone());
        let network = network();

        for _ in 0..2 {
            writer.draw(&network);
        }
        assert!(!stop.is_stopped());
        writer.draw(&network);
        assert!(stop.is_stopped());

        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(writer.finish().unwrap(), 3);
        fs::remove_file(&out).unwrap();
    }

    #[test]
    fn writer_stops_on_write_error() {
        let out = PathBuf::from("/nonexistent_pulse_dir/frame.svg");
        let stop = StopHandle::new();
        let mut writer = FrameWriter::new(&ViewConfig::new(), out, None, stop.clone());
        let network = network();

        writer.draw(&network);
        assert!(stop.is_stopped());
        writer.draw(&network);
        assert_eq!(writer.frames, 0);

        let message = format!("{:#}", writer.finish().unwrap_err());
        assert!(message.starts_with("writing frame /nonexistent_pulse_dir/frame.svg"), "{}", message);
    }
}
