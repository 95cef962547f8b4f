// Command line parsing

use anyhow::{anyhow, bail, Result};

use crate::config::{Config, SchemeKind};
use crate::control::DeltaMode;
use crate::game::Zone;

/// Options given on the command line; `None` keeps the config file's value
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliOptions {
    pub scheme: Option<SchemeKind>,
    pub classic_paddle: Option<Zone>,
    pub delta_mode: Option<DeltaMode>,
    pub debug: bool,
    pub help: bool,
}

impl CliOptions {
    /// Layer the command line over the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(scheme) = self.scheme {
            config.controls.scheme = scheme;
        }
        if let Some(paddle) = self.classic_paddle {
            config.controls.classic_paddle = paddle;
        }
        if let Some(mode) = self.delta_mode {
            config.controls.delta_mode = mode;
        }
    }
}

/// Parse arguments, skipping the program name
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter().skip(1).peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--classic" => {
                options.scheme = Some(SchemeKind::Classic);
                if let Some(next) = iter.peek() {
                    if !next.starts_with('-') {
                        options.classic_paddle = Some(parse_zone(next)?);
                        iter.next();
                    }
                }
            }
            "--extended" => options.scheme = Some(SchemeKind::Extended),
            "--absolute" => options.delta_mode = Some(DeltaMode::Absolute),
            "--incremental" => options.delta_mode = Some(DeltaMode::Incremental),
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => options.help = true,
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(options)
}

fn parse_zone(name: &str) -> Result<Zone> {
    match name.to_ascii_lowercase().as_str() {
        "top" => Ok(Zone::Top),
        "bottom" => Ok(Zone::Bottom),
        other => Err(anyhow!("--classic expects top or bottom, got {}", other)),
    }
}

pub fn print_usage(program: &str) {
    println!("Touchpong - two-paddle terminal pong steered by mouse drags");
    println!();
    println!("Usage:");
    println!("  {} [OPTIONS]", program);
    println!();
    println!("Options:");
    println!("  --classic [top|bottom]   One player steers one paddle (default: bottom)");
    println!("  --extended               Two players, each half of the field steers its paddle");
    println!("  --absolute               Paddle speed follows distance from the drag origin");
    println!("  --incremental            Paddle follows per-frame drag movement");
    println!("  -d, --debug              Write diagnostics to /tmp/touchpong-debug.log");
    println!("  -h, --help               Show this help");
    println!();
    println!("Click or press Space to serve, R to restart, Q to quit.");
}
