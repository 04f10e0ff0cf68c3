use bevy::prelude::*;
use std::path::PathBuf;

use crate::resources::config::DEFAULT_CONFIG_PATH;

/// Which of the two player controllers to spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ControlMode {
    /// Direct transform mover, no physics.
    Basic,
    /// Physics-driven submarine with boost.
    #[default]
    Submarine,
}

impl ControlMode {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "submarine" | "sub" => Some(Self::Submarine),
            _ => None,
        }
    }
}

/// Command-line arguments parsed at startup.
#[derive(Resource, Debug)]
pub struct CliArgs {
    /// Usage: `cargo run -- --mode basic`
    pub mode: ControlMode,
    /// Usage: `cargo run -- --config tuning/fast.json`
    pub config_path: PathBuf,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            mode: ControlMode::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl CliArgs {
    /// Parse the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Supports:
    /// - `--mode <basic|submarine>`: Choose the player controller
    /// - `--config <path>`: Load tuning from another file
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--mode" => {
                    match args.get(i + 1) {
                        Some(value) => {
                            match ControlMode::from_arg(value) {
                                Some(mode) => {
                                    cli.mode = mode;
                                    info!("CLI: Using {:?} controller", mode);
                                }
                                None => {
                                    warn!("CLI: Unknown mode '{}', keeping {:?}", value, cli.mode);
                                }
                            }
                            i += 2;
                        }
                        None => {
                            warn!("CLI: --mode requires an argument");
                            i += 1;
                        }
                    }
                }
                "--config" => {
                    match args.get(i + 1) {
                        Some(value) => {
                            cli.config_path = PathBuf::from(value);
                            info!("CLI: Loading controls from '{}'", value);
                            i += 2;
                        }
                        None => {
                            warn!("CLI: --config requires a path argument");
                            i += 1;
                        }
                    }
                }
                arg => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }
}
