use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use fangshift::game::{GameConfig, MotionMode};
use fangshift::modes::{DEMO_ACCEL, DemoMode, HumanMode};

#[derive(Parser)]
#[command(name = "fangshift")]
#[command(version, about = "Snake game with smooth and grid-locked movement")]
struct Cli {
    /// What to run
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Movement representation (overrides the config file)
    #[arg(long)]
    motion: Option<Motion>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Head speed in cells per second
    #[arg(long)]
    speed: Option<f64>,

    /// Velocity convergence rate
    #[arg(long)]
    accel: Option<f64>,

    /// Number of steps the demo replays
    #[arg(long, default_value = "120")]
    steps: u32,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal
    Human,
    /// Print a scripted smooth-movement run
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum Motion {
    Grid,
    Smooth,
}

impl From<Motion> for MotionMode {
    fn from(motion: Motion) -> Self {
        match motion {
            Motion::Grid => MotionMode::Grid,
            Motion::Smooth => MotionMode::Smooth,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(motion) = self.motion {
            config.motion = motion.into();
        }
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        match (self.accel, &self.mode, &self.config) {
            (Some(accel), _, _) => config.accel = accel,
            (None, Mode::Demo, None) => config.accel = DEMO_ACCEL,
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
        Mode::Demo => {
            let mut demo = DemoMode::new(config, cli.steps, Some(Duration::from_millis(10)));
            demo.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_defaults_to_demo_accel() {
        let cli = Cli::try_parse_from(["fangshift", "--mode", "demo"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config.accel, DEMO_ACCEL);
        assert_eq!(config.accel, 8.0);
    }

    #[test]
    fn test_accel_flag_wins_in_demo() {
        let cli = Cli::try_parse_from(["fangshift", "--mode", "demo", "--accel", "3"]).unwrap();
        assert_eq!(cli.game_config().unwrap().accel, 3.0);
    }

    #[test]
    fn test_human_keeps_config_accel() {
        let cli = Cli::try_parse_from(["fangshift"]).unwrap();
        assert_eq!(cli.game_config().unwrap().accel, GameConfig::default().accel);
    }
}
