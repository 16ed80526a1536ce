//! CLI argument parsing for quicktip-tui.

use clap::{Parser, ValueEnum};
use quicktip_core::Theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quicktip-tui")]
#[command(about = "Quick Tip - interactive tip calculator", version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/quicktip/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Accept whole amounts only
    #[arg(short, long)]
    pub integer: bool,

    /// Accent color, overrides the config file
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Enable debug logging (logs to $TMPDIR/quicktip-tui.log)
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Red,
    Yellow,
    Blue,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Red => Self::Red,
            ThemeArg::Yellow => Self::Yellow,
            ThemeArg::Blue => Self::Blue,
        }
    }
}
