// src/config.rs  —  Runtime configuration (CLI + TOML)
use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::synth::SynthConfig;
use crate::template::{self, MessageTemplate};

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  morse-keyer --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

pub const WPM_RANGE:  std::ops::RangeInclusive<u32> = 5..=50;
pub const TONE_RANGE: std::ops::RangeInclusive<u32> = 300..=900;

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name        = "morse-keyer",
    about       = "Morse Code keyer — type a message, hear it in CW",
    version,
)]
pub struct Cli {
    /// Message to send; words are joined with single spaces
    pub message: Vec<String>,

    /// Apply a message template by name (repeatable, applied in order)
    #[arg(short, long = "template")]
    pub templates: Vec<String>,

    /// Config file path (default: ~/.config/morse-keyer/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Your callsign, substituted for {TX}
    #[arg(long)]
    pub mycall: Option<String>,

    /// The other station's callsign, substituted for {RX}
    #[arg(long)]
    pub theircall: Option<String>,

    /// Keying speed in WPM (5–50)
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Tone frequency in Hz (300–900)
    #[arg(long)]
    pub tone: Option<u32>,

    /// Tone volume 0.0–1.0
    #[arg(long)]
    pub gain: Option<f32>,

    /// Background noise volume 0.0–1.0 (0 = off)
    #[arg(long)]
    pub noise: Option<f32>,

    /// Print the Morse encoding and duration instead of playing
    #[arg(long, action)]
    pub show_code: bool,

    /// Read messages from stdin, one per line, and key each
    #[arg(short, long, action)]
    pub interactive: bool,

    /// List the configured message templates and exit
    #[arg(long, action)]
    pub list_templates: bool,

    /// List common prosigns and their meanings and exit
    #[arg(long, action)]
    pub list_prosigns: bool,

    /// List common Q-codes and their meanings and exit
    #[arg(long, action)]
    pub list_qcodes: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub station:   Option<StationCfg>,
    pub morse:     Option<MorseCfg>,
    pub templates: Option<Vec<MessageTemplate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationCfg {
    pub mycall: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorseCfg {
    pub wpm:        Option<u32>,
    pub tone_hz:    Option<u32>,
    pub gain:       Option<f32>,
    pub noise_gain: Option<f32>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mycall:     String,
    pub theircall:  String,
    pub wpm:        u32,
    pub tone_hz:    u32,
    pub gain:       f32,
    /// Background noise level; 0 disables it
    pub noise_gain: f32,
    pub templates:  Vec<MessageTemplate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mycall:     String::new(),
            theircall:  String::new(),
            wpm:        30,
            tone_hz:    700,
            gain:       0.5,
            noise_gain: 0.0,
            templates:  template::default_templates(),
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let fc = read_file_config(&path)?;
            cfg.apply_file(&fc);
        } else {
            log::info!(
                "No config file at {} — using defaults (run `morse-keyer --write-config` to create one)",
                path.display()
            );
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(s) = &fc.station {
            if let Some(v) = &s.mycall { self.mycall = v.to_ascii_uppercase(); }
        }
        if let Some(m) = &fc.morse {
            if let Some(v) = m.wpm        { self.wpm        = v; }
            if let Some(v) = m.tone_hz    { self.tone_hz    = v; }
            if let Some(v) = m.gain       { self.gain       = v; }
            if let Some(v) = m.noise_gain { self.noise_gain = v; }
        }
        if let Some(t) = &fc.templates {
            self.templates = template::merge_with_defaults(t);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.mycall    { self.mycall     = v.to_ascii_uppercase(); }
        if let Some(v) = &cli.theircall { self.theircall  = v.to_ascii_uppercase(); }
        if let Some(v) = cli.wpm        { self.wpm        = v; }
        if let Some(v) = cli.tone       { self.tone_hz    = v; }
        if let Some(v) = cli.gain       { self.gain       = v; }
        if let Some(v) = cli.noise      { self.noise_gain = v; }
    }

    /// Application bounds, tighter than what the synthesizer accepts
    pub fn validate(&self) -> Result<()> {
        if !WPM_RANGE.contains(&self.wpm) {
            bail!("wpm {} out of range {:?}", self.wpm, WPM_RANGE);
        }
        if !TONE_RANGE.contains(&self.tone_hz) {
            bail!("tone {} Hz out of range {:?}", self.tone_hz, TONE_RANGE);
        }
        if !(0.0..=1.0).contains(&self.gain) {
            bail!("gain {} out of range 0.0..=1.0", self.gain);
        }
        if !(0.0..=1.0).contains(&self.noise_gain) {
            bail!("noise gain {} out of range 0.0..=1.0", self.noise_gain);
        }
        Ok(())
    }

    pub fn synth_config(&self) -> SynthConfig {
        SynthConfig::new(self.gain, self.tone_hz as f32, self.wpm)
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Reading config {:?}", path))?;
    toml::from_str(&raw)
        .with_context(|| format!("Parsing config {:?}", path))
}

fn default_config_path() -> PathBuf {
    dirs_next().join("morse-keyer").join("config.toml")
}

fn dirs_next() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}
