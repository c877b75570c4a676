// src/main.rs  —  morse-keyer  entry point
use anyhow::{Context, Result};
use clap::Parser;
use morse_keyer::audio::{self, AudioOutput};
use morse_keyer::config::{self, AppConfig, Cli};
use morse_keyer::morse::reference;
use morse_keyer::{morse, synth, template, SynthesisError};
use std::io::BufRead;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        println!("Edit it to set your callsign, speed, tone and templates.");
        return Ok(());
    }

    // ── --list-prosigns / --list-qcodes  ─────────────────────────────────────
    if cli.list_prosigns || cli.list_qcodes {
        if cli.list_prosigns {
            print_reference(reference::PROSIGNS);
        }
        if cli.list_qcodes {
            print_reference(reference::Q_CODES);
        }
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;

    // ── --list-templates  ─────────────────────────────────────────────────────
    if cli.list_templates {
        for t in &cfg.templates {
            let mode = if t.append { "append " } else { "replace" };
            println!("  {:<8} [{mode}]  {}", t.name, t.message);
        }
        return Ok(());
    }

    let message = compose_message(&cli, &cfg)?;

    // ── --show-code  ──────────────────────────────────────────────────────────
    if cli.show_code {
        let code = morse::translate(&message)?;
        let stream = synth::build(&message, &cfg.synth_config())?;
        println!("{message}");
        println!("{code}");
        println!("{} units, {:.2} s at {} wpm", code.units(), stream.duration().as_secs_f32(), cfg.wpm);
        return Ok(());
    }

    // ── Audio ─────────────────────────────────────────────────────────────────
    let mut out = audio::create_audio();
    if cfg.noise_gain > 0.0 {
        out.start_noise(cfg.noise_gain)?;
    }

    if cli.interactive {
        if !message.is_empty() {
            send(out.as_mut(), &message, &cfg)?;
        }
        interactive(out.as_mut(), &cfg)?;
    } else if message.is_empty() {
        log::warn!("Nothing to send — give a message or --template");
    } else {
        send(out.as_mut(), &message, &cfg)?;
    }

    out.stop_noise();
    Ok(())
}

fn print_reference(table: &[(&str, &str)]) {
    for (token, meaning) in table {
        println!("  {token:<6} {meaning}");
    }
}

/// Free text first, then each --template in order
fn compose_message(cli: &Cli, cfg: &AppConfig) -> Result<String> {
    let mut message = cli.message.join(" ");
    for name in &cli.templates {
        let t = template::find(&cfg.templates, name)?;
        message = t.apply(&message, &cfg.mycall, &cfg.theircall)
            .with_context(|| format!("Applying template '{}'", t.name))?;
    }
    Ok(message.to_ascii_uppercase())
}

/// Key one message and block until it has been played
fn send(out: &mut dyn AudioOutput, message: &str, cfg: &AppConfig) -> Result<()> {
    let stream = synth::build_at(message, &cfg.synth_config(), out.sample_rate())?;
    log::info!("TX: {message}  ({:.1} s)", stream.duration().as_secs_f32());
    let playback = out.play(stream)?;
    playback.wait();
    Ok(())
}

/// One message per stdin line; typos are reported and the line skipped
fn interactive(out: &mut dyn AudioOutput, cfg: &AppConfig) -> Result<()> {
    eprintln!("Type a message and press Enter to send it. Ctrl-D quits.");
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match send(out, line, cfg) {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<SynthesisError>() {
                Some(SynthesisError::InvalidCharacter { character, .. }) => {
                    eprintln!("Cannot key {character:?} — message not sent, try again.");
                }
                _ => return Err(e),
            },
        }
    }
    Ok(())
}
