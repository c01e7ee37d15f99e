//! Interactive panel session.
//!
//! Reads one command per line from stdin, forwards it to the
//! [`UpdateCoordinator`] and prints every resulting update on its own line.
//! The session ends on `quit`, end of input or Ctrl+C; the selected units are
//! then written back to the config file unless saving is disabled.

use std::io::{self, BufRead};
use std::path::Path;
use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use tokio::sync::mpsc;
use tracing::{debug, info};

use hvac_core::{AirAxis, Command, PanelUpdate, Quantity, UpdateCoordinator};

use crate::config::Config;

const HELP: &str = "\
Commands:
  scale <quantity> <unit>              Change the display unit (e.g. scale temperature F)
  submit <temp> <humidity> <pressure>  Store new readings in the displayed units
  ac                                   Toggle the AC
  air <horizontal|vertical> <angle>    Set the air direction in degrees
  show                                 Print the whole panel
  help                                 Show this help
  quit                                 End the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
enum PanelLine {
    Command(Command),
    Show,
    Help,
    Quit,
    Blank,
}

fn parse_line(line: &str) -> Result<PanelLine> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Ok(PanelLine::Blank);
    };

    let line = match (verb.to_lowercase().as_str(), args) {
        ("scale", [quantity, unit]) => PanelLine::Command(Command::UnitChangeRequested {
            quantity: quantity.parse::<Quantity>()?,
            unit: unit.to_string(),
        }),
        ("submit", [temperature, humidity, pressure]) => {
            PanelLine::Command(Command::RawValuesSubmitted {
                temperature: temperature.to_string(),
                humidity: humidity.to_string(),
                pressure: pressure.to_string(),
            })
        }
        ("ac", []) => PanelLine::Command(Command::AcToggleRequested),
        ("air", [axis, angle]) => PanelLine::Command(Command::AirDirectionRequested {
            axis: axis.parse::<AirAxis>()?,
            angle: parse_angle(angle)?,
        }),
        ("show", []) => PanelLine::Show,
        ("help" | "?", []) => PanelLine::Help,
        ("quit" | "exit", []) => PanelLine::Quit,
        (
            verb @ ("scale" | "submit" | "ac" | "air" | "show" | "help" | "?" | "quit" | "exit"),
            _,
        ) => {
            bail!("Wrong number of arguments for '{}'. Type 'help' for usage", verb)
        }
        (verb, _) => bail!("Unknown command '{}'. Type 'help' for usage", verb),
    };
    Ok(line)
}

/// Parse whole degrees. Values beyond `i32` saturate so the store clamps
/// them like any other out-of-range angle.
fn parse_angle(text: &str) -> Result<i32> {
    let degrees: i64 = text
        .parse()
        .map_err(|_| anyhow!("Invalid angle '{}': expected whole degrees", text))?;
    Ok(degrees.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Read lines on a dedicated thread and forward them to the session.
///
/// The thread is detached from the runtime, so shutdown never waits on a
/// pending read. It ends at EOF or once the receiver is dropped.
fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);
    thread::spawn(move || {
        for line in reader.lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_update(update: &PanelUpdate) {
    println!("{}", update);
}

fn print_snapshot(panel: &UpdateCoordinator) {
    panel.snapshot().iter().for_each(print_update);
}

/// Apply one line to the panel. Returns `false` when the session should end.
fn run_line(panel: &mut UpdateCoordinator, line: &str) -> bool {
    match parse_line(line) {
        Ok(PanelLine::Command(command)) => {
            debug!("Dispatching {:?}", command);
            if let Err(e) = panel.dispatch(command, &mut print_update) {
                eprintln!("Error: {}", e);
            }
        }
        Ok(PanelLine::Show) => print_snapshot(panel),
        Ok(PanelLine::Help) => println!("{}", HELP),
        Ok(PanelLine::Quit) => return false,
        Ok(PanelLine::Blank) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
    true
}

pub async fn cmd_panel(config_path: &Path, no_save: bool) -> Result<()> {
    let mut config = Config::load_from(config_path);
    let mut panel = UpdateCoordinator::new(&config.panel);
    info!(
        "Panel started in {} and {}",
        panel.temperature_unit(),
        panel.pressure_unit()
    );
    print_snapshot(&panel);

    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            line = lines.recv() => {
                match line.transpose().context("Failed to read from stdin")? {
                    Some(line) => {
                        if !run_line(&mut panel, &line) {
                            break;
                        }
                    }
                    None => break,
                }
            }
            _ = &mut ctrl_c => {
                info!("Interrupted");
                break;
            }
        }
    }

    if no_save {
        debug!("Skipping preference save");
        return Ok(());
    }
    config.panel.temperature_unit = panel.temperature_unit();
    config.panel.pressure_unit = panel.pressure_unit();
    config.save_to(config_path)?;
    info!("Saved unit preferences to {}", config_path.display());
    Ok(())
}
