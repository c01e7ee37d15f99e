//! End-to-end tests of a panel session driven only through commands.
//!
//! Run with log output:
//! `RUST_LOG=debug cargo test --package hvac-core --test panel_flow -- --nocapture`

use hvac_core::{
    AirAxis, Command, Error, HorizontalSweep, PanelConfig, PanelUpdate, Quantity, RawValuePolicy,
    TemperatureUnit, UpdateCoordinator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn unit(quantity: Quantity, unit: &str) -> Command {
    Command::UnitChangeRequested {
        quantity,
        unit: unit.to_string(),
    }
}

fn submit(temperature: &str, humidity: &str, pressure: &str) -> Command {
    Command::RawValuesSubmitted {
        temperature: temperature.to_string(),
        humidity: humidity.to_string(),
        pressure: pressure.to_string(),
    }
}

fn labels(updates: Vec<PanelUpdate>) -> Vec<String> {
    updates.into_iter().map(|u| u.to_string()).collect()
}

#[test]
fn test_operator_session() {
    init_tracing();
    let mut panel = UpdateCoordinator::new(&PanelConfig::default());

    let updates = panel.handle(unit(Quantity::Temperature, "Fahrenheit")).unwrap();
    assert_eq!(labels(updates), vec!["Temperature: 32.00 °F"]);

    let updates = panel.handle(submit("68", "55", "101325")).unwrap();
    assert_eq!(
        labels(updates),
        vec![
            "Temperature: 68.00 °F",
            "Humidity: 55 %",
            "Pressure: 101325.00 Pa",
        ]
    );

    let updates = panel.handle(unit(Quantity::Temperature, "Celsius")).unwrap();
    assert_eq!(labels(updates), vec!["Temperature: 20.00 °C"]);

    let updates = panel.handle(unit(Quantity::Temperature, "Kelvin")).unwrap();
    assert_eq!(labels(updates), vec!["Temperature: 293.15 K"]);

    let updates = panel.handle(unit(Quantity::Pressure, "mmHg")).unwrap();
    assert_eq!(labels(updates), vec!["Pressure: 760.00 mmHg"]);

    let updates = panel.handle(Command::AcToggleRequested).unwrap();
    assert_eq!(labels(updates), vec!["AC: on [Turn Off AC]"]);

    let updates = panel
        .handle(Command::AirDirectionRequested {
            axis: AirAxis::Vertical,
            angle: 45,
        })
        .unwrap();
    assert_eq!(labels(updates), vec!["Air direction (vertical): 45°"]);
}

#[test]
fn test_rejected_submission_reports_every_field() {
    init_tracing();
    let mut panel = UpdateCoordinator::default();
    panel.handle(submit("20", "40", "1000")).unwrap();

    let err = panel.handle(submit("abc", "150", "-5")).unwrap_err();
    let Error::Validation(rejection) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(
        rejection.fields(),
        vec![Quantity::Temperature, Quantity::Humidity, Quantity::Pressure]
    );

    let snapshot = labels(panel.snapshot());
    assert_eq!(snapshot[0], "Temperature: 20.00 °C");
    assert_eq!(snapshot[1], "Humidity: 40 %");
    assert_eq!(snapshot[2], "Pressure: 1000.00 Pa");
}

#[test]
fn test_configured_panel() {
    init_tracing();
    let config = PanelConfig {
        temperature_unit: TemperatureUnit::Kelvin,
        raw_value_policy: RawValuePolicy::BaseUnit,
        horizontal_sweep: HorizontalSweep::Full,
        ..PanelConfig::default()
    };
    let mut panel = UpdateCoordinator::new(&config);
    assert_eq!(labels(panel.snapshot())[0], "Temperature: 0.00 K");

    panel.handle(submit("25", "30", "100000")).unwrap();
    assert_eq!(panel.temperature_unit(), TemperatureUnit::Celsius);

    let updates = panel
        .handle(Command::AirDirectionRequested {
            axis: AirAxis::Horizontal,
            angle: 300,
        })
        .unwrap();
    assert_eq!(labels(updates), vec!["Air direction (horizontal): 300°"]);
}

#[test]
fn test_commands_from_json() {
    init_tracing();
    let mut panel = UpdateCoordinator::default();
    let script = [
        r#"{"type":"raw_values_submitted","temperature":"0","humidity":"10","pressure":"0"}"#,
        r#"{"type":"unit_change_requested","quantity":"temperature","unit":"F"}"#,
        r#"{"type":"air_direction_requested","axis":"horizontal","angle":-20}"#,
    ];

    let mut rendered = Vec::new();
    for line in script {
        let command: Command = serde_json::from_str(line).unwrap();
        panel
            .dispatch(command, &mut |u: &PanelUpdate| rendered.push(u.to_string()))
            .unwrap();
    }

    assert_eq!(rendered[3], "Temperature: 32.00 °F");
    assert_eq!(rendered[4], "Air direction (horizontal): 0°");
}
