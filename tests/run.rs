//! Integration tests for the CLI command handlers.
use h2plan::cli::{handle_cost_command, handle_forecast_command};
use h2plan::costs::{CostSpec, ElectrolyzerInputs};
use h2plan::log::is_logger_initialised;
use h2plan::settings::Settings;

/// An integration test for the `forecast` command.
///
/// We also check that the logger is initialised after it is run. The second
/// command fails because the logger can only be initialised once per process.
#[test]
fn test_command_handlers() {
    unsafe { std::env::set_var("H2PLAN_LOG_LEVEL", "off") };

    assert!(!is_logger_initialised());

    handle_forecast_command(6, Some(Settings::default())).unwrap();

    assert!(is_logger_initialised());

    let spec = CostSpec::Electrolyzer(ElectrolyzerInputs {
        capacity: 100.0,
        price_per_kwh: 5.0,
    });
    assert_eq!(
        handle_cost_command(&spec, Some(Settings::default()))
            .unwrap_err()
            .chain()
            .next()
            .unwrap()
            .to_string(),
        "Failed to initialise logging."
    );
}
