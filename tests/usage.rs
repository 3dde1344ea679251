use apparat::config::{Config, SECTION_STATISTICS};
use apparat::usage::{record_app_started, record_execution, UsageCounters, COMMAND_EXECUTED};

#[test]
fn app_start_is_counted() {
    let config = Config::in_memory();
    record_app_started(&config).unwrap();
    record_app_started(&config).unwrap();
    assert_eq!(UsageCounters::load(&config).app_started, 2);
}

#[test]
fn executions_are_counted_by_source() {
    let config = Config::in_memory();
    record_execution(&config, false);
    record_execution(&config, true);
    record_execution(&config, true);
    assert_eq!(
        UsageCounters::load(&config),
        UsageCounters {
            app_started: 0,
            commands_executed: 3,
            plugins_executed: 2,
        }
    );
}

#[test]
fn counters_continue_from_stored_value() {
    let config = Config::in_memory();
    config.set_int(SECTION_STATISTICS, COMMAND_EXECUTED, 41).unwrap();
    record_execution(&config, false);
    assert_eq!(config.get_int(SECTION_STATISTICS, COMMAND_EXECUTED), 42);
}
