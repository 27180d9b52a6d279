use std::io;

use core_sim::SimulationState;
use runtime::{JsonLinesRunLogWriter, NullRunLogWriter, RunLogWriter};
use ui::FinanceController;

use crate::config::{Config, LogOutput};

pub fn build_log_writer(output: LogOutput) -> Box<dyn RunLogWriter> {
    match output {
        LogOutput::Json => Box::new(JsonLinesRunLogWriter::new(io::stderr())),
        LogOutput::Off => Box::new(NullRunLogWriter),
    }
}

pub fn build_controller(config: &Config) -> FinanceController {
    debug_assert!(runtime::module_ready());
    debug_assert!(ui::module_ready());

    FinanceController::new(
        SimulationState::default(),
        build_log_writer(config.log_output),
    )
}
