use core_sim::SimulationState;
use runtime::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};

use crate::chart::FinanceChart;
use crate::form::{InputForm, InvalidNumericInput};
use crate::labels::StatusLabels;

/// Update handler behind the window, free of any toolkit types.
///
/// Owns the simulation state for the lifetime of the window. Every outcome
/// of [`FinanceController::submit`] is written to the run log.
pub struct FinanceController {
    state: SimulationState,
    form: InputForm,
    labels: StatusLabels,
    chart: FinanceChart,
    log_writer: Box<dyn RunLogWriter>,
}

impl FinanceController {
    pub fn new(state: SimulationState, mut log_writer: Box<dyn RunLogWriter>) -> Self {
        let form = InputForm::from_state(&state);
        let labels = StatusLabels::from_state(&state);
        let chart = FinanceChart::from_history(state.history(), 0);

        log_writer.write(
            RunLogEvent::new(
                state.day(),
                RunLogEventKind::StateInitialized,
                state.history().len(),
            )
            .with_snapshot(state.snapshot()),
        );

        Self {
            state,
            form,
            labels,
            chart,
            log_writer,
        }
    }

    pub fn submit(&mut self) -> Result<(), InvalidNumericInput> {
        let request = match self.form.parse() {
            Ok(request) => request,
            Err(err) => {
                self.log_writer.write(
                    RunLogEvent::new(
                        self.state.day(),
                        RunLogEventKind::UpdateRejected,
                        self.state.history().len(),
                    )
                    .with_rejected_fields(err.fields().iter().map(|field| field.as_str())),
                );
                return Err(err);
            }
        };

        self.state
            .apply_update(request.revenue, request.expenses, request.loan);
        self.log_writer.write(
            RunLogEvent::new(
                self.state.day(),
                RunLogEventKind::UpdateApplied,
                self.state.history().len(),
            )
            .with_snapshot(self.state.snapshot()),
        );

        self.labels = StatusLabels::from_state(&self.state);
        self.rebuild_chart();
        Ok(())
    }

    fn rebuild_chart(&mut self) {
        let generation = self.chart.generation() + 1;
        self.chart = FinanceChart::from_history(self.state.history(), generation);
        self.log_writer.write(RunLogEvent::new(
            self.state.day(),
            RunLogEventKind::ChartRebuilt,
            self.state.history().len(),
        ));
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn labels(&self) -> &StatusLabels {
        &self.labels
    }

    pub fn chart(&self) -> &FinanceChart {
        &self.chart
    }
}
