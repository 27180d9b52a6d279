mod config;
mod history;
mod state;

pub use config::InitialFinances;
pub use history::FinanceHistory;
pub use state::{Amount, FinanceSnapshot, SimulationState};

#[cfg(test)]
mod tests {
    use super::{InitialFinances, SimulationState};

    #[test]
    fn initial_finances_defaults() {
        let initial = InitialFinances::default();
        assert_eq!(initial.revenue, 50_000);
        assert_eq!(initial.expenses, 30_000);
        assert_eq!(initial.loan, 10_000);
    }

    #[test]
    fn custom_initial_finances_seed_the_history() {
        let state = SimulationState::new(InitialFinances {
            revenue: 1_000,
            expenses: 1_500,
            loan: 0,
        });

        assert_eq!(state.profit(), -500);
        assert_eq!(state.history().profit(), &[-500]);
        assert_eq!(state.history().len(), 1);
    }
}
