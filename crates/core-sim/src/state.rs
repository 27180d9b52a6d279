use crate::config::InitialFinances;
use crate::history::FinanceHistory;

pub type Amount = i64;

/// Values of every tracked quantity at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FinanceSnapshot {
    pub revenue: Amount,
    pub expenses: Amount,
    pub profit: i128,
    pub loan: Amount,
    pub day: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    revenue: Amount,
    expenses: Amount,
    profit: i128,
    loan: Amount,
    day: u64,
    history: FinanceHistory,
}

impl SimulationState {
    pub fn new(initial: InitialFinances) -> Self {
        let profit = profit_of(initial.revenue, initial.expenses);
        let history = FinanceHistory::starting_at(FinanceSnapshot {
            revenue: initial.revenue,
            expenses: initial.expenses,
            profit,
            loan: initial.loan,
            day: 0,
        });

        Self {
            revenue: initial.revenue,
            expenses: initial.expenses,
            profit,
            loan: initial.loan,
            day: 0,
            history,
        }
    }

    /// Replaces the current figures, advances the day and records the result.
    ///
    /// Any integers are accepted, including zero and negatives.
    pub fn apply_update(&mut self, revenue: Amount, expenses: Amount, loan: Amount) {
        self.revenue = revenue;
        self.expenses = expenses;
        self.profit = profit_of(revenue, expenses);
        self.loan = loan;
        self.day += 1;

        self.history.push(self.snapshot());
    }

    pub fn revenue(&self) -> Amount {
        self.revenue
    }

    pub fn expenses(&self) -> Amount {
        self.expenses
    }

    pub fn profit(&self) -> i128 {
        self.profit
    }

    pub fn loan(&self) -> Amount {
        self.loan
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn history(&self) -> &FinanceHistory {
        &self.history
    }

    pub fn snapshot(&self) -> FinanceSnapshot {
        FinanceSnapshot {
            revenue: self.revenue,
            expenses: self.expenses,
            profit: self.profit,
            loan: self.loan,
            day: self.day,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(InitialFinances::default())
    }
}

// i128 holds the difference of any two i64 values.
fn profit_of(revenue: Amount, expenses: Amount) -> i128 {
    i128::from(revenue) - i128::from(expenses)
}

#[cfg(test)]
mod tests {
    use super::{FinanceSnapshot, SimulationState};

    fn assert_profit_invariant(state: &SimulationState) {
        let history = state.history();
        for idx in 0..history.len() {
            assert_eq!(
                history.profit()[idx],
                i128::from(history.revenue()[idx]) - i128::from(history.expenses()[idx]),
                "profit mismatch at index {idx}"
            );
        }
    }

    fn assert_equal_lengths(state: &SimulationState, expected: usize) {
        let history = state.history();
        assert_eq!(history.revenue().len(), expected);
        assert_eq!(history.expenses().len(), expected);
        assert_eq!(history.profit().len(), expected);
        assert_eq!(history.loan().len(), expected);
        assert_eq!(history.days().len(), expected);
    }

    #[test]
    fn fresh_state_records_initial_entry() {
        let state = SimulationState::default();
        let history = state.history();

        assert_eq!(history.revenue(), &[50_000]);
        assert_eq!(history.expenses(), &[30_000]);
        assert_eq!(history.profit(), &[20_000]);
        assert_eq!(history.loan(), &[10_000]);
        assert_eq!(history.days(), &[0]);
        assert_eq!(state.profit(), 20_000);
        assert_eq!(state.day(), 0);
    }

    #[test]
    fn update_replaces_figures_and_appends_history() {
        let mut state = SimulationState::default();

        state.apply_update(60_000, 35_000, 9_000);

        assert_eq!(
            state.snapshot(),
            FinanceSnapshot {
                revenue: 60_000,
                expenses: 35_000,
                profit: 25_000,
                loan: 9_000,
                day: 1,
            }
        );
        assert_equal_lengths(&state, 2);
        assert_profit_invariant(&state);
    }

    #[test]
    fn day_history_matches_index_after_many_updates() {
        let mut state = SimulationState::default();

        for step in 0..25_i64 {
            state.apply_update(step * 1_000, step * 700 - 3_000, -step);
            assert_equal_lengths(&state, step as usize + 2);
        }

        for (idx, day) in state.history().days().iter().enumerate() {
            assert_eq!(*day, idx as u64);
        }
        assert_profit_invariant(&state);
    }

    #[test]
    fn repeated_update_creates_distinct_entries_one_day_apart() {
        let mut state = SimulationState::default();

        state.apply_update(42_000, 40_000, 5_000);
        state.apply_update(42_000, 40_000, 5_000);

        let entries: Vec<FinanceSnapshot> = state.history().entries().collect();
        let (first, second) = (entries[1], entries[2]);

        assert_eq!(
            (first.revenue, first.expenses, first.profit, first.loan),
            (second.revenue, second.expenses, second.profit, second.loan)
        );
        assert_eq!(second.day, first.day + 1);
    }

    #[test]
    fn negative_and_zero_inputs_are_accepted() {
        let mut state = SimulationState::default();

        state.apply_update(0, 12_500, -4_000);

        assert_eq!(state.revenue(), 0);
        assert_eq!(state.profit(), -12_500);
        assert_eq!(state.loan(), -4_000);
        assert_profit_invariant(&state);
    }

    #[test]
    fn extreme_inputs_do_not_overflow_profit() {
        let mut state = SimulationState::default();

        state.apply_update(i64::MAX, i64::MIN, 0);

        assert_eq!(state.profit(), i128::from(i64::MAX) - i128::from(i64::MIN));
        assert_profit_invariant(&state);
    }
}
