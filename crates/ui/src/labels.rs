use core_sim::SimulationState;

pub const STATUS_HEADING: &str = "Company Financial Status";

pub fn format_currency(amount: impl Into<i128>) -> String {
    format!("${}", amount.into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    pub revenue: String,
    pub expenses: String,
    pub profit: String,
    pub loan: String,
}

impl StatusLabels {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            revenue: format!("Revenue: {}", format_currency(state.revenue())),
            expenses: format!("Expenses: {}", format_currency(state.expenses())),
            profit: format!("Profit: {}", format_currency(state.profit())),
            loan: format!("Loan: {}", format_currency(state.loan())),
        }
    }

    pub fn lines(&self) -> [&str; 4] {
        [&self.revenue, &self.expenses, &self.profit, &self.loan]
    }
}
