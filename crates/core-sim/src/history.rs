use crate::state::{Amount, FinanceSnapshot};

/// Parallel per-update records of every tracked quantity.
///
/// The five series are private so they can only grow together through
/// [`FinanceHistory::push`], which keeps them the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinanceHistory {
    revenue: Vec<Amount>,
    expenses: Vec<Amount>,
    profit: Vec<i128>,
    loan: Vec<Amount>,
    days: Vec<u64>,
}

impl FinanceHistory {
    pub(crate) fn starting_at(snapshot: FinanceSnapshot) -> Self {
        let mut history = Self {
            revenue: Vec::new(),
            expenses: Vec::new(),
            profit: Vec::new(),
            loan: Vec::new(),
            days: Vec::new(),
        };
        history.push(snapshot);
        history
    }

    pub(crate) fn push(&mut self, snapshot: FinanceSnapshot) {
        self.revenue.push(snapshot.revenue);
        self.expenses.push(snapshot.expenses);
        self.profit.push(snapshot.profit);
        self.loan.push(snapshot.loan);
        self.days.push(snapshot.day);
    }

    pub fn revenue(&self) -> &[Amount] {
        &self.revenue
    }

    pub fn expenses(&self) -> &[Amount] {
        &self.expenses
    }

    pub fn profit(&self) -> &[i128] {
        &self.profit
    }

    pub fn loan(&self) -> &[Amount] {
        &self.loan
    }

    pub fn days(&self) -> &[u64] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = FinanceSnapshot> + '_ {
        (0..self.len()).map(move |idx| FinanceSnapshot {
            revenue: self.revenue[idx],
            expenses: self.expenses[idx],
            profit: self.profit[idx],
            loan: self.loan[idx],
            day: self.days[idx],
        })
    }
}
