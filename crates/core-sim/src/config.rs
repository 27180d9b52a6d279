use crate::state::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialFinances {
    pub revenue: Amount,
    pub expenses: Amount,
    pub loan: Amount,
}

impl Default for InitialFinances {
    fn default() -> Self {
        Self {
            revenue: 50_000,
            expenses: 30_000,
            loan: 10_000,
        }
    }
}
