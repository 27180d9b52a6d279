use std::fmt;

use core_sim::{Amount, SimulationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Revenue,
    Expenses,
    Loan,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Revenue, Self::Expenses, Self::Loan];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expenses => "expenses",
            Self::Loan => "loan",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
            Self::Loan => "Loan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumericInput {
    fields: Vec<FormField>,
}

impl InvalidNumericInput {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

impl fmt::Display for InvalidNumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please enter valid numbers for all fields.")
    }
}

impl std::error::Error for InvalidNumericInput {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateRequest {
    pub revenue: Amount,
    pub expenses: Amount,
    pub loan: Amount,
}

/// Editable text buffers behind the three numeric inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub revenue: String,
    pub expenses: String,
    pub loan: String,
}

impl InputForm {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            revenue: state.revenue().to_string(),
            expenses: state.expenses().to_string(),
            loan: state.loan().to_string(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Revenue => &self.revenue,
            FormField::Expenses => &self.expenses,
            FormField::Loan => &self.loan,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Revenue => &mut self.revenue,
            FormField::Expenses => &mut self.expenses,
            FormField::Loan => &mut self.loan,
        }
    }

    /// Parses all three fields or none of them.
    pub fn parse(&self) -> Result<UpdateRequest, InvalidNumericInput> {
        let revenue = parse_amount(&self.revenue);
        let expenses = parse_amount(&self.expenses);
        let loan = parse_amount(&self.loan);

        match (revenue, expenses, loan) {
            (Some(revenue), Some(expenses), Some(loan)) => Ok(UpdateRequest {
                revenue,
                expenses,
                loan,
            }),
            _ => Err(InvalidNumericInput {
                fields: FormField::ALL
                    .into_iter()
                    .filter(|field| parse_amount(self.field(*field)).is_none())
                    .collect(),
            }),
        }
    }
}

fn parse_amount(raw: &str) -> Option<Amount> {
    raw.trim().parse::<Amount>().ok()
}
