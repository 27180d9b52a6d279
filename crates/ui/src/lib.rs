pub mod app;
pub mod chart;
pub mod controller;
pub mod form;
pub mod labels;

pub use app::{run, BusinessSimApp, WindowOptions};
pub use controller::FinanceController;
pub use form::{InvalidNumericInput, UpdateRequest};

pub fn module_ready() -> bool {
    true
}
