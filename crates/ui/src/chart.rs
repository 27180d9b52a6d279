//! Chart model rebuilt from the history after every accepted update.
//!
//! The model holds plain points and colours; [`crate::app`] turns it into an
//! egui plot keyed by [`FinanceChart::generation`], so a rebuild replaces the
//! whole plot rather than patching the previous one.

use core_sim::FinanceHistory;

pub const CHART_TITLE: &str = "Company Financial Trends";
pub const X_AXIS_LABEL: &str = "Days";
pub const Y_AXIS_LABEL: &str = "Amount ($)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const REVENUE_COLOR: Rgb = Rgb(0, 0, 255);
pub const EXPENSES_COLOR: Rgb = Rgb(255, 0, 0);
pub const PROFIT_COLOR: Rgb = Rgb(0, 128, 0);
pub const LOAN_COLOR: Rgb = Rgb(255, 165, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

impl ChartSeries {
    // Amounts beyond 2^53 lose precision once plotted.
    fn new(
        name: &'static str,
        color: Rgb,
        days: &[u64],
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        let points = days
            .iter()
            .zip(values)
            .map(|(day, value)| [*day as f64, value])
            .collect();

        Self {
            name,
            color,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceChart {
    generation: u64,
    series: [ChartSeries; 4],
}

impl FinanceChart {
    pub fn from_history(history: &FinanceHistory, generation: u64) -> Self {
        let days = history.days();

        Self {
            generation,
            series: [
                ChartSeries::new(
                    "Revenue",
                    REVENUE_COLOR,
                    days,
                    history.revenue().iter().map(|value| *value as f64),
                ),
                ChartSeries::new(
                    "Expenses",
                    EXPENSES_COLOR,
                    days,
                    history.expenses().iter().map(|value| *value as f64),
                ),
                ChartSeries::new(
                    "Profit",
                    PROFIT_COLOR,
                    days,
                    history.profit().iter().map(|value| *value as f64),
                ),
                ChartSeries::new(
                    "Loan",
                    LOAN_COLOR,
                    days,
                    history.loan().iter().map(|value| *value as f64),
                ),
            ],
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    pub fn title(&self) -> &'static str {
        CHART_TITLE
    }
}

#[cfg(test)]
mod tests {
    use core_sim::SimulationState;

    use super::{FinanceChart, Rgb};

    #[test]
    fn initial_chart_has_one_point_per_series() {
        let state = SimulationState::default();
        let chart = FinanceChart::from_history(state.history(), 0);

        let names: Vec<&str> = chart.series().iter().map(|series| series.name).collect();
        assert_eq!(names, vec!["Revenue", "Expenses", "Profit", "Loan"]);
        assert_eq!(chart.series()[0].points, vec![[0.0, 50_000.0]]);
        assert_eq!(chart.series()[1].points, vec![[0.0, 30_000.0]]);
        assert_eq!(chart.series()[2].points, vec![[0.0, 20_000.0]]);
        assert_eq!(chart.series()[3].points, vec![[0.0, 10_000.0]]);
        assert_eq!(chart.title(), "Company Financial Trends");
    }

    #[test]
    fn series_colors_are_distinct() {
        let chart = FinanceChart::from_history(SimulationState::default().history(), 0);
        let colors: Vec<Rgb> = chart.series().iter().map(|series| series.color).collect();

        for (idx, color) in colors.iter().enumerate() {
            assert!(!colors[idx + 1..].contains(color));
        }
    }

    #[test]
    fn rebuilt_chart_tracks_full_history() {
        let mut state = SimulationState::default();
        state.apply_update(60_000, 35_000, 9_000);
        state.apply_update(55_000, 40_000, 8_000);

        let chart = FinanceChart::from_history(state.history(), 2);

        assert_eq!(chart.generation(), 2);
        for series in chart.series() {
            assert_eq!(series.points.len(), 3);
            let days: Vec<f64> = series.points.iter().map(|point| point[0]).collect();
            assert_eq!(days, vec![0.0, 1.0, 2.0]);
        }
        assert_eq!(
            chart.series()[2].points,
            vec![[0.0, 20_000.0], [1.0, 25_000.0], [2.0, 15_000.0]]
        );
    }
}
