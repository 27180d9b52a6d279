use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::{FinanceChart, Rgb, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::controller::FinanceController;
use crate::form::FormField;
use crate::labels::STATUS_HEADING;

pub const WINDOW_TITLE: &str = "Business Simulation";
pub const UPDATE_BUTTON_TEXT: &str = "Update Finances";
pub const ERROR_TITLE: &str = "Invalid Input";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOptions {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

pub struct BusinessSimApp {
    controller: FinanceController,
    error_message: Option<String>,
    form_enabled_last_frame: bool,
}

impl BusinessSimApp {
    pub fn new(controller: FinanceController) -> Self {
        Self {
            controller,
            error_message: None,
            form_enabled_last_frame: true,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    /// Whether the form accepted input during the most recent frame.
    pub fn form_enabled_last_frame(&self) -> bool {
        self.form_enabled_last_frame
    }

    /// Lays out one frame; the form stays disabled while an error is shown.
    pub fn show(&mut self, ctx: &egui::Context) {
        let modal_open = self.error_message.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.form_enabled_last_frame = ui.is_enabled();
                self.render_status(ui);
                ui.separator();
                self.render_inputs(ui);
                ui.separator();
                self.render_chart(ui);
            });
        });

        self.render_error_modal(ctx);
    }

    fn on_update_clicked(&mut self) {
        if let Err(err) = self.controller.submit() {
            self.error_message = Some(err.to_string());
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(STATUS_HEADING).size(16.0).strong());
            for line in self.controller.labels().lines() {
                ui.label(line);
            }
        });
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("finance_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for field in FormField::ALL {
                    ui.label(field.caption());
                    ui.text_edit_singleline(self.controller.form_mut().field_mut(field));
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        if ui.button(UPDATE_BUTTON_TEXT).clicked() {
            self.on_update_clicked();
        }
    }

    fn render_chart(&self, ui: &mut egui::Ui) {
        let chart = self.controller.chart();
        ui.label(egui::RichText::new(chart.title()).strong());

        // A new id per generation drops the previous plot's bounds and memory.
        Plot::new(("finance_chart", chart.generation()))
            .legend(Legend::default())
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .show(ui, |plot_ui| draw_series(plot_ui, chart));
    }

    fn render_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.as_deref() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(ERROR_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss_error();
        }
    }
}

fn draw_series(plot_ui: &mut egui_plot::PlotUi, chart: &FinanceChart) {
    for series in chart.series() {
        plot_ui.line(
            Line::new(PlotPoints::new(series.points.clone()))
                .name(series.name)
                .color(to_color32(series.color))
                .width(1.5),
        );
    }
}

fn to_color32(Rgb(r, g, b): Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

impl eframe::App for BusinessSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

pub fn native_options(window: WindowOptions) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([window.width, window.height])
            .with_resizable(false),
        ..Default::default()
    }
}

/// Opens the window and blocks until it is closed.
pub fn run(window: WindowOptions, controller: FinanceController) -> eframe::Result<()> {
    eframe::run_native(
        WINDOW_TITLE,
        native_options(window),
        Box::new(move |_cc| Ok(Box::new(BusinessSimApp::new(controller)))),
    )
}
