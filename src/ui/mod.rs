pub mod layout;
pub mod views;

use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;

use crate::app::QuizApp;
use crate::model::AppState;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.state == AppState::LoadError {
            views::error::ui_load_error(self, ctx);
            return;
        }

        // The order is fixed for the whole epoch; rebuilding only happens
        // after Apply/Start/Reset marked it dirty.
        self.session.ensure_view(&self.catalog);

        layout::top_panel(self, ctx);
        layout::bottom_panel(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                views::setup::ui_setup(self, ui);
                ui.add_space(12.0);
                views::results::ui_results(self, ui);
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
