use std::collections::VecDeque;
use std::time::Instant;

use eframe::egui::{self, Align, Context, Layout, RichText};

mod fps;
mod lifecycle;
mod render_utils;
mod theme;
mod view;

use lifecycle::FieldLifecycle;
pub use theme::Theme;
use theme::THEME_STORAGE_KEY;

pub struct PlexusApp {
    theme: Theme,
    lifecycle: FieldLifecycle,
    show_fps_bar: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

impl PlexusApp {
    pub fn new(cc: &eframe::CreationContext<'_>, theme_override: Option<Theme>) -> Self {
        let stored = cc
            .storage
            .and_then(|storage| storage.get_string(THEME_STORAGE_KEY));
        let theme = theme_override.unwrap_or_else(|| Theme::from_stored(stored.as_deref()));

        Self {
            theme,
            lifecycle: FieldLifecycle::new(),
            show_fps_bar: true,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        log::info!("theme switched to {}", theme.storage_value());
    }

    fn draw_top_bar(&mut self, ctx: &Context) {
        let palette = self.theme.palette();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("plexus-field").color(palette.heading));
                    ui.separator();
                    if let Some(field) = self.lifecycle.field() {
                        let (width, height) = field.size();
                        ui.label(format!(
                            "field: {}x{} | particles: {}",
                            width as u32,
                            height as u32,
                            field.count()
                        ));
                    }
                    if ui.button(self.theme.toggle_label()).clicked() {
                        self.set_theme(self.theme.toggled());
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                        }
                        ui.checkbox(&mut self.show_fps_bar, "FPS");
                    });
                });
            });
    }
}

impl eframe::App for PlexusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.update_fps_counter(ctx);

        let hidden = ctx.input(|input| input.viewport().minimized.unwrap_or(false));
        self.lifecycle.set_hidden(hidden);

        self.draw_top_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let now = Instant::now();
                let size = ui.available_size();
                self.lifecycle.sync_viewport(size.x, size.y, now);

                if self.theme.draws_field()
                    && self.lifecycle.should_step()
                    && let Some(field) = self.lifecycle.field_mut()
                {
                    field.step();
                }

                self.draw_field(ui);

                if self.lifecycle.is_running() {
                    if let Some(deadline) = self.lifecycle.repaint_deadline() {
                        ctx.request_repaint_after(deadline.saturating_duration_since(now));
                    } else if self.theme.draws_field() && self.lifecycle.field().is_some() {
                        ctx.request_repaint();
                    }
                }
            });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_STORAGE_KEY, self.theme.storage_value().to_owned());
    }
}
