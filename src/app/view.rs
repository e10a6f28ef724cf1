use eframe::egui::{Sense, Stroke, Ui, pos2};

use crate::field::{Particle, link_alpha};

use super::PlexusApp;
use super::render_utils::{dot_color, link_color};

impl PlexusApp {
    pub(in crate::app) fn draw_field(&self, ui: &mut Ui) {
        let palette = self.theme.palette();
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, palette.background);

        if !self.theme.draws_field() {
            return;
        }

        let Some(field) = self.lifecycle.field() else {
            return;
        };

        let origin = rect.left_top();
        let screen = |particle: &Particle| pos2(origin.x + particle.x, origin.y + particle.y);
        let particles = field.particles();

        for (index, a) in particles.iter().enumerate() {
            for b in &particles[index + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = ((dx * dx) + (dy * dy)).sqrt();
                if let Some(alpha) = link_alpha(distance) {
                    painter.line_segment(
                        [screen(a), screen(b)],
                        Stroke::new(1.0, link_color(palette.accent, alpha)),
                    );
                }
            }
        }

        for particle in particles {
            painter.circle_filled(
                screen(particle),
                particle.radius,
                dot_color(palette.accent, particle.alpha),
            );
        }
    }
}
