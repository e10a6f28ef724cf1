use std::time::Instant;

use crate::field::{Field, RESIZE_QUIET_PERIOD, ResizeDebouncer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RunState {
    Running,
    Paused,
}

// Owns the field's run state and the resize debounce so the frame loop in
// the eframe app stays a thin wrapper around plain decisions.
pub(super) struct FieldLifecycle {
    field: Option<Field>,
    run_state: RunState,
    debouncer: ResizeDebouncer,
    last_seen_size: Option<(f32, f32)>,
}

impl FieldLifecycle {
    pub(super) fn new() -> Self {
        Self {
            field: None,
            run_state: RunState::Running,
            debouncer: ResizeDebouncer::new(RESIZE_QUIET_PERIOD),
            last_seen_size: None,
        }
    }

    pub(super) fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    pub(super) fn field_mut(&mut self) -> Option<&mut Field> {
        self.field.as_mut()
    }

    pub(super) fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub(super) fn resize_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub(super) fn repaint_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub(super) fn set_hidden(&mut self, hidden: bool) {
        let next = if hidden {
            RunState::Paused
        } else {
            RunState::Running
        };
        if next != self.run_state {
            log::debug!("run state: {:?} -> {:?}", self.run_state, next);
            self.run_state = next;
        }
    }

    pub(super) fn should_step(&self) -> bool {
        self.is_running() && !self.debouncer.is_pending() && self.field.is_some()
    }

    // Spawns the field on the first frame with a usable surface; later size
    // changes become debounced wholesale regenerations.
    pub(super) fn sync_viewport(&mut self, width: f32, height: f32, now: Instant) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        if self.field.is_none() && !self.debouncer.is_pending() {
            self.field = Some(spawn_field(width, height));
            self.last_seen_size = Some((width, height));
            return;
        }

        if self.last_seen_size != Some((width, height)) {
            self.debouncer.signal(width, height, now);
            self.last_seen_size = Some((width, height));
        }

        if let Some((width, height)) = self.debouncer.poll(now) {
            self.field = Some(spawn_field(width, height));
        }
    }
}

fn spawn_field(width: f32, height: f32) -> Field {
    let mut rng = rand::rng();
    let field = Field::new(width, height, &mut rng);
    log::debug!(
        "spawned field: {}x{}, {} particles",
        width as u32,
        height as u32,
        field.count()
    );
    field
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::field::{RESIZE_QUIET_PERIOD, particle_count};

    use super::*;

    fn positions(lifecycle: &FieldLifecycle) -> Vec<(f32, f32)> {
        lifecycle
            .field()
            .expect("field should exist")
            .particles()
            .iter()
            .map(|particle| (particle.x, particle.y))
            .collect()
    }

    #[test]
    fn first_usable_frame_spawns_without_debounce() {
        let mut lifecycle = FieldLifecycle::new();
        lifecycle.sync_viewport(800.0, 600.0, Instant::now());

        let field = lifecycle.field().expect("spawned on first frame");
        assert_eq!(field.size(), (800.0, 600.0));
        assert_eq!(field.count(), particle_count(800.0, 600.0));
        assert!(!lifecycle.resize_pending());
        assert!(lifecycle.should_step());
    }

    #[test]
    fn zero_area_surface_stays_inert() {
        let mut lifecycle = FieldLifecycle::new();
        lifecycle.sync_viewport(0.0, 0.0, Instant::now());

        assert!(lifecycle.field().is_none());
        assert!(!lifecycle.resize_pending());
        assert!(!lifecycle.should_step());
    }

    #[test]
    fn hidden_then_visible_resumes_with_the_same_particles() {
        let start = Instant::now();
        let mut lifecycle = FieldLifecycle::new();
        lifecycle.sync_viewport(640.0, 480.0, start);
        let before = positions(&lifecycle);

        lifecycle.set_hidden(true);
        assert!(!lifecycle.is_running());
        assert!(!lifecycle.should_step());

        lifecycle.set_hidden(false);
        lifecycle.sync_viewport(640.0, 480.0, start + Duration::from_secs(2));

        assert!(lifecycle.should_step());
        assert!(!lifecycle.resize_pending());
        assert_eq!(positions(&lifecycle), before);
    }

    #[test]
    fn size_change_debounces_instead_of_respawning() {
        let start = Instant::now();
        let mut lifecycle = FieldLifecycle::new();
        lifecycle.sync_viewport(800.0, 600.0, start);

        lifecycle.sync_viewport(1024.0, 768.0, start + Duration::from_millis(50));
        let field = lifecycle.field().expect("old field kept while pending");
        assert_eq!(field.size(), (800.0, 600.0));
        assert!(lifecycle.resize_pending());
        assert!(!lifecycle.should_step());

        lifecycle.sync_viewport(
            1024.0,
            768.0,
            start + Duration::from_millis(50) + RESIZE_QUIET_PERIOD,
        );
        let field = lifecycle.field().expect("regenerated after quiet period");
        assert_eq!(field.size(), (1024.0, 768.0));
        assert_eq!(field.count(), particle_count(1024.0, 768.0));
        assert!(!lifecycle.resize_pending());
        assert!(lifecycle.should_step());
    }

    #[test]
    fn unchanged_size_never_rearms_the_debouncer() {
        let start = Instant::now();
        let mut lifecycle = FieldLifecycle::new();
        lifecycle.sync_viewport(800.0, 600.0, start);

        for tick in 1..10 {
            lifecycle.sync_viewport(800.0, 600.0, start + Duration::from_millis(tick * 16));
        }

        assert!(!lifecycle.resize_pending());
        assert_eq!(lifecycle.repaint_deadline(), None);
    }
}
