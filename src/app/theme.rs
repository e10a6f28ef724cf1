use clap::ValueEnum;
use eframe::egui::Color32;

pub(in crate::app) const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Cyber,
    Terminal,
}

pub(in crate::app) struct Palette {
    pub background: Color32,
    pub accent: Color32,
    pub heading: Color32,
}

impl Theme {
    // Anything other than the exact stored "terminal" falls back to cyber,
    // including a missing or corrupted value.
    pub(in crate::app) fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("terminal") => Theme::Terminal,
            _ => Theme::Cyber,
        }
    }

    pub(in crate::app) fn storage_value(self) -> &'static str {
        match self {
            Theme::Cyber => "cyber",
            Theme::Terminal => "terminal",
        }
    }

    pub(in crate::app) fn toggled(self) -> Self {
        match self {
            Theme::Cyber => Theme::Terminal,
            Theme::Terminal => Theme::Cyber,
        }
    }

    pub(in crate::app) fn toggle_label(self) -> &'static str {
        match self {
            Theme::Cyber => "Terminal Mode",
            Theme::Terminal => "Normal Mode",
        }
    }

    pub(in crate::app) fn draws_field(self) -> bool {
        matches!(self, Theme::Cyber)
    }

    pub(in crate::app) fn palette(self) -> Palette {
        match self {
            Theme::Cyber => Palette {
                background: Color32::from_rgb(10, 15, 24),
                accent: Color32::from_rgb(14, 165, 233),
                heading: Color32::from_gray(235),
            },
            Theme::Terminal => Palette {
                background: Color32::BLACK,
                accent: Color32::from_rgb(51, 255, 102),
                heading: Color32::from_rgb(51, 255, 102),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_terminal_string_selects_terminal_mode() {
        assert_eq!(Theme::from_stored(Some("terminal")), Theme::Terminal);
    }

    #[test]
    fn anything_else_defaults_to_cyber() {
        assert_eq!(Theme::from_stored(Some("cyber")), Theme::Cyber);
        assert_eq!(Theme::from_stored(Some("TERMINAL")), Theme::Cyber);
        assert_eq!(Theme::from_stored(Some("")), Theme::Cyber);
        assert_eq!(Theme::from_stored(None), Theme::Cyber);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Cyber, Theme::Terminal] {
            assert_eq!(Theme::from_stored(Some(theme.storage_value())), theme);
        }
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        assert_eq!(Theme::Cyber.toggled(), Theme::Terminal);
        assert_eq!(Theme::Terminal.toggled(), Theme::Cyber);
    }

    #[test]
    fn only_cyber_draws_the_field() {
        assert!(Theme::Cyber.draws_field());
        assert!(!Theme::Terminal.draws_field());
    }
}
