use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::tour::TourObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Panel {
    References,
    Chat,
    Database,
}

impl Panel {
    pub const ALL: [Self; 3] = [Self::References, Self::Chat, Self::Database];

    pub fn title(self, locale: &str) -> String {
        let key = format!("panel.{self}");
        t!(&key, locale = locale).into_owned()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapsedSections {
    pub references: bool,
    pub chat: bool,
    pub database: bool,
}

impl CollapsedSections {
    pub fn is_collapsed(&self, panel: Panel) -> bool {
        match panel {
            Panel::References => self.references,
            Panel::Chat => self.chat,
            Panel::Database => self.database,
        }
    }

    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::References => &mut self.references,
            Panel::Chat => &mut self.chat,
            Panel::Database => &mut self.database,
        }
    }
}

/// Panel layout flags and assistance (guided tour) mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationState {
    pub collapsed: CollapsedSections,
    pub assistance_mode: bool,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, panel: Panel) {
        let flag = self.collapsed.flag_mut(panel);
        *flag = !*flag;
    }

    pub fn expanded_count(&self) -> usize {
        Panel::ALL
            .iter()
            .filter(|p| !self.collapsed.is_collapsed(**p))
            .count()
    }

    pub fn expand_all(&mut self) {
        self.collapsed = CollapsedSections::default();
    }

    /// Flip assistance mode. Turning it on expands every panel so each tour
    /// anchor is visible; returns the new value.
    pub fn toggle_assistance(&mut self) -> bool {
        self.assistance_mode = !self.assistance_mode;
        if self.assistance_mode {
            self.expand_all();
        }
        self.assistance_mode
    }
}

impl TourObserver for PresentationState {
    fn on_tour_dismissed(&mut self) {
        self.assistance_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_one_panel() {
        let mut state = PresentationState::new();
        assert_eq!(state.expanded_count(), 3);
        state.toggle(Panel::Chat);
        assert!(state.collapsed.chat);
        assert!(!state.collapsed.references);
        assert_eq!(state.expanded_count(), 2);
        state.toggle(Panel::Chat);
        assert_eq!(state.expanded_count(), 3);
    }

    #[test]
    fn assistance_mode_expands_everything() {
        let mut state = PresentationState::new();
        state.toggle(Panel::References);
        state.toggle(Panel::Database);
        assert!(state.toggle_assistance());
        assert_eq!(state.expanded_count(), 3);
        assert!(!state.toggle_assistance());
    }

    #[test]
    fn dismissing_the_tour_clears_assistance_mode() {
        let mut state = PresentationState::new();
        state.toggle_assistance();
        state.on_tour_dismissed();
        assert!(!state.assistance_mode);
    }

    #[test]
    fn panel_titles_are_localised() {
        assert_eq!(Panel::References.title("es"), "Referencias");
        assert_eq!(Panel::Database.title("en"), "Database");
    }
}
