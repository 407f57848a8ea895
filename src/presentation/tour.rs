use serde::Serialize;
use strum::{Display, EnumIter};

/// UI element a tour step points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Anchor {
    HeaderActions,
    SectionReferences,
    ReferenceContext,
    ReferenceKnowledge,
    ChatMessages,
    ChatInput,
    DatabaseBlock,
    DatabaseProcesses,
}

/// Side of the anchor the popover sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
}

/// Static descriptor handed to the tour overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TourStep {
    pub anchor: Anchor,
    pub side: Side,
    pub align: Align,
}

impl TourStep {
    const fn new(anchor: Anchor, side: Side, align: Align) -> Self {
        Self {
            anchor,
            side,
            align,
        }
    }

    pub fn title(&self, locale: &str) -> String {
        let key = format!("tour.{}.title", self.anchor);
        t!(&key, locale = locale).into_owned()
    }

    pub fn body(&self, locale: &str) -> String {
        let key = format!("tour.{}.body", self.anchor);
        t!(&key, locale = locale).into_owned()
    }
}

pub static TOUR_STEPS: [TourStep; 8] = [
    TourStep::new(Anchor::HeaderActions, Side::Bottom, Align::Center),
    TourStep::new(Anchor::SectionReferences, Side::Right, Align::Start),
    TourStep::new(Anchor::ReferenceContext, Side::Right, Align::Start),
    TourStep::new(Anchor::ReferenceKnowledge, Side::Right, Align::Center),
    TourStep::new(Anchor::ChatMessages, Side::Left, Align::Center),
    TourStep::new(Anchor::ChatInput, Side::Top, Align::Center),
    TourStep::new(Anchor::DatabaseBlock, Side::Left, Align::Start),
    TourStep::new(Anchor::DatabaseProcesses, Side::Left, Align::Center),
];

/// Lifecycle hook of the tour. Only dismissal is reported.
pub trait TourObserver {
    fn on_tour_dismissed(&mut self);
}

/// Walks a fixed list of steps. Leaving the last step with `next`, or
/// closing it early, dismisses the tour.
#[derive(Debug, Clone)]
pub struct Tour {
    steps: &'static [TourStep],
    index: usize,
    active: bool,
}

impl Default for Tour {
    fn default() -> Self {
        Self::new(&TOUR_STEPS)
    }
}

impl Tour {
    pub fn new(steps: &'static [TourStep]) -> Self {
        Self {
            steps,
            index: 0,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.index = 0;
        self.active = !self.steps.is_empty();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> Option<&TourStep> {
        self.active.then(|| self.steps.get(self.index)).flatten()
    }

    /// 1-based position and total, for the "3 of 8" indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.steps.len())
    }

    pub fn next(&mut self, observer: &mut impl TourObserver) {
        if !self.active {
            return;
        }
        if self.index + 1 >= self.steps.len() {
            self.dismiss(observer);
        } else {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.active {
            self.index = self.index.saturating_sub(1);
        }
    }

    pub fn dismiss(&mut self, observer: &mut impl TourObserver) {
        if !self.active {
            return;
        }
        self.active = false;
        self.index = 0;
        tracing::debug!("tour dismissed");
        observer.on_tour_dismissed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Counter(usize);

    impl TourObserver for Counter {
        fn on_tour_dismissed(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn steps_cover_each_anchor_once() {
        let anchors: HashSet<_> = TOUR_STEPS.iter().map(|s| s.anchor).collect();
        assert_eq!(anchors.len(), TOUR_STEPS.len());
        assert_eq!(TOUR_STEPS[0].anchor, Anchor::HeaderActions);
        assert_eq!(TOUR_STEPS[7].anchor, Anchor::DatabaseProcesses);
    }

    #[test]
    fn every_step_has_catalog_text() {
        for step in &TOUR_STEPS {
            for locale in ["es", "en"] {
                assert!(!step.title(locale).starts_with("tour."), "{}", step.anchor);
                assert!(!step.body(locale).is_empty());
            }
        }
    }

    #[test]
    fn walking_past_the_end_dismisses_once() {
        let mut tour = Tour::default();
        let mut observer = Counter::default();
        tour.start();
        for _ in 0..TOUR_STEPS.len() {
            assert!(tour.is_active());
            tour.next(&mut observer);
        }
        assert!(!tour.is_active());
        assert_eq!(observer.0, 1);
        tour.next(&mut observer);
        tour.dismiss(&mut observer);
        assert_eq!(observer.0, 1);
    }

    #[test]
    fn previous_stops_at_first_step() {
        let mut tour = Tour::default();
        let mut observer = Counter::default();
        tour.start();
        tour.next(&mut observer);
        assert_eq!(tour.progress(), (2, 8));
        tour.previous();
        tour.previous();
        assert_eq!(tour.current().unwrap().anchor, Anchor::HeaderActions);
    }

    #[test]
    fn inactive_tour_has_no_current_step() {
        let tour = Tour::default();
        assert!(tour.current().is_none());
    }
}
