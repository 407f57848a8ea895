//! Display-only state, kept apart from the conversation core.

pub mod knowledge;
pub mod panels;
pub mod tour;

pub use knowledge::{KnowledgeSource, VISIBLE_SOURCES, knowledge_sources};
pub use panels::{CollapsedSections, Panel, PresentationState};
pub use tour::{Align, Anchor, Side, TOUR_STEPS, Tour, TourObserver, TourStep};
