use insight::presentation::{Anchor, Panel, PresentationState, TOUR_STEPS, Tour};

#[test]
fn tour_descriptors_cover_every_panel_in_order() {
    let anchors: Vec<Anchor> = TOUR_STEPS.iter().map(|s| s.anchor).collect();
    assert_eq!(
        anchors,
        [
            Anchor::HeaderActions,
            Anchor::SectionReferences,
            Anchor::ReferenceContext,
            Anchor::ReferenceKnowledge,
            Anchor::ChatMessages,
            Anchor::ChatInput,
            Anchor::DatabaseBlock,
            Anchor::DatabaseProcesses,
        ]
    );
    for step in &TOUR_STEPS {
        assert!(!step.title("es").is_empty());
        assert_ne!(step.body("en"), step.body("es"));
    }
}

#[test]
fn assistance_round_trip_through_the_tour() {
    let mut presentation = PresentationState::new();
    presentation.toggle(Panel::Chat);
    presentation.toggle(Panel::Database);
    assert_eq!(presentation.expanded_count(), 1);

    let mut tour = Tour::default();
    assert!(presentation.toggle_assistance());
    tour.start();
    assert_eq!(presentation.expanded_count(), 3);

    while tour.is_active() {
        tour.next(&mut presentation);
    }
    assert!(!presentation.assistance_mode);
    // Panel layout survives the tour.
    assert_eq!(presentation.expanded_count(), 3);
}

#[test]
fn presentation_is_independent_of_the_conversation() {
    let mut engine = insight::ConversationEngine::new("es");
    let mut presentation = PresentationState::new();
    engine.submit("Ana").unwrap();
    let state = engine.state().clone();
    presentation.toggle(Panel::References);
    presentation.toggle_assistance();
    assert_eq!(engine.state(), &state);
}
