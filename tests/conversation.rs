use insight::conversation::{ChatStep, ConversationEngine, Sender};
use insight::error::RejectedInput;

fn run(engine: &mut ConversationEngine, inputs: &[&str]) -> usize {
    inputs
        .iter()
        .filter_map(|input| engine.submit(input).ok())
        .filter(|turn| turn.record.is_some())
        .count()
}

fn snapshot(engine: &ConversationEngine) -> String {
    serde_json::to_string(&(engine.state(), engine.messages())).unwrap()
}

#[test]
fn five_inputs_from_greeting_reach_waiting_restart() {
    let input_sets = [
        ["Ana", "1:1", "Buen trabajo", "quizás", "tal vez"],
        ["bob@example.com", "Team meeting", "Clear updates", "  ", "maybe"],
        ["  Pedro  ", "Proyecto X", "Sigue así!", "sí?", "nope"],
    ];
    for inputs in input_sets {
        let mut engine = ConversationEngine::new("es");
        run(&mut engine, &inputs);

        let state = engine.state();
        assert_eq!(state.step, ChatStep::WaitingRestart, "inputs: {inputs:?}");
        assert_eq!(state.collected.recipient.as_deref(), Some(inputs[0]));
        assert_eq!(state.collected.context.as_deref(), Some(inputs[1]));
        assert_eq!(state.collected.feedback_text.as_deref(), Some(inputs[2]));
    }
}

#[test]
fn blank_input_changes_nothing_at_any_step() {
    let prefixes: [&[&str]; 6] = [
        &[],
        &["Ana"],
        &["Ana", "Demo"],
        &["Ana", "Demo", "Bien"],
        &["Ana", "Demo", "Bien", "otra"],
        &["Ana", "Demo", "Bien", "no"],
    ];
    for prefix in prefixes {
        let mut engine = ConversationEngine::new("es");
        run(&mut engine, prefix);
        let before = snapshot(&engine);
        for blank in ["", " ", "\t\n"] {
            assert_eq!(engine.submit(blank), Err(RejectedInput::Blank));
        }
        assert_eq!(snapshot(&engine), before, "after {prefix:?}");
    }
}

#[test]
fn one_record_per_cycle_despite_reprompts() {
    let mut engine = ConversationEngine::new("en");
    let records = run(
        &mut engine,
        &["Ana", "Demo", "Nice", "hmm", "what?", "later", "y", "Luis", "Retro", "Solid", "n"],
    );
    assert_eq!(records, 2);
    assert_eq!(engine.step(), ChatStep::Completed);
}

#[test]
fn restart_answers() {
    for yes in ["sí", "si", "SÍ", " yes ", "Y"] {
        let mut engine = ConversationEngine::new("es");
        run(&mut engine, &["Ana", "Demo", "Bien"]);
        engine.submit(yes).unwrap();
        assert_eq!(engine.step(), ChatStep::AskingName, "answer {yes:?}");
        assert!(engine.state().collected.is_empty());
    }

    for no in ["no", "NO", " n "] {
        let mut engine = ConversationEngine::new("es");
        run(&mut engine, &["Ana", "Demo", "Bien"]);
        engine.submit(no).unwrap();
        assert_eq!(engine.step(), ChatStep::Completed, "answer {no:?}");
        assert_eq!(engine.submit("hola"), Err(RejectedInput::Closed));
    }

    let mut engine = ConversationEngine::new("es");
    run(&mut engine, &["Ana", "Demo", "Bien"]);
    let collected = engine.state().collected.clone();
    for other in ["sí!", "yes please", "nop", "0"] {
        engine.submit(other).unwrap();
        assert_eq!(engine.step(), ChatStep::WaitingRestart);
        assert_eq!(engine.state().collected, collected);
    }
}

#[test]
fn full_cycle_ending_with_no() {
    let mut engine = ConversationEngine::new("en");
    let mut records = Vec::new();
    for input in ["Ana López", "Sprint review", "Great collaboration this sprint", "no"] {
        let turn = engine.submit(input).unwrap();
        records.extend(turn.record);
    }

    assert_eq!(engine.step(), ChatStep::Completed);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.recipient_name, "Ana López");
    assert_eq!(record.context, "Sprint review");
    assert_eq!(record.feedback_text, "Great collaboration this sprint");

    // Greeting plus one assistant reply per input, each answering a user line.
    let messages = engine.messages();
    let assistant = messages.iter().filter(|m| m.sender == Sender::Assistant).count();
    let user = messages.iter().filter(|m| m.sender == Sender::User).count();
    assert_eq!(assistant, 5);
    assert_eq!(user, 4);
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn full_cycle_ending_with_si_restarts() {
    let mut engine = ConversationEngine::new("es");
    let records = run(
        &mut engine,
        &["Ana López", "Sprint review", "Great collaboration this sprint", "sí"],
    );
    assert_eq!(engine.step(), ChatStep::AskingName);
    assert!(engine.state().collected.is_empty());
    assert_eq!(records, 1);
}

#[test]
fn projection_follows_the_step() {
    let mut engine = ConversationEngine::new("en");
    assert_eq!(engine.projection().title, "Feedback Generation");

    engine.submit("Ana").unwrap();
    assert_eq!(engine.projection().field("Recipient"), Some("Ana"));

    engine.submit("Demo").unwrap();
    engine.submit(&"x".repeat(80)).unwrap();
    let preview = engine.projection().field("Feedback").unwrap();
    assert_eq!(preview, format!("{}...", "x".repeat(50)));
}
