//! Line-mode conversation: the same session semantics as the TUI, one line
//! of stdin per submission.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep_until};

use crate::process::{Clock, ManualClock, PROGRESS_SCHEDULE};
use crate::session::{Session, SessionEvent, SessionOptions};
use crate::ui::style;

use super::report;

/// Read stdin until EOF or until the conversation is over and every
/// process simulation has finished.
pub async fn run_interactive(options: SessionOptions) -> Result<()> {
    let locale = options.locale.clone();
    let mut session = Session::with_system_clock(options);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        for event in session.tick() {
            print!("{}", render_event(&event, &session, &locale));
        }

        let wakeup = session.next_wakeup();
        if is_finished(&session) || (!stdin_open && wakeup.is_none()) {
            break;
        }
        let deadline = wakeup.map_or_else(Instant::now, Instant::from_std);

        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line.context("failed to read stdin")? {
                    Some(line) => {
                        if let Err(rejected) = session.send(&line) {
                            tracing::debug!(%rejected, "line ignored");
                        }
                    }
                    None => stdin_open = false,
                }
            }
            () = sleep_until(deadline), if wakeup.is_some() => {}
        }
    }

    session.close();
    Ok(())
}

/// Run `inputs` without latency and report the outcome, as text or as a
/// JSON snapshot. Time is simulated, so the process board shows where every
/// schedule ends.
pub fn run_script(options: SessionOptions, inputs: &[String], json: bool) -> Result<String> {
    let locale = options.locale.clone();
    let clock = ManualClock::new();
    let mut session = Session::new(options, clock.clone());

    for input in inputs {
        if let Err(rejected) = session.submit_now(input) {
            tracing::debug!(%rejected, "script line ignored");
        }
    }

    if let Some(longest) = PROGRESS_SCHEDULE.iter().map(|change| change.delay).max() {
        clock.advance(longest);
    }
    session.tick();

    if json {
        let mut out = serde_json::to_string_pretty(&session.snapshot())
            .context("failed to serialize session snapshot")?;
        out.push('\n');
        return Ok(out);
    }

    let engine = session.engine();
    let mut out = report::render_transcript(engine.messages(), &locale);
    out.push('\n');
    out.push_str(&report::render_projection(
        engine.step(),
        engine.projection(),
        &locale,
    ));
    out.push('\n');
    out.push_str(&report::render_records(session.records().list(), &locale));
    out.push('\n');
    out.push_str(&report::render_board(session.board(), &locale));
    Ok(out)
}

fn is_finished<C: Clock>(session: &Session<C>) -> bool {
    !session.engine().accepts_input() && !session.is_replying() && session.simulator().is_idle()
}

fn render_event<C: Clock>(event: &SessionEvent, session: &Session<C>, locale: &str) -> String {
    match event {
        SessionEvent::Greeted(message) => prompted(&report::render_message(message, locale), session),
        SessionEvent::Replied(turn) => prompted(&report::render_message(&turn.reply, locale), session),
        SessionEvent::RecordStored(id) => session
            .records()
            .get(*id)
            .map(|record| {
                format!(
                    "{} {}\n",
                    style::dim(t!("report.stored", locale = locale)),
                    report::render_record(record)
                )
            })
            .unwrap_or_default(),
        SessionEvent::ProcessUpdated(due) => session
            .board()
            .step(due.update.step)
            .map(|step| {
                format!(
                    "{} {} [{}] {}\n",
                    style::dim("·"),
                    step.name,
                    style::status(step.status, step.status.label(locale)),
                    style::dim(&step.context)
                )
            })
            .unwrap_or_default(),
    }
}

/// An assistant line followed by the hint for what to type next.
fn prompted<C: Clock>(line: &str, session: &Session<C>) -> String {
    format!("{line}\n{}\n", style::dim(format!("› {}", session.engine().placeholder())))
}
