//! Plain-text and JSON rendering of runtime events.

use anyhow::Result;
use arena_core::{Fighter, MatchSnapshot, Winner};
use arena_runtime::{Event, RoundEvent};

/// Renders one event as a line of text, or `None` for events the text view
/// skips (presentation cues).
pub fn text_line(event: &Event) -> Option<String> {
    match event {
        Event::Narrative(line) => Some(line.text.clone()),
        Event::Cue(_) => None,
        Event::Round(round) => Some(round_line(round)),
    }
}

fn round_line(event: &RoundEvent) -> String {
    let summary = &event.summary;
    let result = match summary.winner {
        Winner::Left => format!("{} wins", summary.final_left.name),
        Winner::Right => format!("{} wins", summary.final_right.name),
        Winner::Neither => "Draw".to_owned(),
    };

    format!(
        "== Round {} ({} ticks): {} | {} vs {} ==",
        summary.round,
        summary.frame_count,
        result,
        event.next_left,
        event.next_right,
    )
}

pub fn json_line(event: &Event) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

/// Closing status block for text output.
pub fn final_status(snapshot: &MatchSnapshot) -> String {
    let mut out = format!(
        "Round {} after {} ticks\n  {}\n  {}",
        snapshot.round,
        snapshot.frame_count,
        fighter_status(&snapshot.left),
        fighter_status(&snapshot.right),
    );
    if let Some(streak) = snapshot.streak {
        out.push_str(&format!(
            "\n  {} on a {}-round streak",
            snapshot.fighter(streak.side).name,
            streak.wins
        ));
    }
    out
}

fn fighter_status(fighter: &Fighter) -> String {
    format!(
        "{:<10} {:>3}/{:<3} hp  timer {:>3}  {}",
        fighter.name, fighter.health, fighter.max_health, fighter.timer, fighter.state
    )
}
