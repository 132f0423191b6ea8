//! Stdin input source.
//!
//! Each line is either an `InputEvent` (`{"type":"Fire"}`) or a raw key edge
//! from a browser-style host (`{"key":"Space","pressed":true}`). Key edges are
//! translated here; auto-repeat never turns into extra shots.

use std::io::BufRead;
use std::sync::mpsc;

use serde::Deserialize;

use invaders_core::commands::InputEvent;

use crate::game_loop::GameLoopCommand;

/// A raw key transition as reported by a windowing host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyEdge {
    pub key: String,
    pub pressed: bool,
    /// Set by hosts for auto-repeated key-down notifications.
    #[serde(default)]
    pub repeat: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum InputLine {
    Event(InputEvent),
    Key(KeyEdge),
}

/// Map a key edge to a simulation event. Unbound keys yield nothing.
pub fn translate_key(edge: &KeyEdge) -> Option<InputEvent> {
    let fresh_press = edge.pressed && !edge.repeat;
    match edge.key.as_str() {
        "ArrowLeft" => Some(if edge.pressed {
            InputEvent::LeftDown
        } else {
            InputEvent::LeftUp
        }),
        "ArrowRight" => Some(if edge.pressed {
            InputEvent::RightDown
        } else {
            InputEvent::RightUp
        }),
        "Space" | " " if fresh_press => Some(InputEvent::Fire),
        "Enter" if fresh_press => Some(InputEvent::Reset),
        _ => None,
    }
}

/// Parse one line of input. Blank lines and unbound keys yield `None`.
pub fn parse_line(line: &str) -> Result<Option<InputEvent>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(match serde_json::from_str::<InputLine>(line)? {
        InputLine::Event(event) => Some(event),
        InputLine::Key(edge) => translate_key(&edge),
    })
}

/// Forward events from `reader` until it ends or the game loop goes away.
/// Malformed lines are logged and skipped.
pub fn forward_lines(reader: impl BufRead, tx: &mpsc::Sender<GameLoopCommand>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("input read failed: {e}");
                break;
            }
        };
        match parse_line(&line) {
            Ok(Some(event)) => {
                if tx.send(GameLoopCommand::Input(event)).is_err() {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("skipping malformed input {line:?}: {e}"),
        }
    }
    log::debug!("input closed");
}

/// Spawn a thread that reads stdin into the game loop. The sender is dropped
/// when stdin closes.
pub fn spawn_stdin_reader(tx: mpsc::Sender<GameLoopCommand>) {
    std::thread::Builder::new()
        .name("invaders-input".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            forward_lines(stdin.lock(), &tx);
        })
        .expect("Failed to spawn input thread");
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::types::TargetId;

    fn key(key: &str, pressed: bool, repeat: bool) -> KeyEdge {
        KeyEdge {
            key: key.into(),
            pressed,
            repeat,
        }
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(translate_key(&key("ArrowLeft", true, false)), Some(InputEvent::LeftDown));
        assert_eq!(translate_key(&key("ArrowLeft", false, false)), Some(InputEvent::LeftUp));
        assert_eq!(translate_key(&key("ArrowRight", true, true)), Some(InputEvent::RightDown));
        assert_eq!(translate_key(&key("ArrowRight", false, false)), Some(InputEvent::RightUp));
        assert_eq!(translate_key(&key("Space", true, false)), Some(InputEvent::Fire));
        assert_eq!(translate_key(&key("Enter", true, false)), Some(InputEvent::Reset));
        assert_eq!(translate_key(&key("KeyQ", true, false)), None);
    }

    #[test]
    fn test_held_fire_does_not_stream() {
        assert_eq!(translate_key(&key("Space", true, true)), None);
        assert_eq!(translate_key(&key("Space", false, false)), None);
    }

    #[test]
    fn test_parse_line_formats() {
        assert_eq!(parse_line(r#"{"type":"Fire"}"#).unwrap(), Some(InputEvent::Fire));
        assert_eq!(
            parse_line(r#"{"type":"PointerHit","target":"2-1"}"#).unwrap(),
            Some(InputEvent::PointerHit {
                target: TargetId::new(2, 1)
            })
        );
        assert_eq!(
            parse_line(r#"{"key":"ArrowLeft","pressed":true}"#).unwrap(),
            Some(InputEvent::LeftDown)
        );
        assert_eq!(parse_line("   ").unwrap(), None);
        assert!(parse_line("fire!").is_err());
    }

    #[test]
    fn test_forward_skips_bad_lines() {
        let input = "{\"type\":\"Fire\"}\nnot json\n\n{\"key\":\"Space\",\"pressed\":true,\"repeat\":true}\n{\"type\":\"Reset\"}\n";
        let (tx, rx) = mpsc::channel();
        forward_lines(input.as_bytes(), &tx);
        drop(tx);

        let events: Vec<InputEvent> = rx
            .iter()
            .map(|cmd| match cmd {
                GameLoopCommand::Input(event) => event,
                GameLoopCommand::Shutdown => panic!("unexpected shutdown"),
            })
            .collect();
        assert_eq!(events, vec![InputEvent::Fire, InputEvent::Reset]);
    }
}
