//! Line commands accepted by the terminal driver.
//!
//! Each input line is one gesture. Most map straight onto an [`Event`];
//! `state` is handled by the driver itself.
//!
//! | Command          | Event                         |
//! |------------------|-------------------------------|
//! | `search [text]`  | `OpenSearch` (+ `TypeText`)   |
//! | `type <text>`    | `TypeText`                    |
//! | `up` / `down`    | `HighlightPrevious` / `Next`  |
//! | `submit`         | `SubmitSearch`                |
//! | `esc`            | `Escape`                      |
//! | `click`          | `OutsideClick`                |
//! | `open <id>`      | `SelectContent`               |
//! | `close`          | `CloseModal`                  |
//! | `add <id>`       | `AddToList`                   |
//! | `remove <id>`    | `RemoveFromList`              |
//! | `toggle <id>`    | `ToggleList`                  |
//! | `scroll <y>`     | `PageScrolled`                |
//! | `mute`           | `ToggleMute`                  |
//! | `go <route>`     | `Navigate`                    |
//! | `hover <id>`     | `PointerEnter`                |
//! | `leave`          | `PointerLeave`                |
//! | `left <row>`     | `ScrollRowLeft`               |
//! | `right <row>`    | `ScrollRowRight`              |
//! | `width <n>`      | `Resize`                      |
//! | `quit`           | `Quit`                        |

use super::handler::Event;
use super::modes::Route;
use crate::domain::{ContentId, MarqueeError, Result};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// One or more events to feed to the handler, in order.
    Events(Vec<Event>),
    /// Print the store state as JSON.
    PrintState,
}

/// Parses one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns [`MarqueeError::Config`] for unknown commands or missing and
/// malformed arguments.
///
/// # Example
///
/// ```rust
/// use marquee::app::command::{parse_command, Command};
/// use marquee::app::Event;
///
/// let cmd = parse_command("scroll 120").unwrap();
/// assert_eq!(cmd, Some(Command::Events(vec![Event::PageScrolled { y: 120.0 }])));
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let single = |event: Event| -> Result<Option<Command>> { Ok(Some(Command::Events(vec![event]))) };

    match name.to_lowercase().as_str() {
        "search" if arg.is_empty() => single(Event::OpenSearch),
        "search" => Ok(Some(Command::Events(vec![
            Event::OpenSearch,
            Event::TypeText(arg.to_string()),
        ]))),
        "type" => single(Event::TypeText(arg.to_string())),
        "up" => single(Event::HighlightPrevious),
        "down" => single(Event::HighlightNext),
        "submit" | "enter" => single(Event::SubmitSearch),
        "esc" | "escape" => single(Event::Escape),
        "click" => single(Event::OutsideClick),
        "open" => single(Event::SelectContent(content_id(name, arg)?)),
        "close" => single(Event::CloseModal),
        "add" => single(Event::AddToList(content_id(name, arg)?)),
        "remove" => single(Event::RemoveFromList(content_id(name, arg)?)),
        "toggle" => single(Event::ToggleList(content_id(name, arg)?)),
        "scroll" => {
            let y = arg
                .parse::<f64>()
                .ok()
                .filter(|y| y.is_finite())
                .ok_or_else(|| MarqueeError::Config(format!("scroll: invalid offset '{arg}'")))?;
            single(Event::PageScrolled { y })
        }
        "mute" => single(Event::ToggleMute),
        "go" => single(Event::Navigate(arg.parse::<Route>()?)),
        "hover" => single(Event::PointerEnter(content_id(name, arg)?)),
        "leave" => single(Event::PointerLeave),
        "left" => single(Event::ScrollRowLeft(required(name, arg)?.to_string())),
        "right" => single(Event::ScrollRowRight(required(name, arg)?.to_string())),
        "width" => {
            let width = arg
                .parse::<usize>()
                .ok()
                .filter(|w| *w > 0)
                .ok_or_else(|| MarqueeError::Config(format!("width: invalid value '{arg}'")))?;
            single(Event::Resize { width })
        }
        "state" => Ok(Some(Command::PrintState)),
        "quit" | "q" | "exit" => single(Event::Quit),
        other => Err(MarqueeError::Config(format!("unknown command: {other}"))),
    }
}

fn required<'a>(name: &str, arg: &'a str) -> Result<&'a str> {
    if arg.is_empty() {
        return Err(MarqueeError::Config(format!("{name}: missing argument")));
    }
    Ok(arg)
}

fn content_id(name: &str, arg: &str) -> Result<ContentId> {
    required(name, arg).map(ContentId::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(line: &str) -> Vec<Event> {
        match parse_command(line).unwrap() {
            Some(Command::Events(events)) => events,
            other => panic!("expected events, got {other:?}"),
        }
    }

    #[test]
    fn search_with_text_opens_then_types() {
        assert_eq!(
            events("search  star wars "),
            vec![Event::OpenSearch, Event::TypeText("star wars".into())]
        );
        assert_eq!(events("search"), vec![Event::OpenSearch]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn ids_and_routes() {
        assert_eq!(events("open sf1"), vec![Event::SelectContent("sf1".into())]);
        assert_eq!(events("GO my-list"), vec![Event::Navigate(Route::MyList)]);
        assert_eq!(events("right trending"), vec![Event::ScrollRowRight("trending".into())]);
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(parse_command("open").is_err());
        assert!(parse_command("scroll far").is_err());
        assert!(parse_command("scroll NaN").is_err());
        assert!(parse_command("width 0").is_err());
        assert!(parse_command("go nowhere").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn state_is_a_driver_command() {
        assert_eq!(parse_command("state").unwrap(), Some(Command::PrintState));
    }
}
