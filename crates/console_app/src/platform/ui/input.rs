use console_core::{AppViewModel, Field, Key, Msg};

use super::constants::CRAWL_SUBMIT_LINE;

/// What one line typed at the terminal asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

/// Interprets a line against the current view: a focused field consumes the
/// line as its text, otherwise the line is a command.
pub fn parse_line(line: &str, view: &AppViewModel) -> Command {
    if view.focus.is_some() && is_escape(line.trim()) {
        return Command::Dispatch(vec![Msg::KeyPressed(Key::Escape), Msg::FocusChanged(None)]);
    }

    match view.focus {
        Some(Field::SearchInput) => Command::Dispatch(vec![
            Msg::SearchInputChanged(line.to_string()),
            Msg::SearchSubmitted,
            Msg::FocusChanged(None),
        ]),
        Some(Field::DomainInput) => Command::Dispatch(vec![
            Msg::DomainInputChanged(line.to_string()),
            Msg::DomainSubmitted,
            Msg::FocusChanged(None),
        ]),
        Some(Field::CrawlInput) if line.trim() == CRAWL_SUBMIT_LINE => {
            Command::Dispatch(vec![Msg::CrawlSubmitted, Msg::FocusChanged(None)])
        }
        Some(Field::CrawlInput) => {
            let text = if view.crawl_input.is_empty() {
                line.to_string()
            } else {
                format!("{}\n{line}", view.crawl_input)
            };
            Command::Dispatch(vec![Msg::CrawlInputChanged(text)])
        }
        None => parse_command(line),
    }
}

fn is_escape(word: &str) -> bool {
    word.eq_ignore_ascii_case("esc") || word.eq_ignore_ascii_case("escape")
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msgs = match word.to_ascii_lowercase().as_str() {
        "" => Vec::new(),
        "/" => vec![Msg::KeyPressed(Key::Slash)],
        "esc" | "escape" => vec![Msg::KeyPressed(Key::Escape)],
        "search" | "s" if rest.is_empty() => vec![Msg::FocusChanged(Some(Field::SearchInput))],
        "search" | "s" => vec![
            Msg::SearchInputChanged(rest.to_string()),
            Msg::SearchSubmitted,
        ],
        "open" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => vec![Msg::ResultClicked {
                index: n - 1,
                on_link: false,
            }],
            _ => return Command::Unknown(line.to_string()),
        },
        "admin" => vec![Msg::AdminOpenClicked],
        "close" => vec![Msg::AdminCloseClicked],
        "domain" if rest.is_empty() => vec![Msg::FocusChanged(Some(Field::DomainInput))],
        "domain" => vec![
            Msg::DomainInputChanged(rest.to_string()),
            Msg::DomainSubmitted,
        ],
        // Kept text from a failed crawl stays; new lines append to it.
        "crawl" if rest.is_empty() => vec![Msg::FocusChanged(Some(Field::CrawlInput))],
        "crawl-clear" => vec![Msg::CrawlInputChanged(String::new())],
        "crawl" => vec![
            Msg::CrawlInputChanged(rest.split_whitespace().collect::<Vec<_>>().join("\n")),
            Msg::CrawlSubmitted,
        ],
        "help" | "?" => return Command::Help,
        "quit" | "exit" | "q" => return Command::Quit,
        _ => return Command::Unknown(line.to_string()),
    };
    Command::Dispatch(msgs)
}
