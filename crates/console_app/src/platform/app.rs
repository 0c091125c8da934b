use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use console_client::ReqwestSearchApi;
use console_core::markup::render_page;
use console_core::{update, AppState, AppViewModel, Msg};
use console_logging::{console_error, console_info, console_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::snapshot::SnapshotWriter;
use super::ui;
use super::ui::input::Command;

/// Everything the console loop reacts to, funnelled through one channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A line typed at the terminal.
    Input(String),
    InputClosed,
    Msg(Msg),
    /// A result should be opened in a new browsing context.
    OpenUrl(String),
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log_destination);
    console_info!("Search console starting; API at {}", config.api_base_url);
    for hint in ui::constants::SHORTCUT_HINTS {
        console_info!("Keyboard shortcut: {}", hint);
    }

    let api = ReqwestSearchApi::new(config.api_settings())?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(Arc::new(api), event_tx.clone());
    let snapshot = config.html_snapshot.clone().map(SnapshotWriter::new);

    spawn_stdin_reader(event_tx.clone());

    let mut console = Console::new(runner, snapshot, io::stdout());
    println!("{}", ui::constants::HELP_TEXT);
    console.dispatch_msg(Msg::Started);
    console.render_now();

    for event in event_rx {
        if !console.handle_event(event) {
            break;
        }
    }

    console_info!("Search console exiting");
    Ok(())
}

fn spawn_stdin_reader(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        read_input(io::stdin().lock(), &events);
        let _ = events.send(AppEvent::InputClosed);
    });
}

/// Forwards lines until EOF or a read error. Bytes that are not UTF-8 are
/// replaced rather than ending the session.
fn read_input<R: BufRead>(mut reader: R, events: &mpsc::Sender<AppEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => {
                let text = String::from_utf8_lossy(&buf);
                let line = text.trim_end_matches(['\n', '\r']).to_string();
                if events.send(AppEvent::Input(line)).is_err() {
                    return;
                }
            }
            Err(err) => {
                console_warn!("Failed to read terminal input: {}", err);
                return;
            }
        }
    }
}

struct Console<W: Write> {
    state: AppState,
    runner: EffectRunner,
    snapshot: Option<SnapshotWriter>,
    out: W,
}

impl<W: Write> Console<W> {
    fn new(runner: EffectRunner, snapshot: Option<SnapshotWriter>, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            snapshot,
            out,
        }
    }

    /// Returns false when the console should shut down.
    fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(line) => {
                let view = self.state.view();
                match ui::input::parse_line(&line, &view) {
                    Command::Dispatch(msgs) => {
                        for msg in msgs {
                            self.dispatch_msg(msg);
                        }
                        // Always re-prompt after a typed line, even when nothing changed.
                        self.render_now();
                    }
                    Command::Help => {
                        self.write_lines(&[ui::constants::HELP_TEXT.to_string()]);
                        self.render_now();
                    }
                    Command::Quit => return false,
                    Command::Unknown(text) => {
                        self.write_lines(&[format!("Unknown command: {text} (try \"help\")")]);
                        self.render_now();
                    }
                }
            }
            AppEvent::InputClosed => return false,
            AppEvent::Msg(msg) => {
                self.dispatch_msg(msg);
                if self.state.consume_dirty() {
                    self.render_now();
                }
            }
            AppEvent::OpenUrl(url) => {
                self.write_lines(&[format!("Open in browser: {url}")]);
            }
        }
        true
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn render_now(&mut self) {
        self.state.consume_dirty();
        let view = self.state.view();
        self.write_lines(&ui::render::render(&view));
        self.write_prompt(&view);
        self.write_snapshot(&view);
    }

    fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(err) = writeln!(self.out, "{line}") {
                console_error!("Failed to write to terminal: {}", err);
                return;
            }
        }
    }

    fn write_prompt(&mut self, view: &AppViewModel) {
        let _ = write!(self.out, "{}", ui::render::prompt(view));
        let _ = self.out.flush();
    }

    fn write_snapshot(&self, view: &AppViewModel) {
        if let Some(writer) = &self.snapshot {
            if let Err(err) = writer.write(&render_page(view)) {
                console_error!("Failed to write HTML snapshot: {}", err);
            }
        }
    }
}
