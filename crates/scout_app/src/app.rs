use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use scout_core::{from_query_string, update, AppState, Msg};
use scout_engine::{ClientSettings, EngineHandle};
use scout_logging::scout_info;

use crate::commands::{parse_command, Command, HELP_TEXT};
use crate::effects::EffectRunner;
use crate::render;
use crate::url_store::{InMemoryParamStore, ParamStore};

const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(initial_query: &str) -> anyhow::Result<()> {
    let store = InMemoryParamStore::new(initial_query);
    let engine = EngineHandle::new(ClientSettings::default(), DEBOUNCE_DELAY)
        .context("starting search engine")?;
    let mut runner = EffectRunner::new(engine, Box::new(store.clone()));

    let mut state = AppState::new();

    // Inbound URL sync runs exactly once, before any write-back.
    let deep_link = store.read();
    scout_info!("Loading params from deep link: {:?}", deep_link);
    let (next, effects) = update(state, Msg::UrlParamsLoaded(from_query_string(&deep_link)));
    state = next;
    runner.run(effects);

    let stdin_rx = spawn_stdin_reader();

    loop {
        let mut received = false;

        while let Some(msg) = runner.poll() {
            let (next, effects) = update(state, msg);
            state = next;
            runner.run(effects);
            received = true;
        }

        match stdin_rx.try_recv() {
            Ok(line) => match parse_command(&line) {
                Command::Update(msg) => {
                    let (next, effects) = update(state, msg);
                    state = next;
                    runner.run(effects);
                }
                Command::ShowUrl => {
                    let query = runner.share_query();
                    if query.is_empty() {
                        println!("(all defaults, nothing to share)");
                    } else {
                        println!("?{query}");
                    }
                }
                Command::Help => println!("{HELP_TEXT}"),
                Command::Quit => break,
            },
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        if state.consume_dirty() {
            render::render(&state.view());
        } else if !received {
            thread::sleep(POLL_INTERVAL);
        }
    }

    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}
