use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod store;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use hn_stories_config::{AppConfig, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use middleware::{
    hacker_news_middleware::HackerNewsMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, search_middleware::SearchMiddleware, Middleware,
};
use state::AppState;
use store::Store;

fn main() -> io::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting hn-stories, logging to {:?}", log_file);

    let config = AppConfig::load();

    let preferences: Box<dyn PreferenceStore> = match FilePreferenceStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Preferences unavailable, search term will not persist: {:#}", e);
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let hacker_news = HackerNewsMiddleware::from_config(&config).map_err(io::Error::other)?;

    // Middleware in order (they execute in this order)
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(SearchMiddleware::new(preferences, &config)),
        Box::new(hacker_news),
    ];

    let initial_state = AppState::new(config);
    let shared_state: SharedState = Arc::new(RwLock::new(initial_state.clone()));

    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    let mut store = Store::new(initial_state);

    // Publish every new state to the middleware snapshot
    let snapshot = Arc::clone(&shared_state);
    store.subscribe(Box::new(move |state: &AppState| match snapshot.write() {
        Ok(mut shared) => *shared = state.clone(),
        Err(e) => log::error!("Failed to publish state: {}", e),
    }));

    // Redraw only after a transition (or a resize)
    let dirty = Rc::new(Cell::new(true));
    let needs_redraw = Rc::clone(&dirty);
    store.subscribe(Box::new(move |_: &AppState| needs_redraw.set(true)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let _ = action_tx.send(Action::Bootstrap(BootstrapAction::Start));
    let result = run_app(&mut terminal, &mut store, &action_tx, &result_rx, &dirty);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Make sure the worker stops even if the loop ended with an error
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting hn-stories");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
    dirty: &Cell<bool>,
) -> io::Result<()> {
    loop {
        // Apply everything the middleware chain let through
        for action in result_rx.try_iter() {
            store.dispatch(action);
        }

        if !store.state().running {
            break;
        }

        if dirty.replace(false) {
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(store.state(), area, frame);
            })?;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                    {
                        log::error!("Background worker is gone");
                        break;
                    }
                }
                Event::Resize(_, _) => dirty.set(true),
                _ => {}
            }
        }
    }

    Ok(())
}
