//! Hacker News Middleware
//!
//! Central middleware for everything that talks to the outside world about stories:
//! - Fetch orchestration (on Event::QueryChanged)
//! - Dropping results of superseded requests
//! - Opening stories in the browser

use crate::actions::{Action, Event, FetchOutcome, ListAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_story;
use hn_client::{AlgoliaClient, LocalStoriesClient, SearchClient, SearchQuery};
use hn_stories_config::{AppConfig, FetchMode};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for fetching and opening stories
///
/// Each query change issues one request on the runtime. Requests are
/// numbered; a completion only reaches the reducer if no newer request was
/// issued since, so a slow stale response never overwrites newer results.
/// The stale request itself still runs to completion.
pub struct HackerNewsMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn SearchClient>,
    /// Sequence number of the most recently issued request
    latest: u64,
}

impl HackerNewsMiddleware {
    pub fn new(client: Arc<dyn SearchClient>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self {
            runtime,
            client,
            latest: 0,
        })
    }

    /// Pick the backend from the configured fetch mode
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client: Arc<dyn SearchClient> = match config.fetch_mode {
            FetchMode::Remote => Arc::new(AlgoliaClient::new()?),
            FetchMode::Local => Arc::new(LocalStoriesClient::new(config.local_delay())),
        };
        log::info!("Using {:?} story backend", config.fetch_mode);
        Self::new(client)
    }

    fn start_fetch(&mut self, query: &SearchQuery, dispatcher: &Dispatcher) {
        if query.is_empty() {
            log::debug!("Empty search term, not fetching");
            return;
        }

        self.latest += 1;
        let seq = self.latest;
        log::info!("Fetch #{} started: {}", seq, query);
        dispatcher.dispatch(Action::Stories(StoriesAction::FetchInit));

        let client = Arc::clone(&self.client);
        let query = query.clone();
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let outcome = match client.search(&query).await {
                Ok(stories) => FetchOutcome::Loaded(stories),
                Err(e) => FetchOutcome::Failed(e.to_string()),
            };
            dispatcher.dispatch(Action::event(Event::FetchCompleted { seq, outcome }));
        });
    }

    fn finish_fetch(&self, seq: u64, outcome: &FetchOutcome, dispatcher: &Dispatcher) {
        if seq != self.latest {
            log::debug!("Discarding result of fetch #{} (latest is #{})", seq, self.latest);
            return;
        }

        match outcome {
            FetchOutcome::Loaded(stories) => {
                log::info!("Fetch #{} returned {} stories", seq, stories.len());
                dispatcher.dispatch(Action::Stories(StoriesAction::FetchSuccess(
                    stories.clone(),
                )));
            }
            FetchOutcome::Failed(error) => {
                log::error!("Fetch #{} failed: {}", seq, error);
                dispatcher.dispatch(Action::Stories(StoriesAction::FetchFailure));
            }
        }
    }
}

impl Middleware for HackerNewsMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::QueryChanged(query)) => {
                self.start_fetch(query, dispatcher);
                true
            }

            Action::Event(Event::FetchCompleted { seq, outcome }) => {
                self.finish_fetch(*seq, outcome, dispatcher);
                true
            }

            Action::List(ListAction::OpenSelected) => {
                match state.selected_story() {
                    Some(story) => {
                        let story = story.clone();
                        self.runtime.spawn(async move {
                            if let Err(e) = open_story(&story).await {
                                log::error!("Failed to open story {}: {}", story.object_id, e);
                            }
                        });
                    }
                    None => log::debug!("No story selected"),
                }
                false
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hn_client::{FetchError, Story};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    /// Answers with one story titled after the term; "fail" fails
    struct EchoClient;

    #[async_trait]
    impl SearchClient for EchoClient {
        async fn search(&self, query: &SearchQuery) -> Result<Vec<Story>, FetchError> {
            if query.term == "fail" {
                return Err(FetchError::Status {
                    status: 500,
                    url: query.url(),
                });
            }
            Ok(vec![Story::new("1", query.term.clone())])
        }
    }

    fn setup() -> (HackerNewsMiddleware, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let mw = HackerNewsMiddleware::new(Arc::new(EchoClient)).unwrap();
        (mw, Dispatcher::new(tx), rx)
    }

    fn query_changed(term: &str) -> Action {
        Action::event(Event::QueryChanged(SearchQuery::new("http://hn.test", term)))
    }

    fn next(rx: &Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    /// Feed a completion event back through the middleware, like the worker does
    fn complete(mw: &mut HackerNewsMiddleware, d: &Dispatcher, rx: &Receiver<Action>) {
        let completed = next(rx);
        assert!(matches!(completed, Action::Event(Event::FetchCompleted { .. })));
        mw.handle(&completed, &AppState::default(), d);
    }

    #[test]
    fn test_fetch_success_flow() {
        let (mut mw, d, rx) = setup();
        assert!(mw.handle(&query_changed("rust"), &AppState::default(), &d));

        assert!(matches!(next(&rx), Action::Stories(StoriesAction::FetchInit)));
        complete(&mut mw, &d, &rx);

        match next(&rx) {
            Action::Stories(StoriesAction::FetchSuccess(stories)) => {
                assert_eq!(stories, vec![Story::new("1", "rust")]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fetch_failure_flow() {
        let (mut mw, d, rx) = setup();
        mw.handle(&query_changed("fail"), &AppState::default(), &d);

        assert!(matches!(next(&rx), Action::Stories(StoriesAction::FetchInit)));
        complete(&mut mw, &d, &rx);
        assert!(matches!(next(&rx), Action::Stories(StoriesAction::FetchFailure)));
    }

    #[test]
    fn test_empty_term_does_not_fetch() {
        let (mut mw, d, rx) = setup();
        mw.handle(&query_changed(""), &AppState::default(), &d);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_whitespace_term_still_fetches() {
        let (mut mw, d, rx) = setup();
        mw.handle(&query_changed("  "), &AppState::default(), &d);

        assert!(matches!(next(&rx), Action::Stories(StoriesAction::FetchInit)));
        complete(&mut mw, &d, &rx);
        match next(&rx) {
            Action::Stories(StoriesAction::FetchSuccess(stories)) => {
                assert_eq!(stories, vec![Story::new("1", "  ")]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let (mut mw, d, rx) = setup();
        let state = AppState::default();
        mw.handle(&query_changed("old"), &state, &d);
        mw.handle(&query_changed("new"), &state, &d);

        // The old request finishing last must not win
        let stale = Action::event(Event::FetchCompleted {
            seq: 1,
            outcome: FetchOutcome::Loaded(vec![Story::new("1", "old")]),
        });
        let fresh = Action::event(Event::FetchCompleted {
            seq: 2,
            outcome: FetchOutcome::Loaded(vec![Story::new("1", "new")]),
        });
        mw.handle(&fresh, &state, &d);
        mw.handle(&stale, &state, &d);

        let successes: Vec<Vec<Story>> = std::iter::from_fn(|| {
            rx.recv_timeout(Duration::from_millis(500)).ok()
        })
        .filter_map(|action| match action {
            Action::Stories(StoriesAction::FetchSuccess(stories)) => Some(stories),
            _ => None,
        })
        .collect();

        assert_eq!(successes, vec![vec![Story::new("1", "new")]]);
    }

    #[test]
    fn test_open_without_selection_is_consumed() {
        let (mut mw, d, rx) = setup();
        assert!(!mw.handle(
            &Action::List(ListAction::OpenSelected),
            &AppState::default(),
            &d
        ));
        assert!(rx.try_recv().is_err());
    }
}
