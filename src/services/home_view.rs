//! Per-instance state of the home page.
//!
//! Every UI event is a method that mutates the view synchronously and, when
//! a fetch is needed, hands back a [`ViewCommand`] for the caller to run.
//! Fetch results come back through `finish_search` / `finish_discovery`
//! carrying the [`Ticket`] that was issued with the command.

use crate::error::{BooksApiError, QueryRejection};
use crate::models::{BookSummary, NavigationPayload, ResultList, ViewSnapshot};
use crate::services::presentation::{render_cards, search_placeholder, LOADING_TEXT};
use crate::services::query_validator::{self, SearchQuery, SPECIAL_CHARACTERS_ALERT};

pub const SUBMIT_KEY: &str = "Enter";

/// Sequence number stamped on a fetch when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Search { ticket: Ticket, query: SearchQuery },
    Discover { ticket: Ticket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct HomeView {
    query: String,
    search_results: Vec<BookSummary>,
    discovery_queue: Vec<BookSummary>,
    loading: bool,
    alert: Option<String>,
    search_seq: u64,
    discovery_seq: u64,
    discard_stale: bool,
}

impl HomeView {
    /// With `discard_stale` off, completions land in arrival order and the
    /// last one wins.
    pub fn new(discard_stale: bool) -> Self {
        Self {
            discard_stale,
            ..Default::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn search_results(&self) -> &[BookSummary] {
        &self.search_results
    }

    pub fn discovery_queue(&self) -> &[BookSummary] {
        &self.discovery_queue
    }

    /// Input change. Never fetches.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn key_down(&mut self, key: &str) -> Option<ViewCommand> {
        if key == SUBMIT_KEY {
            self.submit()
        } else {
            None
        }
    }

    /// Search button or Enter. Rejected input clears the results in place.
    pub fn submit(&mut self) -> Option<ViewCommand> {
        self.alert = None;

        match query_validator::validate(&self.query) {
            Ok(query) => {
                self.loading = true;
                self.search_seq += 1;
                Some(ViewCommand::Search {
                    ticket: Ticket(self.search_seq),
                    query,
                })
            }
            Err(QueryRejection::Empty) => {
                self.search_results.clear();
                None
            }
            Err(rejection @ QueryRejection::ForbiddenCharacter(_)) => {
                self.search_results.clear();
                self.alert = Some(SPECIAL_CHARACTERS_ALERT.to_string());
                tracing::error!(query = %self.query, "rejected search query: {}", rejection);
                None
            }
        }
    }

    /// Mount or shuffle. Not gated by the loading flag.
    pub fn request_discovery(&mut self) -> ViewCommand {
        self.discovery_seq += 1;
        ViewCommand::Discover {
            ticket: Ticket(self.discovery_seq),
        }
    }

    pub fn finish_search(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<BookSummary>, BooksApiError>,
    ) -> Completion {
        if self.discard_stale && ticket.0 < self.search_seq {
            tracing::debug!(ticket = ticket.0, latest = self.search_seq, "dropping stale search completion");
            return Completion::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(books) => {
                self.search_results = books;
                Completion::Applied
            }
            Err(e) => {
                tracing::error!("Error fetching search results: {}", e);
                Completion::Failed
            }
        }
    }

    /// `books` is expected to be shuffled and truncated already.
    pub fn finish_discovery(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<BookSummary>, BooksApiError>,
    ) -> Completion {
        if self.discard_stale && ticket.0 < self.discovery_seq {
            tracing::debug!(ticket = ticket.0, latest = self.discovery_seq, "dropping stale discovery completion");
            return Completion::Stale;
        }

        match outcome {
            Ok(books) => {
                self.discovery_queue = books;
                Completion::Applied
            }
            Err(e) => {
                tracing::error!("Error fetching discovery queue: {}", e);
                Completion::Failed
            }
        }
    }

    /// Card click: projects the book into the payload for the summary route.
    pub fn select(&self, list: ResultList, book_id: &str) -> Option<NavigationPayload> {
        let books = match list {
            ResultList::Search => &self.search_results,
            ResultList::Discovery => &self.discovery_queue,
        };
        books
            .iter()
            .find(|book| book.id == book_id)
            .map(NavigationPayload::from)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            query: self.query.clone(),
            loading: self.loading,
            loading_text: self.loading.then(|| LOADING_TEXT.to_string()),
            placeholder: search_placeholder(&self.search_results, self.loading),
            alert: self.alert.clone(),
            search_results: render_cards(&self.search_results),
            discovery_queue: render_cards(&self.discovery_queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VolumeInfo;
    use crate::services::presentation::NO_RESULTS_PROMPT;

    fn book(id: &str) -> BookSummary {
        BookSummary {
            id: id.to_string(),
            volume_info: VolumeInfo {
                title: format!("Title {id}"),
                ..Default::default()
            },
        }
    }

    fn search_ticket(command: Option<ViewCommand>) -> Ticket {
        match command {
            Some(ViewCommand::Search { ticket, .. }) => ticket,
            other => panic!("expected a search command, got {:?}", other),
        }
    }

    fn populated(discard_stale: bool) -> HomeView {
        let mut view = HomeView::new(discard_stale);
        view.set_query("dune");
        let ticket = search_ticket(view.submit());
        view.finish_search(ticket, Ok(vec![book("a"), book("b")]));
        view
    }

    #[test]
    fn typing_does_not_fetch() {
        let mut view = HomeView::new(false);
        view.set_query("harry potter");
        assert_eq!(view.query(), "harry potter");
        assert!(!view.is_loading());
        assert!(view.key_down("a").is_none());
        assert!(view.key_down("Tab").is_none());
    }

    #[test]
    fn enter_submits_trimmed_query() {
        let mut view = HomeView::new(false);
        view.set_query("  harry potter ");
        match view.key_down("Enter") {
            Some(ViewCommand::Search { query, .. }) => assert_eq!(query.as_str(), "harry potter"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(view.is_loading());
    }

    #[test]
    fn forbidden_query_clears_results_and_alerts() {
        let mut view = populated(false);
        view.set_query("test!");

        assert!(view.submit().is_none());
        assert!(view.search_results().is_empty());
        assert_eq!(view.alert(), Some(SPECIAL_CHARACTERS_ALERT));
        assert!(!view.is_loading());
    }

    #[test]
    fn empty_query_clears_results_silently() {
        let mut view = populated(false);
        view.set_query("   ");

        assert!(view.submit().is_none());
        assert!(view.search_results().is_empty());
        assert!(view.alert().is_none());
    }

    #[test]
    fn next_submit_clears_alert() {
        let mut view = HomeView::new(false);
        view.set_query("a&b");
        view.submit();
        assert!(view.alert().is_some());

        view.set_query("ab");
        view.submit();
        assert!(view.alert().is_none());
    }

    #[test]
    fn search_success_replaces_results_in_order() {
        let mut view = populated(false);
        view.set_query("harry potter");
        let ticket = search_ticket(view.submit());
        assert!(view.is_loading());

        let outcome = view.finish_search(ticket, Ok(vec![book("x"), book("y"), book("z")]));

        assert_eq!(outcome, Completion::Applied);
        assert!(!view.is_loading());
        let ids: Vec<&str> = view.search_results().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn search_failure_keeps_results_and_clears_loading() {
        let mut view = populated(false);
        view.set_query("more");
        let ticket = search_ticket(view.submit());

        let outcome = view.finish_search(ticket, Err(BooksApiError::Status(503)));

        assert_eq!(outcome, Completion::Failed);
        assert!(!view.is_loading());
        assert_eq!(view.search_results().len(), 2);
    }

    #[test]
    fn overlapping_searches_last_writer_wins() {
        let mut view = HomeView::new(false);
        view.set_query("first");
        let first = search_ticket(view.submit());
        view.set_query("second");
        let second = search_ticket(view.submit());

        view.finish_search(second, Ok(vec![book("second")]));
        view.finish_search(first, Ok(vec![book("first")]));

        assert_eq!(view.search_results()[0].id, "first");
        assert!(!view.is_loading());
    }

    #[test]
    fn first_completion_clears_loading_even_with_one_outstanding() {
        let mut view = HomeView::new(false);
        view.set_query("first");
        let first = search_ticket(view.submit());
        view.set_query("second");
        let _second = search_ticket(view.submit());

        view.finish_search(first, Ok(vec![book("first")]));
        assert!(!view.is_loading());
    }

    #[test]
    fn stale_completions_dropped_when_enabled() {
        let mut view = HomeView::new(true);
        view.set_query("first");
        let first = search_ticket(view.submit());
        view.set_query("second");
        let second = search_ticket(view.submit());

        assert_eq!(view.finish_search(second, Ok(vec![book("second")])), Completion::Applied);
        assert_eq!(view.finish_search(first, Ok(vec![book("first")])), Completion::Stale);
        assert_eq!(view.search_results()[0].id, "second");

        let ViewCommand::Discover { ticket: old } = view.request_discovery() else {
            unreachable!()
        };
        let ViewCommand::Discover { ticket: new } = view.request_discovery() else {
            unreachable!()
        };
        view.finish_discovery(new, Ok(vec![book("new")]));
        assert_eq!(view.finish_discovery(old, Ok(vec![book("old")])), Completion::Stale);
        assert_eq!(view.discovery_queue()[0].id, "new");
    }

    #[test]
    fn stale_search_does_not_clear_loading_when_discarding() {
        let mut view = HomeView::new(true);
        view.set_query("first");
        let first = search_ticket(view.submit());
        view.set_query("second");
        let _second = search_ticket(view.submit());

        view.finish_search(first, Ok(vec![book("first")]));
        assert!(view.is_loading());
    }

    #[test]
    fn discovery_is_independent_of_loading() {
        let mut view = HomeView::new(false);
        view.set_query("dune");
        let _ = view.submit();

        let ViewCommand::Discover { ticket } = view.request_discovery() else {
            unreachable!()
        };
        view.finish_discovery(ticket, Ok(vec![book("d1")]));

        assert!(view.is_loading());
        assert_eq!(view.discovery_queue().len(), 1);
    }

    #[test]
    fn discovery_failure_keeps_previous_queue() {
        let mut view = HomeView::new(false);
        let ViewCommand::Discover { ticket } = view.request_discovery() else {
            unreachable!()
        };
        view.finish_discovery(ticket, Ok(vec![book("d1"), book("d2")]));

        let ViewCommand::Discover { ticket } = view.request_discovery() else {
            unreachable!()
        };
        let outcome = view.finish_discovery(ticket, Err(BooksApiError::Parse("bad json".into())));

        assert_eq!(outcome, Completion::Failed);
        assert_eq!(view.discovery_queue().len(), 2);
    }

    #[test]
    fn select_projects_payload_from_the_named_list() {
        let view = populated(false);
        let payload = view.select(ResultList::Search, "b").unwrap();
        assert_eq!(payload.title, "Title b");
        assert_eq!(payload.author, "Unknown Author");
        assert!(view.select(ResultList::Discovery, "b").is_none());
    }

    #[test]
    fn snapshot_render_policy() {
        let mut view = HomeView::new(false);
        let idle = view.snapshot();
        assert_eq!(idle.placeholder.as_deref(), Some(NO_RESULTS_PROMPT));
        assert!(idle.loading_text.is_none());

        view.set_query("dune");
        let ticket = search_ticket(view.submit());
        let loading = view.snapshot();
        assert!(loading.loading);
        assert_eq!(loading.loading_text.as_deref(), Some(LOADING_TEXT));
        assert!(loading.placeholder.is_none());

        view.finish_search(ticket, Ok(Vec::new()));
        let empty = view.snapshot();
        assert!(!empty.loading);
        assert_eq!(empty.placeholder.as_deref(), Some(NO_RESULTS_PROMPT));
    }
}
