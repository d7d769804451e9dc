use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::{BooksApiConfig, ViewSettings};
use crate::error::ViewError;
use crate::models::{Navigation, ResultList, ViewSnapshot};
use crate::services::books_client::BooksApi;
use crate::services::discovery::shuffle_queue;
use crate::services::home_view::{HomeView, ViewCommand};

pub type SharedView = Arc<Mutex<HomeView>>;

/// Result of an event that may have started a fetch. The fetch is
/// fire-and-forget; `task` is only there for callers that want to wait.
#[derive(Debug)]
pub struct Dispatched {
    pub snapshot: ViewSnapshot,
    pub task: Option<JoinHandle<()>>,
}

/// Owns the live home views and runs their fetches.
#[derive(Clone)]
pub struct ViewService {
    api: Arc<dyn BooksApi>,
    views: Arc<Mutex<LruCache<Uuid, SharedView>>>,
    settings: ViewSettings,
    max_results: u32,
    discovery_query: String,
}

impl ViewService {
    pub fn new(api: Arc<dyn BooksApi>, books: &BooksApiConfig, settings: ViewSettings) -> Self {
        let capacity = NonZeroUsize::new(settings.max_views).unwrap_or(NonZeroUsize::MIN);
        Self {
            api,
            views: Arc::new(Mutex::new(LruCache::new(capacity))),
            settings,
            max_results: books.max_results,
            discovery_query: books.discovery_query.clone(),
        }
    }

    /// Creates a view and fires its initial discovery fetch.
    pub async fn mount(&self) -> (Uuid, Dispatched) {
        let view_id = Uuid::new_v4();
        let mut view = HomeView::new(self.settings.discard_stale_completions);
        let command = view.request_discovery();
        let snapshot = view.snapshot();
        let shared = Arc::new(Mutex::new(view));

        if let Some((evicted, _)) = self.views.lock().await.push(view_id, shared.clone()) {
            if evicted != view_id {
                tracing::info!(view_id = %evicted, "evicted least recently used view");
            }
        }
        tracing::info!(view_id = %view_id, "mounted view");

        let task = self.dispatch(shared, command);
        (
            view_id,
            Dispatched {
                snapshot,
                task: Some(task),
            },
        )
    }

    pub async fn unmount(&self, view_id: Uuid) -> Result<(), ViewError> {
        match self.views.lock().await.pop(&view_id) {
            Some(_) => {
                tracing::info!(view_id = %view_id, "unmounted view");
                Ok(())
            }
            None => Err(ViewError::NotFound(view_id)),
        }
    }

    pub async fn active_views(&self) -> usize {
        self.views.lock().await.len()
    }

    pub async fn snapshot(&self, view_id: Uuid) -> Result<ViewSnapshot, ViewError> {
        let view = self.view(view_id).await?;
        let snapshot = view.lock().await.snapshot();
        Ok(snapshot)
    }

    pub async fn set_query(&self, view_id: Uuid, text: String) -> Result<ViewSnapshot, ViewError> {
        let view = self.view(view_id).await?;
        let mut guard = view.lock().await;
        guard.set_query(text);
        Ok(guard.snapshot())
    }

    pub async fn key_down(&self, view_id: Uuid, key: &str) -> Result<Dispatched, ViewError> {
        let view = self.view(view_id).await?;
        let (command, snapshot) = {
            let mut guard = view.lock().await;
            let command = guard.key_down(key);
            (command, guard.snapshot())
        };
        Ok(self.finish_event(view, command, snapshot))
    }

    pub async fn submit(&self, view_id: Uuid) -> Result<Dispatched, ViewError> {
        let view = self.view(view_id).await?;
        let (command, snapshot) = {
            let mut guard = view.lock().await;
            let command = guard.submit();
            (command, guard.snapshot())
        };
        Ok(self.finish_event(view, command, snapshot))
    }

    pub async fn shuffle(&self, view_id: Uuid) -> Result<Dispatched, ViewError> {
        let view = self.view(view_id).await?;
        let (command, snapshot) = {
            let mut guard = view.lock().await;
            let command = guard.request_discovery();
            (command, guard.snapshot())
        };
        Ok(self.finish_event(view, Some(command), snapshot))
    }

    pub async fn select(
        &self,
        view_id: Uuid,
        list: ResultList,
        book_id: &str,
    ) -> Result<Navigation, ViewError> {
        let view = self.view(view_id).await?;
        let payload = view
            .lock()
            .await
            .select(list, book_id)
            .ok_or_else(|| ViewError::BookNotFound(book_id.to_string()))?;
        Ok(Navigation::to_summary(payload))
    }

    async fn view(&self, view_id: Uuid) -> Result<SharedView, ViewError> {
        self.views
            .lock()
            .await
            .get(&view_id)
            .cloned()
            .ok_or(ViewError::NotFound(view_id))
    }

    fn finish_event(
        &self,
        view: SharedView,
        command: Option<ViewCommand>,
        snapshot: ViewSnapshot,
    ) -> Dispatched {
        Dispatched {
            snapshot,
            task: command.map(|command| self.dispatch(view, command)),
        }
    }

    fn dispatch(&self, view: SharedView, command: ViewCommand) -> JoinHandle<()> {
        let api = self.api.clone();
        let max_results = self.max_results;
        let discovery_query = self.discovery_query.clone();

        tokio::spawn(async move {
            match command {
                ViewCommand::Search { ticket, query } => {
                    let outcome = api.volumes(query.as_str(), max_results).await;
                    view.lock().await.finish_search(ticket, outcome);
                }
                ViewCommand::Discover { ticket } => {
                    let fetched = api.volumes(&discovery_query, max_results).await;
                    let outcome = fetched.map(|books| {
                        let mut rng = rand::thread_rng();
                        shuffle_queue(books, max_results as usize, &mut rng)
                    });
                    view.lock().await.finish_discovery(ticket, outcome);
                }
            }
        })
    }
}
