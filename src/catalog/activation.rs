use super::models::records_from_documents;
use super::state::{CatalogEvent, Settlement};
use crate::store::SharedMovieStore;
use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use tracing::{debug, error, info};

/// One mount of the catalog view and its single fetch
///
/// Cancelling guarantees the settle event is never delivered, even when the
/// store answers afterwards.
#[derive(Clone, Debug)]
pub struct Activation {
    abort: AbortHandle,
}

impl Activation {
    /// Emit `Started` right away and return the fetch task. The caller
    /// drives the task on its executor; it emits `Settled` exactly once
    /// unless cancelled first.
    pub fn start<F>(store: SharedMovieStore, mut on_event: F) -> (Self, impl Future<Output = ()>)
    where
        F: FnMut(CatalogEvent) + 'static,
    {
        on_event(CatalogEvent::Started);

        let (abort, registration) = AbortHandle::new_pair();
        let fetch = Abortable::new(load_catalog(store), registration);
        let task = async move {
            match fetch.await {
                Ok(settlement) => on_event(CatalogEvent::Settled(settlement)),
                Err(_) => debug!("Catalog fetch cancelled before settling"),
            }
        };

        (Activation { abort }, task)
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Fetch the whole collection. Failures are logged and reported as
/// `Settlement::Failed`, never propagated.
pub async fn load_catalog(store: SharedMovieStore) -> Settlement {
    match store.get().fetch_movies().await {
        Ok(documents) => {
            let fetched = documents.len();
            let records = records_from_documents(documents);
            info!(
                "Loaded {} movies ({} rejected)",
                records.len(),
                fetched - records.len()
            );
            Settlement::Loaded(records)
        }
        Err(e) => {
            error!("Error fetching movie catalog: {}", e);
            Settlement::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::state::CatalogState;
    use crate::test_support::{movie_document, InMemoryMovieStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shared_state() -> Rc<RefCell<CatalogState>> {
        Rc::new(RefCell::new(CatalogState::new()))
    }

    fn sink(state: &Rc<RefCell<CatalogState>>) -> impl FnMut(CatalogEvent) + 'static {
        let state = state.clone();
        move |event| state.borrow_mut().apply(event)
    }

    #[tokio::test]
    async fn test_activation_loads_records() {
        let store = InMemoryMovieStore::new(vec![
            movie_document("a", "Alien"),
            movie_document("b", "Blade Runner"),
        ]);
        let state = shared_state();

        let (_activation, task) = Activation::start(SharedMovieStore::new(store), sink(&state));
        assert!(state.borrow().is_loading());

        task.await;
        let state = state.borrow();
        assert!(!state.is_loading());
        assert_eq!(state.records().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_settles_empty() {
        let store = InMemoryMovieStore::failing("permission denied");
        let state = shared_state();

        let (_activation, task) = Activation::start(SharedMovieStore::new(store), sink(&state));
        task.await;

        let state = state.borrow();
        assert!(!state.is_loading());
        assert!(state.records().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_before_settle_drops_completion() {
        let (store, gate) = InMemoryMovieStore::gated(vec![movie_document("a", "Alien")]);
        let state = shared_state();

        let (activation, task) = Activation::start(SharedMovieStore::new(store), sink(&state));
        activation.cancel();
        gate.notify_one();
        task.await;

        let state = state.borrow();
        assert!(state.records().is_empty());
        assert!(state.is_loading());
    }
}
