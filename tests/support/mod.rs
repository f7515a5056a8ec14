use marquee::catalog::{Activation, CatalogState};
use marquee::store::{SharedMovieStore, StoreDocument};
use marquee::test_support::InMemoryMovieStore;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Catalog state shared between a test and the activation callback
pub type SharedState = Rc<RefCell<CatalogState>>;

/// Activate a catalog against `store` and run the fetch to settlement
pub async fn activate_and_settle(store: Arc<InMemoryMovieStore>) -> SharedState {
    let state: SharedState = Rc::new(RefCell::new(CatalogState::new()));
    let sink = state.clone();
    let (_activation, task) = Activation::start(SharedMovieStore::from_arc(store), move |event| {
        sink.borrow_mut().apply(event)
    });
    task.await;
    state
}

/// Activate against a fixed set of documents
pub async fn catalog_with(documents: Vec<StoreDocument>) -> SharedState {
    activate_and_settle(Arc::new(InMemoryMovieStore::new(documents))).await
}
