#![cfg(feature = "test-utils")]

mod support;

use crate::support::{activate_and_settle, tracing_init};
use marquee::catalog::{Activation, CatalogState};
use marquee::store::SharedMovieStore;
use marquee::test_support::{movie_document, numbered_documents, untitled_document, InMemoryMovieStore};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

#[tokio::test]
async fn test_loading_flag_spans_fetch() {
    tracing_init();

    let (store, gate) = InMemoryMovieStore::gated(numbered_documents(3));
    let state = Rc::new(RefCell::new(CatalogState::new()));
    assert!(!state.borrow().is_loading());

    let sink = state.clone();
    let (_activation, task) = Activation::start(SharedMovieStore::new(store), move |event| {
        sink.borrow_mut().apply(event)
    });
    assert!(state.borrow().is_loading());
    assert!(state.borrow().records().is_empty());

    gate.notify_one();
    task.await;

    assert!(!state.borrow().is_loading());
    assert_eq!(state.borrow().records().len(), 3);
}

#[tokio::test]
async fn test_fetches_exactly_once_per_activation() {
    tracing_init();

    let store = Arc::new(InMemoryMovieStore::new(numbered_documents(20)));
    let state = activate_and_settle(store.clone()).await;

    // Paging and searching re-derive without touching the store
    let mut state = state.borrow_mut();
    let pages = state.page_count("", 14);
    state.go_to_next_page(pages);
    let _ = state.view("movie 1", 14);
    let _ = state.view("", 14);

    assert_eq!(store.fetch_calls(), 1);
}

#[tokio::test]
async fn test_rejected_fetch_settles_to_empty_catalog() {
    tracing_init();

    let store = Arc::new(InMemoryMovieStore::failing("network unreachable"));
    let state = activate_and_settle(store).await;
    let state = state.borrow();

    assert!(!state.is_loading());
    assert!(state.records().is_empty());
    assert_eq!(state.page_count("", 14), 0);
}

#[tokio::test]
async fn test_cancelled_activation_ignores_late_completion() {
    tracing_init();

    let (store, gate) = InMemoryMovieStore::gated(numbered_documents(5));
    let state = Rc::new(RefCell::new(CatalogState::new()));
    let sink = state.clone();
    let (activation, task) = Activation::start(SharedMovieStore::new(store), move |event| {
        sink.borrow_mut().apply(event)
    });

    // Park the fetch inside the store before cancelling
    let mut task = Box::pin(task);
    assert!(futures::poll!(task.as_mut()).is_pending());

    activation.cancel();
    gate.notify_one();
    task.await;

    assert!(state.borrow().records().is_empty());
}

#[tokio::test]
async fn test_malformed_documents_are_skipped() {
    tracing_init();

    let store = Arc::new(InMemoryMovieStore::new(vec![
        movie_document("a", "Alien"),
        untitled_document("b"),
        movie_document("c", "Cube"),
    ]));
    let state = activate_and_settle(store).await;
    let ids: Vec<String> = state
        .borrow()
        .records()
        .iter()
        .map(|r| r.id.clone())
        .collect();

    assert_eq!(ids, vec!["a", "c"]);
}
