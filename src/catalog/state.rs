use super::filter::filter_records;
use super::models::MovieRecord;
use super::pagination::{page_count, page_slice, PageControls, PagePolicy};

/// Result of the activation fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Loaded(Vec<MovieRecord>),
    Failed,
}

/// State transitions delivered by an activation
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Started,
    Settled(Settlement),
}

/// View-local state of the catalog
///
/// The search query is not part of it: it belongs to the header and is
/// passed in on every derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    records: Vec<MovieRecord>,
    is_loading: bool,
    current_page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the view renders for one query
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub records: Vec<MovieRecord>,
    pub filtered_count: usize,
    pub page_count: usize,
    pub controls: PageControls,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState {
            records: Vec::new(),
            is_loading: false,
            current_page: 1,
        }
    }

    /// State for a view whose fetch is about to start
    pub fn loading() -> Self {
        CatalogState {
            is_loading: true,
            ..Self::new()
        }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Started => self.is_loading = true,
            CatalogEvent::Settled(Settlement::Loaded(records)) => {
                self.records = records;
                self.is_loading = false;
            }
            // Keep whatever was loaded before
            CatalogEvent::Settled(Settlement::Failed) => self.is_loading = false,
        }
    }

    pub fn page_count(&self, query: &str, page_size: usize) -> usize {
        page_count(filter_records(&self.records, query).len(), page_size)
    }

    /// Filter, then cut out the current page
    pub fn view(&self, query: &str, page_size: usize) -> CatalogPage {
        let filtered = filter_records(&self.records, query);
        let pages = page_count(filtered.len(), page_size);
        let records = page_slice(&filtered, self.current_page, page_size)
            .iter()
            .map(|record| (*record).clone())
            .collect();

        CatalogPage {
            records,
            filtered_count: filtered.len(),
            page_count: pages,
            controls: PageControls::new(self.current_page, pages),
        }
    }

    pub fn go_to_previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jump to `page` as-is; no range check against the page count
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn go_to_next_page(&mut self, page_count: usize) {
        if self.current_page != page_count {
            self.current_page += 1;
        }
    }

    /// React to a new search query according to `policy`
    pub fn on_query_changed(&mut self, query: &str, policy: PagePolicy) {
        if policy.clamp_on_filter_change {
            let pages = self.page_count(query, policy.page_size);
            self.current_page = self.current_page.min(pages.max(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(titles: &[&str]) -> Vec<MovieRecord> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| MovieRecord {
                id: format!("m{}", i),
                title: title.to_string(),
                image: None,
                rating: 8.0,
                rated: 2.0,
                year: Some("2000".to_string()),
                description: None,
            })
            .collect()
    }

    fn loaded(count: usize) -> CatalogState {
        let titles: Vec<String> = (0..count).map(|i| format!("Movie {}", i)).collect();
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = CatalogState::new();
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::Settled(Settlement::Loaded(records(&titles))));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = CatalogState::default();
        assert!(!state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_loading_constructor_starts_with_spinner() {
        let mut state = CatalogState::loading();
        assert!(state.is_loading());
        assert_eq!(state.current_page(), 1);
        state.apply(CatalogEvent::Settled(Settlement::Failed));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_previous_from_page_zero_stays_put() {
        let mut state = loaded(5);
        state.go_to_page(0);
        state.go_to_previous_page();
        assert_eq!(state.current_page(), 0);
    }

    #[test]
    fn test_loading_flag_follows_events() {
        let mut state = CatalogState::new();
        state.apply(CatalogEvent::Started);
        assert!(state.is_loading());
        state.apply(CatalogEvent::Settled(Settlement::Loaded(records(&["Heat"]))));
        assert!(!state.is_loading());
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut state = loaded(3);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::Settled(Settlement::Failed));
        assert!(!state.is_loading());
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn test_first_page_of_twenty() {
        let state = loaded(20);
        let page = state.view("", 14);
        assert_eq!(page.records.len(), 14);
        assert_eq!(page.page_count, 2);
        assert!(page.controls.prev_disabled);
        assert!(!page.controls.next_disabled);
        assert_eq!(page.records[0].id, "m0");
    }

    #[test]
    fn test_second_page_of_twenty() {
        let mut state = loaded(20);
        state.go_to_next_page(2);
        let page = state.view("", 14);
        assert_eq!(page.records.len(), 6);
        assert_eq!(page.records[0].id, "m14");
        assert!(page.controls.next_disabled);
    }

    #[test]
    fn test_previous_is_noop_on_first_page() {
        let mut state = loaded(20);
        state.go_to_previous_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_next_is_noop_on_last_page() {
        let mut state = loaded(20);
        state.go_to_page(2);
        state.go_to_next_page(2);
        assert_eq!(state.current_page(), 2);
        state.go_to_previous_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_is_unchecked() {
        let mut state = loaded(5);
        state.go_to_page(9);
        assert_eq!(state.current_page(), 9);
        assert!(state.view("", 14).records.is_empty());
    }

    #[test]
    fn test_query_change_without_clamp_keeps_page() {
        let mut state = loaded(30);
        state.go_to_page(3);
        state.on_query_changed("Movie 1", PagePolicy::default());
        assert_eq!(state.current_page(), 3);
        // 11 matches: "Movie 1" and "Movie 10".."Movie 19"
        assert!(state.view("Movie 1", 14).records.is_empty());
    }

    #[test]
    fn test_query_change_with_clamp_pulls_page_into_range() {
        let policy = PagePolicy {
            clamp_on_filter_change: true,
            ..PagePolicy::default()
        };
        let mut state = loaded(30);
        state.go_to_page(3);
        state.on_query_changed("Movie 1", policy);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.view("Movie 1", 14).records.len(), 11);

        state.on_query_changed("nothing matches", policy);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_clamp_keeps_page_that_is_still_valid() {
        let policy = PagePolicy {
            clamp_on_filter_change: true,
            ..PagePolicy::default()
        };
        let mut state = loaded(30);
        state.go_to_page(2);
        state.on_query_changed("movie", policy);
        assert_eq!(state.current_page(), 2);
    }
}
