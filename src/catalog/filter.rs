use super::models::MovieRecord;

/// Case-insensitive substring match on the title. An empty query matches
/// every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Records whose title matches `query`, in their original order
pub fn filter_records<'a>(records: &'a [MovieRecord], query: &str) -> Vec<&'a MovieRecord> {
    records
        .iter()
        .filter(|record| title_matches(&record.title, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            image: None,
            rating: 0.0,
            rated: 0.0,
            year: None,
            description: None,
        }
    }

    #[test]
    fn test_title_match_ignores_case() {
        assert!(title_matches("The Matrix", "matrix"));
        assert!(title_matches("The Matrix", "MATRIX"));
        assert!(title_matches("The Matrix", "e ma"));
        assert!(!title_matches("The Matrix", "matrex"));
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let records = vec![record("1", "Zodiac"), record("2", "Alien"), record("3", "Heat")];
        let filtered = filter_records(&records, "");
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_filter_keeps_matching_subsequence() {
        let records = vec![
            record("1", "Alien"),
            record("2", "Heat"),
            record("3", "Aliens"),
            record("4", "Cube"),
        ];
        let filtered = filter_records(&records, "ALIEN");
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_does_not_look_at_other_fields() {
        let mut movie = record("1", "Heat");
        movie.description = Some("matrix".to_string());
        movie.year = Some("1999".to_string());
        assert!(filter_records(&[movie.clone()], "matrix").is_empty());
        assert!(filter_records(&[movie], "1999").is_empty());
    }
}
