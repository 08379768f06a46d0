use super::table::is_canonical_key;
use super::*;

fn assert_canonical<T>(name: &str, table: &Table<T>) {
    let mut seen = std::collections::HashSet::new();
    for key in table.keys() {
        assert!(is_canonical_key(key), "{name}: key {key:?} is not canonical");
        assert!(seen.insert(key), "{name}: duplicate key {key:?}");
    }
}

#[test]
fn builtin_tables_hold_canonical_unique_keys() {
    let kb = KnowledgeBase::builtin();
    assert_canonical("book_details", &kb.book_details);
    assert_canonical("author_recommendations", &kb.author_recommendations);
    assert_canonical("genre_recommendations", &kb.genre_recommendations);
    assert_canonical("similar_books", &kb.similar_books);
    assert_canonical("top_rated_by_genre", &kb.top_rated_by_genre);
    assert_canonical("short_highly_rated", &kb.short_highly_rated);
    assert_canonical("long_highly_rated", &kb.long_highly_rated);
}

#[test]
fn builtin_book_details_cover_the_known_titles() {
    let kb = KnowledgeBase::builtin();
    let keys: Vec<&str> = kb.book_details.keys().collect();
    assert_eq!(
        keys,
        [
            "1984",
            "war and peace",
            "pride and prejudice",
            "the hunger games",
            "lord of the rings",
            "to kill a mockingbird",
            "the great gatsby",
            "little women",
            "vampire academy",
            "heart of darkness",
        ]
    );

    let orwell = kb.book_details.get("1984").unwrap();
    assert_eq!(orwell.author, "George Orwell");
    assert_eq!(orwell.published_year, 1949);
    assert_eq!(orwell.pages, 328);
}

#[test]
fn full_description_prefers_the_long_form() {
    let kb = KnowledgeBase::builtin();
    let war = kb.book_details.get("war and peace").unwrap();
    assert_eq!(war.full_description(), war.long_description.as_deref().unwrap());

    let gatsby = kb.book_details.get("the great gatsby").unwrap();
    assert!(gatsby.long_description.is_none());
    assert_eq!(gatsby.full_description(), gatsby.description);
}

#[test]
fn loaded_tables_keep_document_order() {
    let kb = KnowledgeBase::from_json_str(
        r#"{
            "author_recommendations": {
                "zadie smith": ["White Teeth"],
                "anne rice": ["Interview with the Vampire"],
                "mary shelley": ["Frankenstein"]
            },
            "top_rated_general": ["Middlemarch"]
        }"#,
    )
    .unwrap();

    let keys: Vec<&str> = kb.author_recommendations.keys().collect();
    assert_eq!(keys, ["zadie smith", "anne rice", "mary shelley"]);
    assert_eq!(kb.top_rated_general, ["Middlemarch"]);
    assert!(kb.genre_recommendations.is_empty());
}

#[test]
fn loaded_book_records_accept_optional_long_description() {
    let kb = KnowledgeBase::from_json_str(
        r#"{
            "book_details": {
                "dune": {
                    "title": "Dune",
                    "author": "Frank Herbert",
                    "published_year": 1965,
                    "pages": 412,
                    "description": "Desert planet politics."
                }
            }
        }"#,
    )
    .unwrap();

    let dune = kb.book_details.get("dune").unwrap();
    assert_eq!(dune.title, "Dune");
    assert_eq!(dune.long_description, None);
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = KnowledgeBase::from_json_str(r#"{ "genre_recommendations": { "horror": ["It"], "horror": ["Dracula"] } }"#)
        .unwrap_err();
    assert!(matches!(err, Error::Knowledge(_)));
    assert!(err.to_string().contains("duplicate table key \"horror\""), "{err}");
}

#[test]
fn non_canonical_keys_are_rejected() {
    let err = KnowledgeBase::from_json_str(r#"{ "similar_books": { "Jane Eyre": ["Rebecca"] } }"#).unwrap_err();
    assert!(err.to_string().contains("must be lowercase and trimmed"), "{err}");
}

#[test]
fn unknown_tables_are_rejected() {
    let err = KnowledgeBase::from_json_str(r#"{ "movie_details": {} }"#).unwrap_err();
    assert!(matches!(err, Error::Knowledge(_)));
}

#[test]
fn missing_file_reports_the_path() {
    let err = KnowledgeBase::from_path("/definitely/not/here/knowledge.json").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here/knowledge.json"));
}
