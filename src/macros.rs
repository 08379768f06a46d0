#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a `Table` from `key => value` pairs, keeping declaration order.
#[macro_export]
macro_rules! table {
    ( $($key:literal => $value:expr),* $(,)? ) => {{
        $crate::Table::from_entries(vec![ $(($key.to_string(), $value)),* ])
    }};
}

/// Build an owned title list from string literals.
#[macro_export]
macro_rules! titles {
    ( $($title:literal),* $(,)? ) => {
        vec![ $($title.to_string()),* ]
    };
}

#[macro_export]
macro_rules! book {
    (
        title: $title:literal,
        author: $author:literal,
        published: $year:literal,
        pages: $pages:literal,
        description: $description:literal,
        long_description: $long:literal $(,)?
    ) => {
        $crate::BookRecord {
            long_description: Some($long.to_string()),
            ..$crate::book! {
                title: $title,
                author: $author,
                published: $year,
                pages: $pages,
                description: $description,
            }
        }
    };
    (
        title: $title:literal,
        author: $author:literal,
        published: $year:literal,
        pages: $pages:literal,
        description: $description:literal $(,)?
    ) => {
        $crate::BookRecord {
            title: $title.to_string(),
            author: $author.to_string(),
            published_year: $year,
            pages: $pages,
            description: $description.to_string(),
            long_description: None,
        }
    };
}
