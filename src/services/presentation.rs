use crate::models::{author_line, BookCard, BookSummary, Cover};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_PROMPT: &str = "No search results yet. Try searching for a book!";
pub const NO_COVER_TEXT: &str = "No Cover Available";

pub fn render_card(book: &BookSummary) -> BookCard {
    let cover = match book.thumbnail() {
        Some(url) => Cover::Thumbnail {
            url: url.to_string(),
            alt: format!("{} cover", book.title()),
        },
        None => Cover::Missing {
            text: NO_COVER_TEXT.to_string(),
        },
    };

    BookCard {
        id: book.id.clone(),
        title: book.title().to_string(),
        authors: author_line(book),
        cover,
    }
}

pub fn render_cards(books: &[BookSummary]) -> Vec<BookCard> {
    books.iter().map(render_card).collect()
}

/// The prompt only shows when there is nothing to list and nothing in flight.
pub fn search_placeholder(results: &[BookSummary], loading: bool) -> Option<String> {
    if results.is_empty() && !loading {
        Some(NO_RESULTS_PROMPT.to_string())
    } else {
        None
    }
}
