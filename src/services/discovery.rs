use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::BookSummary;

/// Uniformly permutes the fetched books and keeps at most `limit` of them.
pub fn shuffle_queue<R>(mut books: Vec<BookSummary>, limit: usize, rng: &mut R) -> Vec<BookSummary>
where
    R: Rng + ?Sized,
{
    books.shuffle(rng);
    books.truncate(limit);
    books
}
