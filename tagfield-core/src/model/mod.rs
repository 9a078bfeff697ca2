mod suggestion;
mod tag;

pub use suggestion::Suggestion;
pub use tag::Tag;
