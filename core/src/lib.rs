pub mod error;
pub mod index;
pub mod lexer;
pub mod parser;
pub mod scorer;

pub use error::{Field, ParseError};
pub use index::{DocId, InvertedIndex, Posting, PostingList};
pub use parser::{parse_line, Parser, TokenEntry};
pub use scorer::{idf, search_with_score, SearchResult};
