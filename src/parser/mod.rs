pub mod gurufocus_parser;

pub use gurufocus_parser::{GuruFocusParser, Parser};
