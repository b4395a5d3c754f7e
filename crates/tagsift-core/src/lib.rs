pub mod error;
pub mod extract;
pub mod report;
pub mod session;
pub mod stopwords;

pub use error::{Error, Result};
pub use extract::{count_tags, extract_tags, normalize_token, TagFrequency};
pub use report::{format_tags, render_tags, render_tags_json, save_tags, TagEntry};
pub use session::Session;
pub use stopwords::{load_stop_words, StopWordSet};
