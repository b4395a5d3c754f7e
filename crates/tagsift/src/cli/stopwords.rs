use std::path::Path;

use anyhow::Result;
use console::style;

use tagsift_core::load_stop_words;

pub fn run(file: &Path) -> Result<()> {
    let set = load_stop_words(file)?;

    if set.is_empty() {
        eprintln!("No stop words in {}", file.display());
        return Ok(());
    }

    eprintln!(
        "{} stop words in {}:",
        style(set.len()).bold(),
        file.display()
    );
    for word in set.sorted_words() {
        println!("{word}");
    }

    Ok(())
}
