use std::path::Path;

use anyhow::Result;
use console::style;

use tagsift_core::{render_tags, render_tags_json, Session};

pub fn run(document: &Path, stop_words: &Path, output: Option<&Path>, json: bool) -> Result<()> {
    let mut session = Session::new();
    session.load_stop_words(stop_words)?;
    session.select_document(document)?;

    let tags = session.extract()?;

    eprintln!(
        "Extracted {} tags from {}",
        style(tags.len()).bold(),
        style(document.display()).dim()
    );

    if json {
        println!("{}", render_tags_json(tags)?);
    } else if tags.is_empty() {
        eprintln!("  (no tags)");
    } else {
        print!("{}", render_tags(tags));
    }

    if let Some(out) = output {
        session.save(out)?;
        eprintln!("Saved tag report to {}", style(out.display()).bold());
    }

    Ok(())
}
