use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::journal;
use crate::search;

/// Regex-search every stored log and print numbered match contexts.
///
/// Files are processed in enumeration order; within a file, all matches of
/// the first term are printed before any match of the next, each numbered
/// independently. Unreadable files are skipped with a warning.
pub fn run(config_path: PathBuf, terms: Vec<String>) -> Result<()> {
    let config = config::load_or_init(&config_path)?;

    // Malformed terms are fatal before any file is read
    let patterns = search::compile_terms(&terms)?;

    let root = journal::expand_root(&config.root)?;
    let files = search::log_files(&root);

    println!("searching for {}", terms.join(" "));

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: skipping '{}': {}", file.display(), e);
                continue;
            }
        };

        println!("{}\n----------\n", file.display());

        for pattern in &patterns {
            let hits = search::scan(&content, pattern, config.context_size);
            for (index, hit) in hits.iter().enumerate() {
                println!("{} :\n{}", index + 1, hit.context);
            }
        }
    }

    Ok(())
}
