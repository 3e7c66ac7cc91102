use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/words.txt");

const APP_DIR: &str = "boggle-solver";
const USER_DICTIONARY_FILE: &str = "words.txt";

/// Which word list ended up being used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Embedded,
}

fn accept(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

/// One word per line; blank lines and entries with non-letters are dropped.
pub fn load_dictionary_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(accept).collect()
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = accept(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<config dir>/boggle-solver/words.txt`, when the platform has a config dir.
#[must_use]
pub fn user_dictionary_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(USER_DICTIONARY_FILE))
}

/// Loads `explicit` if given, else the user dictionary if one exists, else the
/// embedded list. Only an explicit path that cannot be read is an error.
pub fn load_dictionary(explicit: Option<&Path>) -> io::Result<(Vec<String>, DictionarySource)> {
    if let Some(path) = explicit {
        let words = load_dictionary_from_file(path)?;
        return Ok((words, DictionarySource::File(path.to_path_buf())));
    }
    if let Some(path) = user_dictionary_path()
        && path.is_file()
    {
        match load_dictionary_from_file(&path) {
            Ok(words) => return Ok((words, DictionarySource::File(path))),
            Err(e) => log::warn!("Ignoring unreadable user dictionary {}: {e}", path.display()),
        }
    }
    Ok((
        load_dictionary_from_str(EMBEDDED_DICTIONARY),
        DictionarySource::Embedded,
    ))
}
