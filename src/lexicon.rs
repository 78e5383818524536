use std::{
    collections::BTreeSet,
    fs::File,
    io::Read,
    ops::Bound,
    path::Path,
};

use tracing::debug;

use crate::error::Result;

/// The set of playable words, upper-cased and kept in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

impl Lexicon {
    pub fn build<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        debug!(words = words.len(), "built lexicon");

        Lexicon { words }
    }

    /// Reads whitespace-separated words.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Lexicon> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(Lexicon::build(contents.split_whitespace()))
    }

    /// Reads a JSON array of words.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Lexicon> {
        let words: Vec<String> = serde_json::from_reader(reader)?;
        Ok(Lexicon::build(words))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let file = File::open(path)?;
        Lexicon::from_reader(file)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.is_word(&word.to_uppercase())
    }

    /// True iff some word starts with `prefix`. The empty prefix matches any
    /// non-empty lexicon.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.is_viable(&prefix.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    // The two lookups below expect upper-cased input.

    pub(crate) fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub(crate) fn is_viable(&self, prefix: &str) -> bool {
        // smallest word >= prefix is the only candidate worth checking
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .map_or(false, |word| word.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Lexicon;

    fn lexicon() -> Lexicon {
        Lexicon::build(vec!["bass", "bats", "bess", "be"])
    }

    #[test]
    fn build_normalizes_and_dedups() {
        let lexicon = Lexicon::build(vec!["cat", "CAT", "Cat", " dog ", ""]);

        assert_eq!(2, lexicon.len());
        assert_eq!(vec!["CAT", "DOG"], lexicon.iter().collect::<Vec<_>>());
    }

    #[test]
    fn contains_works() {
        let lexicon = lexicon();

        assert!(lexicon.contains("bass"));
        assert!(lexicon.contains("BATS"));
        assert!(lexicon.contains("Be"));
        assert!(!lexicon.contains("bat"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn has_prefix_works() {
        let lexicon = lexicon();

        assert!(lexicon.has_prefix("ba"));
        assert!(lexicon.has_prefix("BES"));
        assert!(lexicon.has_prefix("bats"));
        assert!(!lexicon.has_prefix("bz"));
        assert!(!lexicon.has_prefix("bassoon"));
        assert!(!lexicon.has_prefix("c"));
    }

    #[test]
    fn has_prefix_covers_every_stored_prefix() {
        let lexicon = Lexicon::build(vec!["elan", "eel", "peel", "a", "qat"]);

        for word in lexicon.iter() {
            for end in 0..=word.len() {
                assert!(lexicon.has_prefix(&word[..end]), "{}", &word[..end]);
            }
        }
    }

    #[test]
    fn empty_prefix() {
        assert!(lexicon().has_prefix(""));
        assert!(!Lexicon::build(Vec::<String>::new()).has_prefix(""));
    }

    #[test]
    fn from_reader_splits_on_whitespace() {
        let lexicon = Lexicon::from_reader("alpha beta\ngamma\n\n  delta".as_bytes()).unwrap();

        assert_eq!(4, lexicon.len());
        assert!(lexicon.contains("GAMMA"));
    }

    #[test]
    fn from_json_reader_works() {
        let lexicon = Lexicon::from_json_reader(r#"["bass", "bats"]"#.as_bytes()).unwrap();
        assert!(lexicon.contains("bats"));

        let err = Lexicon::from_json_reader("not json".as_bytes()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn load_works() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "eel elan\npeel").unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(3, lexicon.len());

        let err = Lexicon::load(file.path().with_extension("missing")).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
