//! Short `surname-year` identifiers for catalog entries.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::RawPaper;

const UNKNOWN_SURNAME: &str = "unknown";

/// Reduce an author name to an id-safe surname.
///
/// Takes the last whitespace-separated token, lowercases it and drops every
/// character outside `a-z`. Returns `None` when nothing survives.
pub fn surname_of(name: &str) -> Option<String> {
    let last = name.split_whitespace().last()?;
    let surname: String = last
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if surname.is_empty() {
        None
    } else {
        Some(surname)
    }
}

/// The unsuffixed identifier for a paper, e.g. `feng-2026`
pub fn base_id(paper: &RawPaper) -> String {
    let surname = paper
        .first_author()
        .and_then(|author| author.name())
        .and_then(|name| surname_of(&name))
        .unwrap_or_else(|| UNKNOWN_SURNAME.to_string());

    format!("{}-{}", surname, paper.year_or_zero())
}

/// Letter suffix for the n-th repeat of a base id: 1 -> "b", 25 -> "z", 26 -> "aa"
fn collision_suffix(collisions: u32) -> String {
    let mut n = collisions + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Hands out unique ids in input order.
///
/// The first paper with a given base id keeps it bare; later ones get `b`,
/// `c`, ... appended. Ids therefore depend on the order papers are fed in.
#[derive(Debug, Default)]
pub struct IdGenerator {
    seen: HashMap<String, u32>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the id for the next paper
    pub fn next_id(&mut self, paper: &RawPaper) -> String {
        let base = base_id(paper);

        match self.seen.entry(base) {
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(0);
                id
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += 1;
                format!("{}{}", entry.key(), collision_suffix(*entry.get()))
            }
        }
    }

    /// Number of distinct base ids seen so far
    pub fn distinct_bases(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawAuthor, RawPaperBuilder};
    use std::collections::HashSet;

    #[test]
    fn test_surname_of() {
        assert_eq!(surname_of("Jane Feng"), Some("feng".to_string()));
        assert_eq!(surname_of("  J.-P. Métaxian "), Some("mtaxian".to_string()));
        assert_eq!(surname_of("O'Brien"), Some("obrien".to_string()));
        assert_eq!(surname_of("Smith-Jones"), Some("smithjones".to_string()));
        assert_eq!(surname_of(""), None);
        assert_eq!(surname_of("王 伟"), None);
    }

    #[test]
    fn test_base_id() {
        let paper = RawPaperBuilder::new("t").author("Jane Feng").author("Al Bo").year(2026).build();
        assert_eq!(base_id(&paper), "feng-2026");

        let anonymous = RawPaperBuilder::new("t").year(2001).build();
        assert_eq!(base_id(&anonymous), "unknown-2001");

        let undated = RawPaperBuilder::new("t").author("Kanamori").build();
        assert_eq!(base_id(&undated), "kanamori-0");
    }

    #[test]
    fn test_plain_string_and_unnamed_authors() {
        let mut paper = RawPaperBuilder::new("t").year(1982).build();
        paper.authors = Some(vec![RawAuthor::Plain("Hiroo Kanamori".to_string())]);
        assert_eq!(base_id(&paper), "kanamori-1982");

        paper.authors = Some(vec![RawAuthor::Named { name: None }]);
        assert_eq!(base_id(&paper), "unknown-1982");
    }

    #[test]
    fn test_collisions_get_letters_from_b() {
        let mut ids = IdGenerator::new();
        let paper = RawPaperBuilder::new("t").author("Jane Feng").year(2026).build();

        assert_eq!(ids.next_id(&paper), "feng-2026");
        assert_eq!(ids.next_id(&paper), "feng-2026b");
        assert_eq!(ids.next_id(&paper), "feng-2026c");
        assert_eq!(ids.distinct_bases(), 1);
    }

    #[test]
    fn test_collision_suffix_past_z() {
        assert_eq!(collision_suffix(1), "b");
        assert_eq!(collision_suffix(25), "z");
        assert_eq!(collision_suffix(26), "aa");
        assert_eq!(collision_suffix(27), "ab");
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut ids = IdGenerator::new();
        let paper = RawPaperBuilder::new("t").author("Li").year(2020).build();
        let generated: HashSet<String> = (0..60).map(|_| ids.next_id(&paper)).collect();
        assert_eq!(generated.len(), 60);
    }
}
