//! Keyword lexicon mapping utterances to directional commands.
//!
//! Matching is a case-insensitive substring scan in entry order; the first
//! keyword found in the transcript wins. One utterance maps to zero or one
//! command.

use serde::{Deserialize, Serialize};
use vitrine_types::Direction;

/// Ordered keyword -> direction mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    entries: Vec<(String, Direction)>,
}

impl Default for Lexicon {
    /// The pt-BR keywords the kiosk ships with.
    fn default() -> Self {
        Self {
            entries: vec![
                ("esquerda".into(), Direction::Left),
                ("direita".into(), Direction::Right),
                ("cima".into(), Direction::Up),
                ("baixo".into(), Direction::Down),
            ],
        }
    }
}

impl Lexicon {
    /// Build a lexicon from explicit entries, e.g. for another locale.
    pub fn new(entries: Vec<(String, Direction)>) -> Self {
        Self { entries }
    }

    /// Map a transcript to a direction, if any keyword occurs in it.
    pub fn parse(&self, transcript: &str) -> Option<Direction> {
        let text = transcript.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| text.contains(keyword.as_str()))
            .map(|&(_, direction)| direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keywords_map() {
        let lex = Lexicon::default();
        assert_eq!(lex.parse("esquerda"), Some(Direction::Left));
        assert_eq!(lex.parse("direita"), Some(Direction::Right));
        assert_eq!(lex.parse("cima"), Some(Direction::Up));
        assert_eq!(lex.parse("baixo"), Some(Direction::Down));
    }

    #[test]
    fn keywords_match_inside_phrases() {
        let lex = Lexicon::default();
        assert_eq!(lex.parse("vai para a esquerda agora"), Some(Direction::Left));
        assert_eq!(lex.parse("PARA CIMA"), Some(Direction::Up));
    }

    #[test]
    fn unknown_utterance_maps_to_nothing() {
        let lex = Lexicon::default();
        assert_eq!(lex.parse("abrir navegador"), None);
        assert_eq!(lex.parse(""), None);
    }

    #[test]
    fn first_keyword_in_entry_order_wins() {
        let lex = Lexicon::default();
        // Both keywords present: entry order decides, not transcript order.
        assert_eq!(lex.parse("baixo e esquerda"), Some(Direction::Left));
    }

    #[test]
    fn custom_locale_entries() {
        let lex = Lexicon::new(vec![
            ("left".into(), Direction::Left),
            ("right".into(), Direction::Right),
        ]);
        assert_eq!(lex.parse("move LEFT please"), Some(Direction::Left));
        assert_eq!(lex.parse("cima"), None);
    }
}
