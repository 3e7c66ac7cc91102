//! Dictionary index supporting exact-word and prefix queries.
//!
//! Words are stored in a trie whose nodes live in a single arena and refer to
//! each other by index. Every node reachable from the root spells a prefix of
//! at least one word, so prefix viability is just "does the walk succeed".

/// Index of a node in the trie arena.
pub type NodeId = usize;

/// The root node, spelling the empty string.
pub const ROOT: NodeId = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    // sorted by letter
    children: Vec<(char, NodeId)>,
    terminal: bool,
}

impl Node {
    fn child(&self, letter: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|i| self.children[i].1)
    }
}

#[derive(Clone, Debug)]
pub struct LexiconIndex {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for LexiconIndex {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }
}

/// Trims and uppercases a raw dictionary entry. `None` for entries that end up empty.
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_uppercase();
    (!word.is_empty()).then_some(word)
}

impl LexiconIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from raw entries of any case and surrounding whitespace.
    /// Entries that are blank after trimming are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Adds one raw entry. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let Some(word) = normalize_word(raw) else {
            return false;
        };
        let mut node = ROOT;
        for letter in word.chars() {
            node = match self.nodes[node].child(letter) {
                Some(next) => next,
                None => self.add_child(node, letter),
            };
        }
        if self.nodes[node].terminal {
            return false;
        }
        self.nodes[node].terminal = true;
        self.word_count += 1;
        true
    }

    fn add_child(&mut self, parent: NodeId, letter: char) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::default());
        let children = &mut self.nodes[parent].children;
        let at = children.partition_point(|&(l, _)| l < letter);
        children.insert(at, (letter, id));
        id
    }

    /// Follows one letter from `node`.
    #[must_use]
    pub fn step(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.nodes.get(node)?.child(letter)
    }

    /// Whether the path to `node` spells a complete word.
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.terminal)
    }

    /// Whether any longer word continues through `node`.
    #[must_use]
    pub fn has_children(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| !n.children.is_empty())
    }

    fn find(&self, s: &str) -> Option<NodeId> {
        s.chars().try_fold(ROOT, |node, letter| self.step(node, letter))
    }

    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.find(s).is_some_and(|node| self.is_terminal(node))
    }

    /// True iff `s` is non-empty and begins (or is) some word.
    #[must_use]
    pub fn is_viable_prefix(&self, s: &str) -> bool {
        !s.is_empty() && self.find(s).is_some()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct non-empty prefixes, i.e. trie nodes below the root.
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl<S: AsRef<str>> FromIterator<S> for LexiconIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_prefixes() {
        let lexicon = LexiconIndex::from_words(["cat", "cats", "at", "a"]);
        assert!(lexicon.is_word("CAT"));
        assert!(lexicon.is_word("CATS"));
        assert!(lexicon.is_word("A"));
        assert!(!lexicon.is_word("CA"));
        assert!(lexicon.is_viable_prefix("CA"));
        assert!(lexicon.is_viable_prefix("CATS"));
        assert!(!lexicon.is_viable_prefix("CATSS"));
        assert!(!lexicon.is_viable_prefix("T"));
    }

    #[test]
    fn test_empty_string_is_not_a_viable_prefix() {
        let lexicon = LexiconIndex::from_words(["go"]);
        assert!(!lexicon.is_viable_prefix(""));
        assert!(!lexicon.is_word(""));
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let lexicon = LexiconIndex::from_words(["  Goat\t", "go\n"]);
        assert!(lexicon.is_word("GOAT"));
        assert!(lexicon.is_word("GO"));
        assert!(!lexicon.is_word("goat"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let mut lexicon = LexiconIndex::from_words(["", "   ", "\t"]);
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.prefix_count(), 0);
        assert!(!lexicon.insert(" "));
    }

    #[test]
    fn test_duplicates_counted_once() {
        let mut lexicon = LexiconIndex::new();
        assert!(lexicon.insert("cat"));
        assert!(!lexicon.insert("CAT"));
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let lexicon = LexiconIndex::from_words(["GO", "GOAT", "GOAL"]);
        // G, GO, GOA, GOAT, GOAL
        assert_eq!(lexicon.prefix_count(), 5);
    }

    #[test]
    fn test_step_walk_matches_queries() {
        let lexicon = LexiconIndex::from_words(["GO", "GOAT"]);
        let g = lexicon.step(ROOT, 'G').unwrap();
        let go = lexicon.step(g, 'O').unwrap();
        assert!(!lexicon.is_terminal(g));
        assert!(lexicon.is_terminal(go));
        assert!(lexicon.has_children(go));
        assert!(lexicon.step(go, 'X').is_none());
    }

    #[test]
    fn test_collect_into_lexicon() {
        let lexicon: LexiconIndex = ["tea", "a", "ten", "to", "TEA"].into_iter().collect();
        assert_eq!(lexicon.len(), 4);
        assert!(lexicon.is_word("TEN"));
        assert!(lexicon.is_viable_prefix("TE"));
        assert!(!lexicon.is_word("TE"));
    }
}
