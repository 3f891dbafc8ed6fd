// Character-level prefix tree over every sentence of the book

use std::collections::{BTreeMap, HashMap};
use tracing::info;

use crate::error::Result;
use crate::frequency::capitalize;

pub mod honorifics;
pub mod splitter;

pub use splitter::SentenceSplitter;

type NodeId = usize;
type SentenceId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    /// Sentences whose last character is the edge into this node
    terminal: Vec<SentenceId>,
}

/// Immutable sentence trie addressed by node index
///
/// Honorifics are masked only while splitting; keys are the restored sentences,
/// so "M" and "Mr" already reach sentences opening with "Mr.". Sentence ids
/// follow first appearance in the text and every distinct sentence is stored once.
#[derive(Debug)]
pub struct SentenceTrie {
    nodes: Vec<TrieNode>,
    /// Sentence text indexed by sentence id
    sentences: Vec<String>,
}

impl SentenceTrie {
    /// Split `text` into sentences and index all of them
    pub fn build(text: &str) -> Result<Self> {
        let splitter = SentenceSplitter::new()?;
        let masked = honorifics::mask(text);

        let mut trie = Self {
            nodes: vec![TrieNode::default()],
            sentences: Vec::new(),
        };
        let mut seen: HashMap<String, SentenceId> = HashMap::new();

        for fragment in splitter.split(&masked) {
            // WHY: keys must be plain text or a prefix like "Mr" could never reach a masked "Mr."
            let sentence = honorifics::unmask(fragment);
            if seen.contains_key(&sentence) {
                continue;
            }
            let id = trie.sentences.len();
            trie.insert(&sentence, id);
            seen.insert(sentence.clone(), id);
            trie.sentences.push(sentence);
        }

        info!(
            "Built sentence trie: {} distinct sentences, {} nodes",
            trie.sentences.len(),
            trie.nodes.len()
        );
        Ok(trie)
    }

    fn insert(&mut self, key: &str, id: SentenceId) {
        let mut node_idx = ROOT;
        for ch in key.chars() {
            node_idx = match self.nodes[node_idx].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].children.insert(ch, child);
                    child
                }
            };
        }
        self.nodes[node_idx].terminal.push(id);
    }

    /// Number of distinct sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every sentence starting with `prefix`, in the order they first appear in the text.
    /// The first character of the prefix is capitalized since sentences start with one.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let key = capitalize(prefix);

        let Some(start) = self.walk(&key) else {
            return Vec::new();
        };

        let mut ids = Vec::new();
        let mut stack = vec![start];
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx];
            ids.extend_from_slice(&node.terminal);
            stack.extend(node.children.values().copied());
        }
        ids.sort_unstable();

        ids.into_iter().map(|id| self.sentences[id].clone()).collect()
    }

    fn walk(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(ROOT, |node_idx, ch| self.nodes[node_idx].children.get(&ch).copied())
    }
}
