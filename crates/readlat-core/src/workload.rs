//! Synthetic workload generation.
//!
//! Produces the markdown-style text blob every backend is seeded with. The
//! content is random but the length is exact, so latency numbers stay
//! comparable across runs even when the text differs.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

/// Section headers a generated block starts with.
const HEADERS: [&str; 5] = [
    "## Task",
    "## Context",
    "## Memory",
    "## Instructions",
    "## Prior Steps",
];

/// Vocabulary sentences are drawn from (with replacement).
const WORDS: [&str; 20] = [
    "agent", "context", "file", "workspace", "user", "task", "memory", "output", "result",
    "query", "document", "step", "action", "tool", "retrieve", "write", "read", "process",
    "analyze", "summarize",
];

/// Sentences per block, inclusive.
const SENTENCES_PER_BLOCK: (usize, usize) = (3, 8);

/// Words per sentence, inclusive.
const WORDS_PER_SENTENCE: (usize, usize) = (8, 18);

/// Immutable text payload shared by every backend in a run.
///
/// Cloning is cheap; all clones point at the same allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Payload(Arc<str>);

impl Payload {
    /// The payload as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The payload as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload").field("len", &self.len()).finish()
    }
}

/// Generate `size` bytes of agent-context style markdown.
///
/// Blocks of one header line, a few sentences and a blank line are appended
/// until the text reaches `size`, then it is cut to exactly `size` bytes.
pub fn generate_context<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Payload {
    let mut text = String::with_capacity(size + 256);

    while text.len() < size {
        push_line(&mut text, HEADERS[rng.gen_range(0..HEADERS.len())]);

        let sentences = rng.gen_range(SENTENCES_PER_BLOCK.0..=SENTENCES_PER_BLOCK.1);
        for _ in 0..sentences {
            let sentence = random_sentence(rng);
            push_line(&mut text, &sentence);
        }

        push_line(&mut text, "");
    }

    // Vocabulary is ASCII, so any byte offset is a char boundary.
    text.truncate(size);
    Payload::from(text)
}

fn push_line(text: &mut String, line: &str) {
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(line);
}

fn random_sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(WORDS_PER_SENTENCE.0..=WORDS_PER_SENTENCE.1);
    let mut sentence = String::with_capacity(count * 10);
    for i in 0..count {
        if i > 0 {
            sentence.push(' ');
        }
        sentence.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
    }
    sentence.push('.');
    sentence
}
