// ============================================================
// Layer 4 — Keras Word-Index Tokenizer
// ============================================================
// Reproduces `keras.preprocessing.text.Tokenizer.texts_to_sequences`
// for a single text, driven by the JSON the fitted tokenizer
// exports with `tokenizer.to_json()`:
//
//   {"class_name": "Tokenizer",
//    "config": {"num_words": null, "filters": "...", "lower": true,
//               "split": " ", "char_level": false, "oov_token": "<OOV>",
//               "word_index": "{\"<OOV>\": 1, \"slot\": 2, ...}", ...}}
//
// Keras stores `word_index` as a JSON-encoded string inside the
// config; a plain object is accepted as well.
//
// Per text:
//   1. lowercase (if `lower`)
//   2. replace every char in `filters` with `split`
//   3. split on `split`, dropping empty pieces
//   4. look each word up in `word_index`:
//        known and below `num_words` → its id
//        otherwise                   → OOV id, or dropped if no OOV token

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::domain::traits::TextTokenizer;

/// Keras' default filter set: punctuation, tab and newline.
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

fn default_filters() -> Option<String> {
    Some(DEFAULT_FILTERS.to_string())
}

fn default_lower() -> bool {
    true
}

fn default_split() -> String {
    " ".to_string()
}

/// A field Keras may serialise either inline or as a JSON string.
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeEncoded<T> {
    Encoded(String),
    Inline(T),
}

impl<T: serde::de::DeserializeOwned> MaybeEncoded<T> {
    fn decode(self) -> Result<T> {
        match self {
            MaybeEncoded::Encoded(s) => Ok(serde_json::from_str(&s)?),
            MaybeEncoded::Inline(v)  => Ok(v),
        }
    }
}

#[derive(Deserialize)]
struct KerasEnvelope {
    class_name: String,
    config:     RawConfig,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    num_words:  Option<usize>,
    #[serde(default = "default_filters")]
    filters:    Option<String>,
    #[serde(default = "default_lower")]
    lower:      bool,
    #[serde(default = "default_split")]
    split:      String,
    #[serde(default)]
    char_level: bool,
    #[serde(default)]
    oov_token:  Option<String>,
    word_index: MaybeEncoded<HashMap<String, u32>>,
}

#[derive(Debug, Clone)]
pub struct KerasTokenizer {
    word_index: HashMap<String, u32>,
    num_words:  Option<usize>,
    filters:    String,
    lower:      bool,
    split:      String,
    char_level: bool,
    oov_token:  Option<String>,
}

impl KerasTokenizer {
    /// Parse the output of Keras `Tokenizer.to_json()`.
    pub fn from_json(json: &str) -> Result<Self> {
        let envelope: KerasEnvelope = serde_json::from_str(json)
            .context("Not a Keras tokenizer JSON export")?;

        if envelope.class_name != "Tokenizer" {
            bail!("Expected class_name 'Tokenizer', found '{}'", envelope.class_name);
        }

        let cfg = envelope.config;
        if cfg.split.is_empty() && !cfg.char_level {
            bail!("Keras tokenizer 'split' must not be empty");
        }

        let word_index = cfg.word_index.decode()
            .context("Cannot decode Keras word_index")?;

        tracing::debug!("Keras tokenizer: {} words, oov={:?}", word_index.len(), cfg.oov_token);

        Ok(Self {
            word_index,
            num_words:  cfg.num_words,
            filters:    cfg.filters.unwrap_or_default(),
            lower:      cfg.lower,
            split:      cfg.split,
            char_level: cfg.char_level,
            oov_token:  cfg.oov_token,
        })
    }

    pub fn vocab_len(&self) -> usize {
        self.word_index.len()
    }

    /// Equivalent of `text_to_word_sequence` (or chars when `char_level`).
    fn words(&self, text: &str) -> Vec<String> {
        let text = if self.lower { text.to_lowercase() } else { text.to_string() };

        // char_level skips filtering entirely, as Keras does
        if self.char_level {
            return text.chars().map(String::from).collect();
        }

        let mut translated = String::with_capacity(text.len());
        for c in text.chars() {
            if self.filters.contains(c) {
                translated.push_str(&self.split);
            } else {
                translated.push(c);
            }
        }

        translated
            .split(self.split.as_str())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn oov_id(&self) -> Option<u32> {
        self.oov_token
            .as_ref()
            .and_then(|t| self.word_index.get(t))
            .copied()
    }

    /// `texts_to_sequences([text])[0]`
    pub fn encode(&self, text: &str) -> Vec<u32> {
        // num_words == 0 means "no limit" in Keras
        let limit = self.num_words.filter(|&n| n > 0);
        let oov   = self.oov_id();

        self.words(text)
            .iter()
            .filter_map(|w| match self.word_index.get(w) {
                Some(&id) if limit.map_or(true, |n| (id as usize) < n) => Some(id),
                _ => oov,
            })
            .collect()
    }
}

impl TextTokenizer for KerasTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<u32>> {
        Ok(self.encode(text))
    }
}
