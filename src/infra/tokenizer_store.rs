// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the fitted tokenizer artifact. Two formats are accepted,
// told apart by content rather than file name:
//
//   1. Keras `Tokenizer.to_json()` export
//        {"class_name": "Tokenizer", "config": {...}}
//   2. HuggingFace tokenizers JSON (anything else)
//
// Either way the result is a `TextTokenizer` the inference
// service can call without knowing which one it got.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf, str::FromStr};
use tokenizers::Tokenizer;

use crate::data::keras_tokenizer::KerasTokenizer;
use crate::domain::traits::TextTokenizer;

impl TextTokenizer for Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self.encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenise: {e}"))?;
        Ok(encoding.get_ids().to_vec())
    }
}

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the tokenizer, detecting its format from the JSON content.
    pub fn load(&self) -> Result<Box<dyn TextTokenizer>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read tokenizer from '{}'", self.path.display()))?;

        if is_keras_export(&raw) {
            tracing::info!("Loading Keras tokenizer from '{}'", self.path.display());
            let tokenizer = KerasTokenizer::from_json(&raw)
                .with_context(|| format!("Cannot load tokenizer from '{}'", self.path.display()))?;
            tracing::info!("Tokenizer vocabulary: {} words", tokenizer.vocab_len());
            return Ok(Box::new(tokenizer));
        }

        tracing::info!("Loading HuggingFace tokenizer from '{}'", self.path.display());
        let tokenizer = Tokenizer::from_str(&raw)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", self.path.display(), e
            ))?;
        Ok(Box::new(tokenizer))
    }
}

fn is_keras_export(raw: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("class_name").and_then(|c| c.as_str()).map(|c| c == "Tokenizer"))
        .unwrap_or(false)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::Path;

    pub(crate) const KERAS_JSON: &str = r#"{
        "class_name": "Tokenizer",
        "config": {
            "num_words": null,
            "lower": true,
            "split": " ",
            "char_level": false,
            "oov_token": null,
            "word_index": "{\"gacor\": 5, \"slot\": 7}"
        }
    }"#;

    // Word-level tokenizer in the HuggingFace on-disk format
    const HF_JSON: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": true
        },
        "pre_tokenizer": {"type": "Whitespace"},
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {"[PAD]": 0, "[UNK]": 1, "gacor": 5, "slot": 7},
            "unk_token": "[UNK]"
        }
    }"#;

    pub(crate) fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_keras_export() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "tokenizer.json", KERAS_JSON);

        let tok = TokenizerStore::new(path).load().unwrap();
        assert_eq!(tok.tokenize("slot gacor").unwrap(), vec![7, 5]);
    }

    #[test]
    fn test_loads_huggingface_tokenizer() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "tokenizer.json", HF_JSON);

        let tok = TokenizerStore::new(path).load().unwrap();
        assert_eq!(tok.tokenize("Slot GACOR").unwrap(), vec![7, 5]);
        assert_eq!(tok.tokenize("slot maxwin").unwrap(), vec![7, 1]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = TokenizerStore::new(tmp.path().join("nope.json")).load().err().unwrap();
        assert!(err.to_string().contains("Cannot read tokenizer"));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "tokenizer.json", "(dp0\nS'word_index'\np1\n");
        assert!(TokenizerStore::new(path).load().is_err());
    }
}
