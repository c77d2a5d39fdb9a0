use serde::{Deserialize, Serialize};

/// A dictionary offered by the API, e.g. `ende` (English ⇄ German).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub key: String,
    #[serde(rename = "simple_label", default)]
    pub label: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Dictionary {
    /// Only two-language dictionaries can be selected for lookups.
    pub fn is_bilingual(&self) -> bool {
        self.languages.len() == 2
    }
}

/// Body of a successful dictionary lookup: one block per source language.
pub type TranslationResponse = Vec<LanguageBlock>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBlock {
    pub lang: String,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One match. When `roms` is non-empty, `source` and `target` are unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(default)]
    pub roms: Vec<Rom>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}

/// A headword grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rom {
    #[serde(default)]
    pub headword: String,
    #[serde(default)]
    pub arabs: Vec<Arab>,
}

/// A sense group under a headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arab {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub translations: Vec<TranslationPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPair {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}
