mod client;
mod model;

pub use client::{ApiError, BASE_URL, DictionaryApi, Fetched, PonsClient};
pub use model::{Arab, Dictionary, Hit, LanguageBlock, Rom, TranslationPair, TranslationResponse};
