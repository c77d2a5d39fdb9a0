//! Cache-or-fetch pipelines for translations and the dictionary list.
//!
//! A fresh cache entry is parsed and returned without touching the network.
//! On a miss the response is fetched, parsed, and only then written to the
//! cache, so a malformed payload is never persisted. Cache writes are best
//! effort: a failure is logged and the lookup still succeeds.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

use crate::api::{Dictionary, DictionaryApi, Fetched, TranslationResponse};
use crate::cache::{CacheStore, derive_key};
use crate::logging::best_effort;
use crate::ui::Spinner;

/// Outcome of a translation lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(TranslationResponse),
    /// The API answered 204: nothing to render, nothing cached.
    NotFound,
}

/// Looks up `word` in the dictionary `dict`.
pub async fn translate<A: DictionaryApi>(
    api: &A,
    cache: &CacheStore,
    ttl: Duration,
    word: &str,
    dict: &str,
) -> Result<Lookup> {
    let path = cache.entry_path(&derive_key(word, dict));

    if let Some(body) = cache.read_fresh(&path, ttl)? {
        tracing::debug!("cache hit for {word:?} in {dict}");
        return parse_cached(&body).map(Lookup::Found);
    }

    let fetched = {
        let _spinner = Spinner::new(format!("Looking up {word}..."));
        api.fetch_translation(word, dict)
            .await
            .context("could not fetch translation")?
    };

    match fetched {
        Fetched::NoContent => Ok(Lookup::NotFound),
        Fetched::Body(body) => parse_and_persist(cache, &path, &body).map(Lookup::Found),
    }
}

/// Returns the list of dictionaries offered by the API.
pub async fn dictionaries<A: DictionaryApi>(
    api: &A,
    cache: &CacheStore,
    ttl: Duration,
) -> Result<Vec<Dictionary>> {
    let path = cache.dictionaries_path();

    if let Some(body) = cache.read_fresh(&path, ttl)? {
        return parse_cached(&body);
    }

    let body = {
        let _spinner = Spinner::new("Fetching dictionaries...");
        api.fetch_dictionaries()
            .await
            .context("could not fetch dictionaries")?
    };

    parse_and_persist(cache, &path, &body)
}

fn parse_cached<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).context("could not parse cached response")
}

fn parse_and_persist<T: DeserializeOwned>(cache: &CacheStore, path: &Path, body: &[u8]) -> Result<T> {
    let parsed = serde_json::from_slice(body).context("could not parse response")?;
    best_effort("write cache file", cache.write(path, body));
    Ok(parsed)
}
