#![allow(clippy::unwrap_used)]
//! End-to-end contract of the lookup pipeline and the renderer.
//!
//! A canned API stands in for the network; the cache lives in a temp dir.

use std::cell::Cell;
use std::time::Duration;

use pons_cli::api::{ApiError, DictionaryApi, Fetched};
use pons_cli::cache::{CacheStore, derive_key};
use pons_cli::lookup::{self, Lookup};
use pons_cli::render::render_translation;
use tempfile::TempDir;

const RESPONSE: &str = r#"[
  {
    "lang": "en",
    "hits": [
      {
        "type": "entry",
        "roms": [
          {
            "headword": "bank",
            "arabs": [
              {
                "header": "<strong class=\"tense\">1.</strong> bank <span class=\"sense\">(institution)</span>:",
                "translations": [
                  {"source": "<strong class=\"headword\">bank</strong>", "target": "Bank <span class=\"genus\"><acronym title=\"feminine\">f</acronym></span>"}
                ]
              },
              {
                "header": "<strong class=\"tense\">2.</strong> bank <span class=\"sense\">(of river)</span>:",
                "translations": [
                  {"source": "bank", "target": "Ufer <acronym title=\"neuter\">nt</acronym>"},
                  {"source": "river bank", "target": "Flussufer"}
                ]
              }
            ]
          },
          {
            "headword": "bank",
            "arabs": [
              {
                "header": "to bank money",
                "translations": [{"source": "to bank", "target": "einzahlen"}]
              }
            ]
          }
        ]
      },
      {
        "type": "translation",
        "source": "<strong>bank</strong> holiday",
        "target": "Feiertag"
      }
    ]
  }
]"#;

struct CannedApi {
    fetched: Fetched,
    calls: Cell<usize>,
}

impl DictionaryApi for CannedApi {
    async fn fetch_translation(&self, _word: &str, _dict: &str) -> Result<Fetched, ApiError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.fetched.clone())
    }

    async fn fetch_dictionaries(&self) -> Result<Vec<u8>, ApiError> {
        Err(ApiError::Status(503))
    }
}

fn render(lookup: &Lookup) -> String {
    let Lookup::Found(response) = lookup else {
        panic!("expected a translation");
    };
    let mut out = Vec::new();
    render_translation(&mut out, response, "ende", 60).unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_fetched_and_cached_lookups_render_the_same() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::open(temp_dir.path().to_path_buf()).unwrap();
    let api = CannedApi {
        fetched: Fetched::Body(RESPONSE.as_bytes().to_vec()),
        calls: Cell::new(0),
    };
    let ttl = Duration::from_secs(60);

    let fetched = lookup::translate(&api, &cache, ttl, "bank", "ende")
        .await
        .unwrap();
    let cached = lookup::translate(&api, &cache, ttl, "bank", "ende")
        .await
        .unwrap();

    assert_eq!(api.calls.get(), 1);
    assert_eq!(render(&fetched), render(&cached));

    let on_disk = std::fs::read(cache.entry_path(&derive_key("bank", "ende"))).unwrap();
    assert_eq!(on_disk, RESPONSE.as_bytes());
}

#[tokio::test]
async fn test_rendered_layout() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::open(temp_dir.path().to_path_buf()).unwrap();
    let api = CannedApi {
        fetched: Fetched::Body(RESPONSE.as_bytes().to_vec()),
        calls: Cell::new(0),
    };

    let result = lookup::translate(&api, &cache, Duration::from_secs(60), "bank", "ende")
        .await
        .unwrap();
    let text = render(&result);

    assert!(text.contains("EN > DE"));
    assert!(text.contains("I. bank"));
    assert!(text.contains("II. bank"));
    assert!(text.contains("1. bank (institution):"));
    assert!(text.contains("2. bank (of river):"));
    assert!(text.contains(&format!("{:<30}{}", "bank", "Bank f")));
    assert!(text.contains(&format!("{:<30}{}", "river bank", "Flussufer")));
    assert!(text.contains(&format!("{:<30}{}", "bank holiday", "Feiertag")));
    assert!(!text.contains('<'));

    let first = text.find("I. bank").unwrap();
    let second = text.find("II. bank").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_no_content_leaves_cache_empty() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::open(temp_dir.path().to_path_buf()).unwrap();
    let api = CannedApi {
        fetched: Fetched::NoContent,
        calls: Cell::new(0),
    };

    let result = lookup::translate(&api, &cache, Duration::from_secs(60), "qwzx", "ende")
        .await
        .unwrap();

    assert_eq!(result, Lookup::NotFound);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_dictionary_list_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::open(temp_dir.path().to_path_buf()).unwrap();
    let api = CannedApi {
        fetched: Fetched::NoContent,
        calls: Cell::new(0),
    };

    let err = lookup::dictionaries(&api, &cache, Duration::from_secs(60))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("bad status code: 503"));
}
