use chrono::Utc;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

static SHARED: Lazy<SlugRegistry> = Lazy::new(SlugRegistry::new);

/// The process-wide default registry.
pub fn shared() -> &'static SlugRegistry {
    &SHARED
}

/// Tracks every slug issued so far and resolves collisions by appending a
/// numeric suffix. One instance per deployment scope; tests construct their
/// own for isolation.
pub struct SlugRegistry {
    issued: Mutex<HashSet<String>>,
}

impl Default for SlugRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self {
            issued: Mutex::new(HashSet::new()),
        }
    }

    /// Claim a unique slug derived from `base` and record it.
    ///
    /// An empty base falls back to `post-<unix-seconds>`; bursts of empty
    /// bases within the same second collide on the fallback and resolve
    /// through the suffix loop like any other collision. On collision the
    /// candidate becomes `base-2`, `base-3`, … until a free one is found.
    /// The membership test and insert happen under one lock, so two
    /// concurrent callers can never claim the same slug.
    pub fn issue(&self, base: &str) -> String {
        let base = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base.to_string()
        };

        let mut issued = self.issued.lock().unwrap();
        let mut candidate = base.clone();
        let mut counter = 1u64;
        while issued.contains(&candidate) {
            counter += 1;
            candidate = format!("{}-{}", base, counter);
        }
        issued.insert(candidate.clone());
        candidate
    }

    /// Administrative reset. For test isolation; never part of normal
    /// request handling.
    pub fn reset(&self) {
        self.issued.lock().unwrap().clear();
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.issued.lock().unwrap().contains(slug)
    }

    pub fn len(&self) -> usize {
        self.issued.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.lock().unwrap().is_empty()
    }
}
