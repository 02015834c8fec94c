//! Generic key → handle resource cache.
//!
//! One cache type serves both asset kinds; everything format-specific
//! (decoding, validity, the exporter serialization) lives behind
//! [`ResourceBackend`]. The texture and audio backends share every cache
//! invariant: a key is never silently replaced, an invalid decode is an
//! error, and unloading an absent key is a logged no-op.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Error;
use crate::logger::Logger;

pub trait ResourceBackend {
    type Handle;
    /// Constants emitted by the exporter and compiled into the binary.
    type Embedded: ?Sized;

    /// Asset kind name used in log lines and errors ("texture", "audio").
    const KIND: &'static str;

    fn decode_path(&mut self, path: &Path) -> Result<Self::Handle, Error>;
    fn decode_embedded(&mut self, data: &Self::Embedded) -> Result<Self::Handle, Error>;
    fn is_valid(&self, handle: &Self::Handle) -> bool;
    fn release(&mut self, handle: &mut Self::Handle);

    /// Config gate for [`ResourceCache::export_all`].
    fn export_enabled(&self) -> bool;
    /// Decode `source` from disk and write it as an embeddable Rust module
    /// under `out_dir`; returns the written path.
    fn export_module(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, Error>;
}

pub struct ResourceCache<B: ResourceBackend> {
    backend: B,
    entries: HashMap<String, B::Handle>,
    logger: Arc<Logger>,
}

impl<B: ResourceBackend> ResourceCache<B> {
    pub fn new(backend: B, logger: Arc<Logger>) -> Self {
        ResourceCache {
            backend,
            entries: HashMap::new(),
            logger,
        }
    }

    pub fn load_from_path(&mut self, key: &str, path: &Path) -> Result<(), Error> {
        if self.skip_duplicate(key) {
            return Ok(());
        }
        let handle = match self.backend.decode_path(path) {
            Ok(h) => h,
            Err(e) => {
                self.logger.error(&e.to_string());
                return Err(e);
            }
        };
        self.insert_checked(key, handle)
    }

    pub fn load_embedded(&mut self, key: &str, data: &B::Embedded) -> Result<(), Error> {
        if self.skip_duplicate(key) {
            return Ok(());
        }
        let handle = match self.backend.decode_embedded(data) {
            Ok(h) => h,
            Err(e) => {
                self.logger.error(&e.to_string());
                return Err(e);
            }
        };
        self.insert_checked(key, handle)
    }

    /// Insert an already-decoded handle (e.g. a synthesized sound).
    pub fn load_handle(&mut self, key: &str, handle: B::Handle) -> Result<(), Error> {
        if self.skip_duplicate(key) {
            return Ok(());
        }
        self.insert_checked(key, handle)
    }

    pub fn get(&self, key: &str) -> Result<&B::Handle, Error> {
        match self.entries.get(key) {
            Some(handle) => Ok(handle),
            None => {
                let err = Error::KeyNotFound {
                    kind: B::KIND,
                    key: key.to_string(),
                };
                self.logger.error(&err.to_string());
                Err(err)
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unload(&mut self, key: &str) {
        match self.entries.remove(key) {
            Some(mut handle) => {
                self.backend.release(&mut handle);
                self.logger
                    .info(&format!("Unloaded {} '{}'.", B::KIND, key));
            }
            None => {
                self.logger.warning(&format!(
                    "Cannot unload {} '{}': not loaded.",
                    B::KIND,
                    key
                ));
            }
        }
    }

    pub fn unload_all(&mut self) {
        for (_, handle) in self.entries.iter_mut() {
            self.backend.release(handle);
        }
        self.entries.clear();
        self.logger
            .info(&format!("Unloaded all {} resources.", B::KIND));
    }

    /// Serialize every asset in `table` into an embeddable source module
    /// under `out_dir`. Development-only; a missing or unreadable source is
    /// logged and skipped so the remaining assets still get written.
    pub fn export_all(&mut self, table: &[(&str, &str)], out_dir: &Path) {
        if !self.backend.export_enabled() {
            self.logger
                .info(&format!("{} module export disabled.", B::KIND));
            return;
        }
        if let Err(e) = std::fs::create_dir_all(out_dir) {
            self.logger.error(&format!(
                "Cannot create {} module directory {}: {e}",
                B::KIND,
                out_dir.display()
            ));
            return;
        }
        for (key, source) in table {
            match self.backend.export_module(Path::new(source), out_dir) {
                Ok(written) => {
                    self.logger.info(&format!(
                        "Exported {} '{}' to {}.",
                        B::KIND,
                        key,
                        written.display()
                    ));
                }
                Err(e) => self.logger.error(&e.to_string()),
            }
        }
        self.logger
            .info(&format!("{} module export completed.", B::KIND));
    }

    fn skip_duplicate(&self, key: &str) -> bool {
        if self.entries.contains_key(key) {
            let err = Error::DuplicateKey {
                kind: B::KIND,
                key: key.to_string(),
            };
            self.logger.warning(&format!("{err}. Skipping load."));
            true
        } else {
            false
        }
    }

    fn insert_checked(&mut self, key: &str, handle: B::Handle) -> Result<(), Error> {
        if !self.backend.is_valid(&handle) {
            let err = Error::LoadFailure {
                kind: B::KIND,
                source: key.to_string(),
                reason: "decoded handle is invalid".to_string(),
            };
            self.logger.error(&err.to_string());
            return Err(err);
        }
        self.entries.insert(key.to_string(), handle);
        self.logger.info(&format!("Loaded {} '{}'.", B::KIND, key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal backend: handles are integers and 0 is invalid.
    struct MockBackend {
        next: u32,
    }

    impl MockBackend {
        fn new() -> Self {
            MockBackend { next: 1 }
        }
    }

    impl ResourceBackend for MockBackend {
        type Handle = u32;
        type Embedded = u32;

        const KIND: &'static str = "mock";

        fn decode_path(&mut self, path: &Path) -> Result<u32, Error> {
            if path.as_os_str().is_empty() {
                return Err(Error::LoadFailure {
                    kind: Self::KIND,
                    source: String::from("<empty>"),
                    reason: String::from("empty path"),
                });
            }
            let id = self.next;
            self.next += 1;
            Ok(id)
        }

        fn decode_embedded(&mut self, data: &u32) -> Result<u32, Error> {
            Ok(*data)
        }

        fn is_valid(&self, handle: &u32) -> bool {
            *handle != 0
        }

        fn release(&mut self, handle: &mut u32) {
            *handle = 0;
        }

        fn export_enabled(&self) -> bool {
            false
        }

        fn export_module(&self, _source: &Path, _out_dir: &Path) -> Result<PathBuf, Error> {
            unreachable!("export disabled in tests")
        }
    }

    fn test_logger() -> Arc<Logger> {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "flappybara_cache_test_{}_{}.txt",
            std::process::id(),
            nanos
        ));
        Arc::new(Logger::to_file(path, false))
    }

    fn make_cache() -> ResourceCache<MockBackend> {
        ResourceCache::new(MockBackend::new(), test_logger())
    }

    #[test]
    fn load_then_get_returns_same_handle() {
        let mut cache = make_cache();
        cache.load_handle("pipe-green", 7).expect("load");
        assert_eq!(*cache.get("pipe-green").expect("get"), 7);
    }

    #[test]
    fn duplicate_load_is_a_no_op() {
        let mut cache = make_cache();
        cache.load_handle("score", 1).expect("first load");
        cache.load_handle("score", 2).expect("duplicate is Ok");
        assert_eq!(*cache.get("score").expect("get"), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_missing_key_fails() {
        let cache = make_cache();
        let err = cache.get("nope").expect_err("absent key");
        assert!(matches!(err, Error::KeyNotFound { .. }));
    }

    #[test]
    fn invalid_handle_is_a_load_failure() {
        let mut cache = make_cache();
        let err = cache.load_handle("broken", 0).expect_err("invalid");
        assert!(matches!(err, Error::LoadFailure { .. }));
        assert!(!cache.contains("broken"));
    }

    #[test]
    fn unload_releases_and_removes() {
        let mut cache = make_cache();
        cache.load_handle("floor", 3).expect("load");
        cache.unload("floor");
        assert!(matches!(
            cache.get("floor"),
            Err(Error::KeyNotFound { .. })
        ));
    }

    #[test]
    fn unload_missing_key_is_a_no_op() {
        let mut cache = make_cache();
        cache.unload("never-loaded");
        assert!(cache.is_empty());
    }

    #[test]
    fn unload_all_clears_everything() {
        let mut cache = make_cache();
        cache.load_handle("a", 1).expect("load a");
        cache.load_handle("b", 2).expect("load b");
        cache.unload_all();
        assert!(cache.is_empty());
    }

    #[test]
    fn decode_failure_propagates() {
        let mut cache = make_cache();
        let err = cache
            .load_from_path("bad", Path::new(""))
            .expect_err("decode failure");
        assert!(matches!(err, Error::LoadFailure { .. }));
    }

    #[test]
    fn load_embedded_round_trip() {
        let mut cache = make_cache();
        cache.load_embedded("player", &9).expect("load");
        assert_eq!(*cache.get("player").expect("get"), 9);
    }
}
