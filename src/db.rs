use serde::Serialize;
use tracing::log;
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Instant;

/// Flat directory of pretty printed JSON documents named `{prefix}_{key}.json`.
pub struct Db<K: Display, V: Serialize> {
    pub dir: PathBuf,
    pub prefix: String,
    pub key_type: std::marker::PhantomData<K>,
    pub value_type: std::marker::PhantomData<V>,
}

impl<K: Display, V: Serialize> Db<K, V> {
    pub fn new(dir: impl Into<PathBuf>, prefix: &str) -> Db<K, V> {
        Db {
            dir: dir.into(),
            prefix: prefix.to_string(),
            key_type: std::marker::PhantomData,
            value_type: std::marker::PhantomData,
        }
    }

    pub fn write(&self, key: &K, obj: &V) -> std::io::Result<PathBuf> {
        let before = Instant::now();
        let json = serde_json::to_string_pretty(&obj)?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.get_path(key);
        std::fs::write(&path, json)?;
        log::debug!("[DB] Wrote to file {} {:.2?}", path.display(), before.elapsed());
        Ok(path)
    }

    pub fn get_path(&self, key: &K) -> PathBuf {
        self.dir.join(format!("{}_{}.json", self.prefix, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempdir::TempDir;

    #[test]
    fn test_write_pretty_json() {
        let dir = TempDir::new("db_test").unwrap();
        let db: Db<String, HashMap<String, String>> = Db::new(dir.path().join("nested"), "roblox_report");
        let mut obj = HashMap::new();
        obj.insert("name".to_string(), "Café 🎮".to_string());

        let path = db.write(&"13058".to_string(), &obj).unwrap();
        assert_eq!(path, dir.path().join("nested").join("roblox_report_13058.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Café 🎮"), "non-ascii stays verbatim");
        assert!(raw.contains("\n  \"name\""), "two space indentation");
        let stored: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, obj);
    }
}
