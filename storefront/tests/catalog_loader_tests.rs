// storefront/tests/catalog_loader_tests.rs

use std::collections::HashMap;
use storefront::config::AppConfig;
use storefront::services::catalog_loader::open_catalog;
use storefront_core::{CatalogSource, JsonDirSource};
use tempfile::tempdir;

fn config_for(data_dir: &std::path::Path, seed: bool) -> AppConfig {
  let vars: HashMap<&str, String> = HashMap::from([
    ("DATA_DIR", data_dir.display().to_string()),
    ("SEED_CATALOG", seed.to_string()),
  ]);
  AppConfig::from_lookup(|name| vars.get(name).cloned()).expect("valid config")
}

#[tokio::test]
async fn empty_data_dir_stays_empty_without_seeding() {
  let dir = tempdir().expect("temp dir");
  let store = open_catalog(&config_for(dir.path(), false)).await.expect("catalog opens");

  assert!(store.is_empty());
  // Missing files are created empty.
  let source = JsonDirSource::new(dir.path());
  assert_eq!(tokio::fs::read_to_string(source.products_path()).await.unwrap().trim(), "[]");
}

#[tokio::test]
async fn empty_data_dir_is_seeded_when_enabled() {
  let dir = tempdir().expect("temp dir");
  let store = open_catalog(&config_for(dir.path(), true)).await.expect("catalog opens");

  assert_eq!(store.len(), 5);
  assert_eq!(store.categories().len(), 2);

  // The seeded catalog was written and loads back on the next start.
  let reloaded = JsonDirSource::new(dir.path()).load().await.expect("reload");
  assert_eq!(reloaded.products.len(), 5);
  let again = open_catalog(&config_for(dir.path(), true)).await.expect("catalog reopens");
  assert_eq!(again.get(4).map(|p| p.name.as_str()), Some("Cast Iron Skillet"));
}

#[tokio::test]
async fn existing_catalog_is_not_overwritten_by_seeding() {
  let dir = tempdir().expect("temp dir");
  tokio::fs::write(
    dir.path().join("products.json"),
    r#"[{"id": 7, "name": "Tea Tin", "price": "6.50", "category_id": 1}]"#,
  )
  .await
  .unwrap();

  let store = open_catalog(&config_for(dir.path(), true)).await.expect("catalog opens");
  assert_eq!(store.len(), 1);
  assert!(store.contains(7));
}
