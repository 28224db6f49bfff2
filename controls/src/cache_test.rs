use super::*;

#[test]
fn new_cache_is_empty() {
    let cache = PreviewCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(cache.get("a.pdf").is_none());
}

#[test]
fn insert_then_get() {
    let mut cache = PreviewCache::new();
    cache.insert("a.pdf", "data:image/png;base64,AAAA");
    assert!(cache.contains("a.pdf"));
    assert_eq!(cache.get("a.pdf"), Some("data:image/png;base64,AAAA"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn insert_replaces_existing_payload() {
    let mut cache = PreviewCache::new();
    cache.insert("a.pdf", "old");
    cache.insert("a.pdf", "new");
    assert_eq!(cache.get("a.pdf"), Some("new"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn keys_are_exact_matches() {
    let mut cache = PreviewCache::new();
    cache.insert("Report.pdf", "x");
    assert!(!cache.contains("report.pdf"));
    assert!(!cache.contains("Report.pdf "));
}

#[test]
fn clear_removes_everything() {
    let mut cache = PreviewCache::new();
    cache.insert("a.pdf", "1");
    cache.insert("b.pdf", "2");
    cache.clear();
    assert!(cache.is_empty());
    assert!(!cache.contains("a.pdf"));
}
