use std::fs;
use std::path::Path;

use tempfile::TempDir;

use readme_harness::config::FilterConfig;
use readme_harness::filter::PathFilter;
use readme_harness::models::FileSet;
use readme_harness::progress::NoProgress;
use readme_harness::prompt;
use readme_harness::scanner::scan_directory;

fn scan(root: &Path) -> FileSet {
    let filter = PathFilter::new(&FilterConfig::default());
    scan_directory(root, &filter, &NoProgress)
}

#[test]
fn ignored_subtree_contributes_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("main.py"), "print(1)").unwrap();

    let deps = tmp.path().join("node_modules");
    fs::create_dir_all(deps.join("lodash")).unwrap();
    fs::write(deps.join("lib.js"), "module.exports = {}").unwrap();
    fs::write(deps.join("lodash").join("index.js"), "x").unwrap();

    let files = scan(tmp.path());
    assert_eq!(files.len(), 1);
    assert_eq!(files.get("main.py"), Some("print(1)"));
}

#[test]
fn dotted_directories_pruned() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "console.log(1)").unwrap();

    let git = tmp.path().join(".git");
    fs::create_dir_all(git.join("objects")).unwrap();
    fs::write(git.join("HEAD"), "ref: refs/heads/main").unwrap();
    fs::write(git.join("objects").join("pack"), "binary").unwrap();

    let files = scan(tmp.path());
    assert_eq!(files.paths().collect::<Vec<_>>(), vec!["app.js"]);
}

#[test]
fn ignored_extension_excluded_while_sibling_kept() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), "same content").unwrap();
    fs::write(tmp.path().join("notes.yml"), "same content").unwrap();

    let files = scan(tmp.path());
    assert_eq!(files.len(), 1);
    assert_eq!(files.get("notes.txt"), Some("same content"));
    assert!(files.get("notes.yml").is_none());
}

#[test]
fn hidden_and_listed_files_excluded() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "SECRET=1").unwrap();
    fs::write(tmp.path().join("Cargo.toml"), "[package]").unwrap();
    fs::write(tmp.path().join("src.rs"), "fn main() {}").unwrap();

    let files = scan(tmp.path());
    assert_eq!(files.paths().collect::<Vec<_>>(), vec!["src.rs"]);
}

#[test]
fn nested_keys_are_posix_relative_without_dot_prefix() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("src").join("parser");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("lexer.rs"), "struct Lexer;").unwrap();

    let files = scan(tmp.path());
    assert_eq!(files.get("src/parser/lexer.rs"), Some("struct Lexer;"));
    assert!(files.paths().all(|p| !p.starts_with("./")));
}

#[test]
fn empty_directory_yields_empty_set() {
    let tmp = TempDir::new().unwrap();
    let files = scan(tmp.path());
    assert!(files.is_empty());
}

#[test]
fn missing_directory_yields_empty_set_without_panicking() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");
    let files = scan(&missing);
    assert!(files.is_empty());
}

#[test]
fn file_as_root_yields_empty_set() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    fs::write(&file, "content").unwrap();
    assert!(scan(&file).is_empty());
}

#[test]
fn invalid_utf8_decoded_leniently() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("mixed.txt"), b"ok \xff\xfe bytes").unwrap();

    let files = scan(tmp.path());
    let content = files.get("mixed.txt").unwrap();
    assert!(content.starts_with("ok "));
    assert!(content.ends_with(" bytes"));
}

#[test]
fn scan_order_is_stable_across_runs() {
    let tmp = TempDir::new().unwrap();
    for name in ["zeta.rs", "alpha.rs", "mid.rs"] {
        fs::write(tmp.path().join(name), name).unwrap();
    }
    let sub = tmp.path().join("lib");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("util.rs"), "x").unwrap();

    let first: Vec<String> = scan(tmp.path()).paths().map(String::from).collect();
    let second: Vec<String> = scan(tmp.path()).paths().map(String::from).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn scanned_set_assembles_deterministically() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.py"), "print('a')").unwrap();
    fs::write(tmp.path().join("b.py"), "print('b')").unwrap();

    let doc1 = prompt::assemble(&scan(tmp.path()));
    let doc2 = prompt::assemble(&scan(tmp.path()));
    assert_eq!(doc1, doc2);
    assert!(doc1.contains("--- File: a.py ---"));
    assert!(doc1.contains("--- File: b.py ---"));
}

#[test]
fn custom_filter_rules_respected_by_scan() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("keep.rs"), "k").unwrap();
    let vendor = tmp.path().join("vendor");
    fs::create_dir(&vendor).unwrap();
    fs::write(vendor.join("dep.rs"), "d").unwrap();

    let filter = PathFilter::new(&FilterConfig {
        ignore_dirs: vec!["vendor".to_string()],
        ignore_extensions: vec![],
        ignore_files: vec![],
    });
    let files = scan_directory(tmp.path(), &filter, &NoProgress);
    assert_eq!(files.paths().collect::<Vec<_>>(), vec!["keep.rs"]);
}
