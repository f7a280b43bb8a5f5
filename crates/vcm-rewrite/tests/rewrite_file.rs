//! End-to-end tests for rewriting Vue files on disk.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use vcm_core::{PageKind, RewriteConfig};
use vcm_rewrite::{RewriteError, rewrite_file};

const STYLE_BLOCK: &str = "<style scoped lang=\"scss\">\n.legacy {\n  color: red;\n}\n</style>\n";

const STRIPPED_BLOCK: &str = "<style scoped>\n/* 所有樣式已移至對應的 SCSS 檔案 */\n</style>\n";

fn write_page(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8Path::from_path(dir.path())
        .unwrap()
        .join("pages")
        .join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// One `<div>` per old class name, followed by the style block.
fn page_source(page: PageKind) -> String {
    let mut src = String::from("<template>\n");
    for (from, _) in page.table() {
        src.push_str(&format!("  <div class=\"{from}\"></div>\n"));
    }
    src.push_str("</template>\n\n<script setup lang=\"ts\">\nconst canvas = ref(null)\n</script>\n\n");
    src.push_str(STYLE_BLOCK);
    src
}

fn expected_output(page: PageKind) -> String {
    let mut out = String::from("<template>\n");
    for (_, to) in page.table() {
        out.push_str(&format!("  <div class=\"{to}\"></div>\n"));
    }
    out.push_str("</template>\n\n<script setup lang=\"ts\">\nconst canvas = ref(null)\n</script>\n\n");
    out.push_str(STRIPPED_BLOCK);
    out
}

#[test]
fn test_every_mapped_class_is_renamed() {
    let dir = TempDir::new().unwrap();
    for page in PageKind::ALL {
        let path = write_page(&dir, page.identifier(), &page_source(page));

        let report = rewrite_file(&path, &RewriteConfig::default()).unwrap();

        assert_eq!(report.page, Some(page));
        assert_eq!(report.class_replacements, page.table().len());
        assert!(report.style_stripped);
        assert!(report.changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), expected_output(page));
    }
}

#[test]
fn test_all_classes_in_one_attribute() {
    let dir = TempDir::new().unwrap();
    for page in PageKind::ALL {
        let olds: Vec<_> = page.table().iter().map(|(from, _)| *from).collect();
        let news: Vec<_> = page.table().iter().map(|(_, to)| *to).collect();
        let src = format!("<section class=\"{} keep-me\"></section>\n", olds.join(" "));
        let path = write_page(&dir, page.identifier(), &src);

        rewrite_file(&path, &RewriteConfig::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("<section class=\"{} keep-me\"></section>\n", news.join(" "))
        );
    }
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    for page in PageKind::ALL {
        let path = write_page(&dir, page.identifier(), &page_source(page));

        rewrite_file(&path, &RewriteConfig::default()).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let report = rewrite_file(&path, &RewriteConfig::default()).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(report.class_replacements, 0);
        assert!(!report.style_stripped);
        assert!(!report.changed);
        assert_eq!(first, second);
    }
}

#[test]
fn test_unmapped_classes_untouched() {
    let dir = TempDir::new().unwrap();
    let src = "<div class=\"admin-card shadow-lg rounded\"><span class=\"badge\"></span></div>\n";
    let path = write_page(&dir, "admin.vue", src);

    let report = rewrite_file(&path, &RewriteConfig::default()).unwrap();

    assert_eq!(report.class_replacements, 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<div class=\"p-admin__card shadow-lg rounded\"><span class=\"badge\"></span></div>\n"
    );
}

#[test]
fn test_tables_are_not_mixed() {
    let dir = TempDir::new().unwrap();
    // `token-list` belongs to the admin table only.
    let src = "<ul class=\"token-list\"></ul><input class=\"token-input\">\n";
    let path = write_page(&dir, "editor.vue", src);

    rewrite_file(&path, &RewriteConfig::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<ul class=\"token-list\"></ul><input class=\"p-editor__token-input\">\n"
    );
}

#[test]
fn test_unknown_file_only_strips_style() {
    let dir = TempDir::new().unwrap();
    let src = format!("<div class=\"editor-page\"></div>\n{STYLE_BLOCK}");
    let path = write_page(&dir, "index.vue", &src);

    let report = rewrite_file(&path, &RewriteConfig::default()).unwrap();

    assert_eq!(report.page, None);
    assert_eq!(report.class_replacements, 0);
    assert!(report.style_stripped);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("<div class=\"editor-page\"></div>\n{STRIPPED_BLOCK}")
    );
}

#[test]
fn test_file_without_changes_is_rewritten_verbatim() {
    let dir = TempDir::new().unwrap();
    let src = "<template><p class=\"plain\">hi</p></template>\n";
    let path = write_page(&dir, "queue-status.vue", src);

    let report = rewrite_file(&path, &RewriteConfig::default()).unwrap();

    assert!(!report.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), src);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = Utf8Path::from_path(dir.path()).unwrap().join("editor.vue");

    let err = rewrite_file(&path, &RewriteConfig::default()).unwrap_err();

    assert!(matches!(err, RewriteError::Read { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_non_utf8_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = Utf8Path::from_path(dir.path()).unwrap().join("admin.vue");
    fs::write(&path, [0xff, 0xfe, b'<', b'd']).unwrap();

    let err = rewrite_file(&path, &RewriteConfig::default()).unwrap_err();

    match err {
        RewriteError::Read { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected read error, got {other:?}"),
    }
    assert_eq!(fs::read(&path).unwrap(), [0xff, 0xfe, b'<', b'd']);
}

#[test]
fn test_multiple_style_blocks_stripped_in_one_run() {
    let dir = TempDir::new().unwrap();
    let src = format!("<div class=\"admin-page\"></div>\n{STYLE_BLOCK}<style scoped lang=\"scss\">.b{{}}</style>\n");
    let path = write_page(&dir, "admin.vue", &src);

    let first = rewrite_file(&path, &RewriteConfig::default()).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    assert!(first.style_stripped);
    assert_eq!(
        after_first,
        format!("<div class=\"p-admin\"></div>\n{STRIPPED_BLOCK}{STRIPPED_BLOCK}")
    );

    let second = rewrite_file(&path, &RewriteConfig::default()).unwrap();

    assert!(!second.style_stripped);
    assert!(!second.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}
