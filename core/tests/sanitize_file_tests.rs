use modstrip_core::{CoreError, FileOutcome, RunSummary, process_files, sanitize_file};
use std::fs;

#[test]
fn matching_file_is_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("out.js");
    fs::write(
        &p,
        "\"use strict\";\nObject.defineProperty(exports, \"__esModule\", { value: true });\nexports.run = run;\nexport {};\n",
    )
    .unwrap();

    let r = sanitize_file(&p).unwrap();
    assert!(r.modified);
    assert_eq!(r.match_count, 2);
    assert_eq!(
        fs::read_to_string(&p).unwrap(),
        "\"use strict\";\nexports.run = run;\n"
    );
}

#[test]
fn clean_file_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("clean.js");
    fs::write(&p, "const y = 2;").unwrap();
    let before = fs::metadata(&p).unwrap().modified().unwrap();

    let r = sanitize_file(&p).unwrap();
    assert!(!r.modified);
    assert_eq!(r.match_count, 0);
    assert_eq!(fs::metadata(&p).unwrap().modified().unwrap(), before);
    assert_eq!(fs::read_to_string(&p).unwrap(), "const y = 2;");
}

#[test]
fn second_run_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("twice.js");
    fs::write(&p, "export {};\nconst x = 1;\n").unwrap();

    assert!(sanitize_file(&p).unwrap().modified);
    let after_first = fs::read_to_string(&p).unwrap();
    let stamp = fs::metadata(&p).unwrap().modified().unwrap();

    let second = sanitize_file(&p).unwrap();
    assert!(!second.modified);
    assert_eq!(fs::read_to_string(&p).unwrap(), after_first);
    assert_eq!(fs::metadata(&p).unwrap().modified().unwrap(), stamp);
}

#[test]
fn unreadable_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("gone.js");
    let err = sanitize_file(&p).unwrap_err();
    assert!(matches!(err, CoreError::Io { ref path, .. } if path == &p));
    assert!(err.to_string().contains("gone.js"));
}

#[test]
fn invalid_utf8_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("bin.js");
    fs::write(&p, [0x65, 0x78, 0xff, 0xfe]).unwrap();
    assert!(sanitize_file(&p).is_err());
}

#[test]
fn one_failure_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.js");
    let b = dir.path().join("b.js");
    let c = dir.path().join("c.js");
    fs::write(&a, "export {};\nA();\n").unwrap();
    fs::write(&c, "C();\n").unwrap();

    let results = process_files(vec![a.clone(), b.clone(), c.clone()]);
    assert_eq!(
        results.iter().map(|r| r.path.clone()).collect::<Vec<_>>(),
        vec![a.clone(), b, c]
    );
    assert!(matches!(
        results[0].outcome,
        FileOutcome::Cleaned {
            match_count: 1,
            chars_removed: 11
        }
    ));
    assert!(matches!(results[1].outcome, FileOutcome::Failed(_)));
    assert!(matches!(results[2].outcome, FileOutcome::Unchanged));

    let s: RunSummary = results.iter().collect();
    assert_eq!((s.cleaned, s.unchanged, s.failed, s.total()), (1, 1, 1, 3));
    assert_eq!(s.chars_removed, 11);
    assert_eq!(fs::read_to_string(&a).unwrap(), "A();\n");
}

#[test]
fn write_failure_is_counted_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked.js");
    let open = dir.path().join("open.js");
    fs::write(&locked, "export {};\nL();\n").unwrap();
    fs::write(&open, "export {};\nO();\n").unwrap();

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&locked, perms).unwrap();
    // root ignores the read-only bit
    if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
        return;
    }

    let results = process_files(vec![locked.clone(), open.clone()]);
    assert!(matches!(
        &results[0].outcome,
        FileOutcome::Failed(CoreError::Io { path, .. }) if path == &locked
    ));
    assert!(matches!(results[1].outcome, FileOutcome::Cleaned { .. }));

    let s: RunSummary = results.iter().collect();
    assert_eq!((s.cleaned, s.failed), (1, 1));
    assert_eq!(fs::read_to_string(&locked).unwrap(), "export {};\nL();\n");
    assert_eq!(fs::read_to_string(&open).unwrap(), "O();\n");
}
