//! End-to-end sessions against the built-in filesystem.

use terminal_website::config::{EASTER_EGG, HOME, LS_COLUMN_GAP};
use terminal_website::core::{Recall, Session, VirtualFs};
use terminal_website::models::Timestamp;

fn fs() -> VirtualFs {
    VirtualFs::builtin()
}

fn now() -> Timestamp {
    Timestamp::new(1_700_000_000_000.0, "Tue Nov 14 2023 22:13:20 GMT+0000")
}

/// Submit a line and return the output it produced.
fn run(session: &mut Session, fs: &VirtualFs, line: &str) -> String {
    session
        .submit(line, fs, now())
        .map(|entry| entry.output.clone())
        .unwrap_or_default()
}

fn home_listing() -> String {
    [
        "Documents/",
        "Downloads/",
        "Pictures/",
        "Projects/",
        "Music/",
        "Videos/",
        "Desktop/",
        ".bashrc",
        ".profile",
        ".gitconfig",
        "README.md",
        "CV.md",
    ]
    .join(LS_COLUMN_GAP)
}

#[test]
fn browse_documents_and_come_back() {
    let fs = fs();
    let mut session = Session::new();

    assert_eq!(run(&mut session, &fs, "cd Documents"), "");
    assert_eq!(session.current_path(), "~/Documents");

    let notes = run(&mut session, &fs, "cat notes.md");
    assert!(notes.starts_with("# My Notes"));
    assert!(notes.contains("Set up terminal website"));

    run(&mut session, &fs, "cd ..");
    assert_eq!(session.current_path(), HOME);
    assert_eq!(run(&mut session, &fs, "ls"), home_listing());

    let paths: Vec<&str> = session
        .transcript()
        .iter()
        .map(|e| e.path.as_str())
        .collect();
    assert_eq!(paths, ["~", "~/Documents", "~/Documents", "~"]);
}

#[test]
fn rm_rf_dot_changes_nothing() {
    let fs = fs();
    let mut session = Session::new();

    assert_eq!(run(&mut session, &fs, "rm -rf ."), EASTER_EGG.trim_end());
    assert_eq!(
        run(&mut session, &fs, "rm README.md"),
        "rm: 'README.md' has been removed"
    );
    assert_eq!(run(&mut session, &fs, "ls"), home_listing());
    assert_eq!(
        run(&mut session, &fs, "cat README.md"),
        fs.file_content("~/README.md").unwrap()
    );
}

#[test]
fn missing_file_reports_error() {
    let fs = fs();
    let mut session = Session::new();

    assert_eq!(
        run(&mut session, &fs, "cat nosuchfile.txt"),
        "cat: nosuchfile.txt: No such file or directory"
    );
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn recall_skips_consecutive_duplicates() {
    let fs = fs();
    let mut session = Session::new();
    for line in ["ls", "ls", "pwd", "ls"] {
        run(&mut session, &fs, line);
    }

    assert_eq!(session.history().entries(), ["ls", "pwd", "ls"]);
    assert_eq!(session.transcript().len(), 4);

    let mut input = String::new();
    for _ in 0..3 {
        session.recall_previous().apply(&mut input);
    }
    assert_eq!(input, "ls");

    // Oldest entry: further ArrowUp stays put
    session.recall_previous().apply(&mut input);
    assert_eq!(input, "ls");
    assert_eq!(session.history().cursor(), Some(0));
}

#[test]
fn clear_empties_transcript_including_banner() {
    let fs = fs();
    let mut session = Session::with_banner(now());
    run(&mut session, &fs, "help");
    run(&mut session, &fs, "whoami");
    assert_eq!(session.transcript().len(), 3);

    assert!(session.submit("clear", &fs, now()).is_none());
    assert!(session.transcript().is_empty());

    // Still works afterwards
    assert_eq!(run(&mut session, &fs, "pwd"), "~");
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn recall_on_empty_buffer_is_noop() {
    let mut session = Session::new();
    assert_eq!(session.recall_previous(), Recall::Unchanged);
    assert_eq!(session.recall_next(), Recall::Unchanged);
    assert!(!session.history().is_browsing());
}

#[test]
fn cd_parent_at_home_is_idempotent() {
    let fs = fs();
    let mut session = Session::new();

    for _ in 0..3 {
        assert_eq!(run(&mut session, &fs, "cd .."), "");
        assert_eq!(session.current_path(), HOME);
    }
}

#[test]
fn date_prints_submission_time() {
    let fs = fs();
    let mut session = Session::new();
    assert_eq!(
        run(&mut session, &fs, "date"),
        "Tue Nov 14 2023 22:13:20 GMT+0000"
    );
}

#[test]
fn failed_cd_keeps_directory() {
    let fs = fs();
    let mut session = Session::new();
    run(&mut session, &fs, "cd Projects");

    let out = run(&mut session, &fs, "cd terminal-website");
    assert!(out.starts_with("cd: terminal-website"));
    assert_eq!(session.current_path(), "~/Projects");
}

#[test]
fn long_session_keeps_banner_and_every_entry() {
    let fs = fs();
    let mut session = Session::with_banner(now());
    for i in 0..600 {
        run(&mut session, &fs, &format!("echo {}", i));
    }

    assert_eq!(session.transcript().len(), 601);
    assert_eq!(session.transcript()[0].command, "");
    assert_eq!(session.transcript()[1].command, "echo 0");
    assert_eq!(session.history().len(), 600);
    assert_eq!(session.history().entries()[0], "echo 0");
}

#[test]
fn whitespace_submission_touches_nothing() {
    let fs = fs();
    let mut session = Session::with_banner(now());
    run(&mut session, &fs, "ls");

    let mut input = String::new();
    session.recall_previous().apply(&mut input);
    let cursor = session.history().cursor();

    assert!(session.submit("   ", &fs, now()).is_none());
    assert_eq!(session.history().cursor(), cursor);
    assert_eq!(session.history().entries(), ["ls"]);
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(input, "ls");
}
