mod common;

use common::TestEnv;
use predicates::str::contains;
use serde_json::Value;

#[test]
fn add_list_stats_json_cycle() {
    let env = TestEnv::new();

    let add = env.run_json(&[
        "add", "--title", "Dune", "--author", "Frank Herbert", "--year", "1965", "--genre",
        "Sci-Fi", "--read",
    ]);
    assert_eq!(add["ok"], true);
    assert_eq!(add["data"]["title"], "Dune");
    assert_eq!(add["data"]["read"], true);

    env.run_json(&[
        "add", "--title", "Emma", "--author", "Jane Austen", "--year", "1815",
    ]);

    let list = env.run_json(&["list"]);
    let books = list["data"].as_array().expect("list array");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[1]["read"], false);

    let stats = env.run_json(&["stats"]);
    assert_eq!(stats["data"]["total"], 2);
    assert_eq!(stats["data"]["percent_read"], 50.0);
}

#[test]
fn remove_is_case_insensitive_and_counts() {
    let env = TestEnv::new();
    env.write_library(
        r#"[
            {"title": "Foo", "author": "A", "year": 2001, "genre": "X", "read": false},
            {"title": "foo", "author": "B", "year": 2002, "genre": "Y", "read": true},
            {"title": "Bar", "author": "C", "year": 2003, "genre": "Z", "read": false}
        ]"#,
    );

    let removed = env.run_json(&["remove", "FOO"]);
    assert_eq!(removed["data"]["removed"], 2);

    let again = env.run_json(&["remove", "FOO"]);
    assert_eq!(again["data"]["removed"], 0);

    let saved = env.saved_library();
    let titles: Vec<&str> = saved
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|b| b["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Bar"]);
}

#[test]
fn search_author_text_output() {
    let env = TestEnv::new();
    env.write_library(
        r#"[{"title": "The Hobbit", "author": "J.R.R. Tolkien", "year": 1937, "genre": "Fantasy", "read": true}]"#,
    );

    env.cmd()
        .args(["search", "author", "tolkien"])
        .assert()
        .success()
        .stdout(contains(
            "1. The Hobbit by J.R.R. Tolkien (1937) - Fantasy - Read",
        ));

    env.cmd()
        .args(["search", "title", "silmarillion"])
        .assert()
        .success()
        .stdout(contains("No matching books found."));
}

#[test]
fn invalid_year_is_reported_in_json_envelope() {
    let env = TestEnv::new();

    let out = env
        .cmd()
        .args(["--json", "add", "--title", "Dune", "--author", "Herbert", "--year", "soon"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let err: Value = serde_json::from_slice(&out).expect("error json output");
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "INVALID_YEAR");
    assert!(!env.library.exists());
}

#[test]
fn corrupt_library_reports_decode_error_code() {
    let env = TestEnv::new();
    env.write_library("not json");

    let out = env
        .cmd()
        .args(["--json", "list"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let err: Value = serde_json::from_slice(&out).expect("error json output");
    assert_eq!(err["error"]["code"], "DECODE_ERROR");
    assert!(err["error"]["message"]
        .as_str()
        .unwrap_or("")
        .contains("library.txt"));
}

#[test]
fn every_command_has_help() {
    let env = TestEnv::new();
    for args in [
        vec!["--help"],
        vec!["add", "--help"],
        vec!["remove", "--help"],
        vec!["search", "--help"],
        vec!["list", "--help"],
        vec!["stats", "--help"],
    ] {
        env.cmd().args(&args).assert().success();
    }
}
