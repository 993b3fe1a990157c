//
//  bit
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::PathBuf;

use assert_cmd::Command;
use git2::Repository;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

const PULL_REQUESTS_PATH: &str = r"^/repositories/teamsinspace/documentation-tests/pullrequests";

/// A working tree with the given remotes plus a credential file next to it.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(remotes: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path().join("work")).unwrap();
        for (name, url) in remotes {
            repo.remote(name, url).unwrap();
        }
        Self { dir }
    }

    fn without_git() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("work")).unwrap();
        Self { dir }
    }

    fn work_tree(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    fn credentials_path(&self) -> PathBuf {
        self.dir.path().join("config").join("bit")
    }

    fn write_credentials(&self, content: &str) {
        let path = self.credentials_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn bit(&self, api_url: &str) -> Command {
        let mut cmd = Command::cargo_bin("bit").unwrap();
        cmd.env_remove("BIT_DEBUG")
            .env_remove("BIT_WEB_URL")
            .env("GIT_WORK_TREE", self.work_tree())
            .env("BIT_CONFIG", self.credentials_path())
            .env("BIT_API_URL", api_url)
            .current_dir(self.dir.path());
        cmd
    }
}

fn valid_credentials(fixture: &Fixture) {
    fixture.write_credentials("[default]\nusername = u\npassword = p\n\n");
}

fn unused_api() -> &'static str {
    "http://127.0.0.1:9"
}

#[test]
fn pr_list_prints_sorted_and_aligned() {
    let fixture = Fixture::new(&[
        ("origin", "git@bitbucket.org:me/fork.git"),
        ("upstream", "https://bitbucket.org/teamsinspace/documentation-tests.git"),
    ]);
    valid_credentials(&fixture);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", Matcher::Regex(PULL_REQUESTS_PATH.to_string()))
        .match_query(Matcher::UrlEncoded(
            "fields".to_string(),
            "values.id,values.title".to_string(),
        ))
        .match_header("authorization", "Basic dTpw")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"values": [
                {"id": 3, "title": "C"},
                {"id": 1, "title": "A"},
                {"id": 2, "title": "B"}
            ]})
            .to_string(),
        )
        .create();

    fixture
        .bit(&server.url())
        .args(["pr", "list"])
        .assert()
        .success()
        .stdout("      #1  A\n      #2  B\n      #3  C\n");

    mock.assert();
}

#[test]
fn pr_list_outside_bitbucket_repository() {
    let fixture = Fixture::new(&[("origin", "git@github.com:owner/repo.git")]);
    valid_credentials(&fixture);

    fixture
        .bit(unused_api())
        .args(["pr", "list"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("not a Bitbucket repository")));
}

#[test]
fn pr_list_outside_git_repository() {
    let fixture = Fixture::without_git();
    valid_credentials(&fixture);

    fixture
        .bit(unused_api())
        .args(["pr", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a Bitbucket repository"));
}

#[test]
fn pr_list_with_malformed_credentials() {
    let fixture = Fixture::new(&[("origin", "git@bitbucket.org:teamsinspace/documentation-tests.git")]);
    fixture.write_credentials("[default\nusername = u\npassword = p\n");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();

    fixture
        .bit(&server.url())
        .args(["pr", "list"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::contains("error:")
                .and(predicate::str::contains(fixture.credentials_path().display().to_string()))
                .and(predicate::str::contains("invalid file format")),
        );

    mock.assert();
}

#[test]
fn pr_list_with_http_error() {
    let fixture = Fixture::new(&[("origin", "git@bitbucket.org:teamsinspace/documentation-tests.git")]);
    valid_credentials(&fixture);

    let mut server = mockito::Server::new();
    server
        .mock("GET", Matcher::Regex(PULL_REQUESTS_PATH.to_string()))
        .with_status(403)
        .with_body(json!({"type": "error", "error": {"message": "Access denied"}}).to_string())
        .create();

    fixture
        .bit(&server.url())
        .args(["pr", "list"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("HTTP 403")));
}

#[test]
fn pr_list_with_non_json_response() {
    let fixture = Fixture::new(&[("origin", "git@bitbucket.org:teamsinspace/documentation-tests.git")]);
    valid_credentials(&fixture);

    let mut server = mockito::Server::new();
    server
        .mock("GET", Matcher::Regex(PULL_REQUESTS_PATH.to_string()))
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    fixture
        .bit(&server.url())
        .args(["pr", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON response"));
}

#[test]
fn browse_url_for_explicit_repository() {
    let fixture = Fixture::without_git();

    fixture
        .bit(unused_api())
        .args(["browse", "--url", "team/project"])
        .assert()
        .success()
        .stdout("https://bitbucket.org/team/project\n");
}

#[test]
fn browse_url_from_remotes() {
    let fixture = Fixture::new(&[
        ("origin", "git@bitbucket.org:me/fork.git"),
        ("upstream", "https://evil@bitbucket.org/teamsinspace/documentation-tests.git"),
    ]);

    fixture
        .bit(unused_api())
        .args(["browse", "-u"])
        .assert()
        .success()
        .stdout("https://bitbucket.org/teamsinspace/documentation-tests\n");
}

#[test]
fn browse_url_honours_web_url_override() {
    let fixture = Fixture::new(&[("origin", "git@bitbucket.org:me/fork.git")]);

    fixture
        .bit(unused_api())
        .env("BIT_WEB_URL", "https://bitbucket.example.com/")
        .args(["browse", "--url"])
        .assert()
        .success()
        .stdout("https://bitbucket.example.com/me/fork\n");
}

#[test]
fn browse_outside_bitbucket_repository() {
    let fixture = Fixture::new(&[("origin", "https://gitlab.com/owner/repo.git")]);

    fixture
        .bit(unused_api())
        .args(["browse", "--url"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a Bitbucket repository"));
}

#[test]
fn usage_errors_exit_non_zero() {
    let fixture = Fixture::without_git();

    for args in [
        &[][..],
        &["frobnicate"][..],
        &["pr"][..],
        &["pr", "merge"][..],
        &["browse", "a/b/c"][..],
    ] {
        fixture
            .bit(unused_api())
            .args(args)
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("Usage:"));
    }
}

#[test]
fn help_lists_commands() {
    let fixture = Fixture::without_git();

    fixture
        .bit(unused_api())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse").and(predicate::str::contains("pr")));
}

#[test]
fn credential_file_is_not_created_on_failed_resolution() {
    let fixture = Fixture::new(&[("origin", "git@github.com:owner/repo.git")]);

    fixture.bit(unused_api()).args(["pr", "list"]).assert().code(1);

    assert!(!fixture.credentials_path().exists());
}
