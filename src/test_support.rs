use crate::error::{LockwatchError, Result};
use crate::locks::{Lock, LockSet, LockSource};
use crate::notify::{LockReport, Notifier};
use reqwest::Url;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

pub(crate) fn lock_set(locks: &[(&str, &str, &str)]) -> LockSet {
    locks
        .iter()
        .map(|(file, owner, id)| Lock::new(*file, *owner, *id))
        .collect()
}

/// Lock source that replays a fixed sequence of load results.
pub(crate) struct ScriptedLockSource {
    results: RefCell<VecDeque<Result<LockSet>>>,
    loads: RefCell<usize>,
}

impl ScriptedLockSource {
    pub(crate) fn new(results: Vec<Result<LockSet>>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            loads: RefCell::new(0),
        }
    }

    pub(crate) fn loads(&self) -> usize {
        *self.loads.borrow()
    }
}

impl LockSource for ScriptedLockSource {
    fn load(&self) -> Result<LockSet> {
        *self.loads.borrow_mut() += 1;
        self.results.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(LockwatchError::ExternalCommand(
                "scripted lock source exhausted".to_string(),
            ))
        })
    }
}

/// Notifier that records every report it is given.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    reports: RefCell<Vec<LockReport>>,
    fail: bool,
}

impl RecordingNotifier {
    pub(crate) fn failing() -> Self {
        Self {
            reports: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn reports(&self) -> Vec<LockReport> {
        self.reports.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, report: &LockReport) -> Result<()> {
        self.reports.borrow_mut().push(report.clone());
        if self.fail {
            Err(LockwatchError::Notification("webhook unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Serve exactly one HTTP request on localhost with the given status line.
///
/// The join handle yields the request body that was received.
pub(crate) fn serve_one_request(status_line: &'static str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let url = Url::parse(&format!("http://{}/webhook", addr)).unwrap();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let header = line.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status_line
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        String::from_utf8(body).unwrap()
    });

    (url, handle)
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
