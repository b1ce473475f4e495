//! # Campus Assistant CLI Srv Integration Tests
//!
//! File: cli/tests/srv.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Starts `campus srv` as a child process, reads the bound address from the
//! start-up banner and talks plain HTTP/1.1 to it over a `TcpStream`.
//!

mod common;
use predicates::prelude::*;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use tempfile::TempDir;

/// Kills the server when the test ends, pass or fail.
struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("Failed to reserve a port")
}

fn start_server(workdir: &TempDir, extra_args: &[&str]) -> (ServerGuard, SocketAddr) {
    let port = free_port().to_string();
    let mut child = Command::new(assert_cmd::cargo::cargo_bin("campus"))
        .current_dir(workdir.path())
        .env("HOME", workdir.path())
        .env("XDG_CONFIG_HOME", common::user_config_home(workdir.path()))
        .env_remove("CAMPUS_CONFIG")
        .args(["srv", "--host", "127.0.0.1", "--port", &port])
        .args(extra_args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start campus srv");

    let stdout = child.stdout.take().expect("stdout not captured");
    let guard = ServerGuard(child);

    let mut addr = None;
    for line in BufReader::new(stdout).lines() {
        let line = line.expect("Failed to read server output");
        if let Some((_, rest)) = line.split_once("Binding to address:") {
            addr = Some(rest.trim().parse().expect("Invalid address in banner"));
        }
        if line.contains("Server starting!") {
            break;
        }
    }
    (guard, addr.expect("Server exited before printing its address"))
}

/// Sends one request and returns the raw response, retrying while the
/// listener is still coming up.
fn request(addr: SocketAddr, raw: &str) -> String {
    for _ in 0..50 {
        if let Ok(mut stream) = TcpStream::connect(addr) {
            stream.write_all(raw.as_bytes()).unwrap();
            let mut response = String::new();
            stream.read_to_string(&mut response).unwrap();
            return response;
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
    panic!("Could not connect to {}", addr);
}

#[test]
fn test_srv_health_and_chat() {
    let workdir = TempDir::new().unwrap();
    let (_server, addr) = start_server(&workdir, &[]);

    let health = request(
        addr,
        "GET /api/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    );
    assert!(health.starts_with("HTTP/1.1 200"));
    assert!(health.contains(r#""status":"ok""#));

    let body = r#"{"message":"where is the registrar"}"#;
    let chat = request(
        addr,
        &format!(
            "POST /api/chat HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
    );
    assert!(chat.starts_with("HTTP/1.1 200"));
    assert!(chat.contains(r#""category":"admin""#));
}

#[test]
fn test_srv_serves_static_dir() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join("index.html"), "<h1>Campus Widget</h1>").unwrap();
    let (_server, addr) = start_server(&workdir, &["--static-dir", "."]);

    let page = request(
        addr,
        "GET /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    );
    assert!(page.starts_with("HTTP/1.1 200"));
    assert!(page.contains("<h1>Campus Widget</h1>"));
}

#[test]
fn test_srv_rejects_missing_static_dir() {
    let (mut cmd, dir) = common::campus_cmd();
    cmd.args(["srv", "--static-dir"])
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
}
