// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path, process::Output};

use assert_cmd::Command;

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn launcher(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crosslend-deploy").unwrap();
    cmd.current_dir(dir)
        .env_remove("CROSSLEND_NETWORK")
        .env_remove("DEPLOYER_PRIVATE_KEY");
    cmd
}

fn write_artifact(root: &Path) {
    let dir = root.join("artifacts/contracts/CrossLendDAO.sol");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("CrossLendDAO.json"),
        r#"{
  "_format": "hh-sol-artifact-1",
  "contractName": "CrossLendDAO",
  "sourceName": "contracts/CrossLendDAO.sol",
  "abi": [],
  "bytecode": "0x600a600c600039600a6000f3602a60005260206000f3",
  "deployedBytecode": "0x602a60005260206000f3",
  "linkReferences": {},
  "deployedLinkReferences": {}
}"#,
    )
    .unwrap();
}

fn assert_failed(output: &Output) -> String {
    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stdout.is_empty(),
        "unexpected stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn uncompiled_contract_fails_resolution() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("artifacts")).unwrap();
    let output = launcher(dir.path())
        .args(["--private-key", DEV_KEY])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("failed to resolve contract factory for CrossLendDAO"));
    assert!(stderr.contains("has it been compiled?"));
}

#[test]
fn missing_artifacts_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = launcher(dir.path()).output().unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("artifacts directory"));
}

#[test]
fn unreachable_node_fails_resolution() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path());
    let output = launcher(dir.path())
        .args(["--endpoint", "http://127.0.0.1:1", "--private-key", DEV_KEY])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("failed to resolve contract factory for CrossLendDAO"));
    assert!(stderr.contains("rpc error"));
    // The transport's root cause is printed too.
    assert!(stderr.contains("refused"), "{stderr}");
}

#[test]
fn unknown_network() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("crosslend.toml"),
        "[networks.sepolia]\nurl = \"https://sepolia.example.org\"\n",
    )
    .unwrap();
    let output = launcher(dir.path())
        .args(["--network", "mainnet"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("unknown network mainnet"));
    assert!(stderr.contains("sepolia"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let output = launcher(dir.path())
        .args(["--config", "missing.toml"])
        .output()
        .unwrap();
    let stderr = assert_failed(&output);
    assert!(stderr.contains("missing.toml"));
}

#[test]
fn bad_timeout_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = launcher(dir.path())
        .args(["--timeout", "soon"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
