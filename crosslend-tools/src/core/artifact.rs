// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts follow the Hardhat layout: one JSON file per contract at
//! `<root>/<source path>/<ContractName>.json`, next to a `<ContractName>.dbg.json` debug file,
//! with the raw compiler output kept under `<root>/build-info`.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// Name of the directory holding raw compiler input/output, which never contains artifacts.
const BUILD_INFO_DIR: &str = "build-info";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifacts directory {} does not exist, compile the contracts first", .0.display())]
    MissingDirectory(PathBuf),
    #[error("artifact for contract {name} not found in {}, has it been compiled?", .root.display())]
    NotFound { name: String, root: PathBuf },
    #[error("multiple artifacts for contract {name}: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("invalid artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to decode artifact {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("contract {0} has no creation bytecode (abstract contract or interface)")]
    NotDeployable(String),
    #[error("contract {name} must be linked against libraries before deployment: {}", .libraries.join(", "))]
    UnlinkedLibraries {
        name: String,
        libraries: Vec<String>,
    },
    #[error("invalid bytecode for contract {name}: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
    #[error("contract {name} constructor expects {expected} argument(s), {given} given")]
    ConstructorArguments {
        name: String,
        expected: usize,
        given: usize,
    },
}

/// Byte range of a library address placeholder in the bytecode.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LinkOffset {
    pub start: usize,
    pub length: usize,
}

/// Library placeholders, keyed by source file and then by library name.
pub type LinkReferences = BTreeMap<String, BTreeMap<String, Vec<LinkOffset>>>;

/// Compiler output for a single contract.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    /// Hex-encoded creation code. Kept as text since unlinked code is not valid hex.
    pub bytecode: String,
    #[serde(default)]
    pub link_references: LinkReferences,
}

impl ContractArtifact {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ArtifactError::Decode {
            path: path.to_owned(),
            source,
        })
    }

    /// `source:Name`, unique within a project.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }

    /// Decodes the creation code to send in a deployment transaction.
    pub fn creation_code(&self) -> Result<Bytes, ArtifactError> {
        if !self.link_references.is_empty() {
            let libraries = self
                .link_references
                .iter()
                .flat_map(|(source, libs)| libs.keys().map(move |lib| format!("{source}:{lib}")))
                .collect();
            return Err(ArtifactError::UnlinkedLibraries {
                name: self.contract_name.clone(),
                libraries,
            });
        }

        let text = self.bytecode.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        if text.is_empty() {
            return Err(ArtifactError::NotDeployable(self.contract_name.clone()));
        }
        hex::decode(text)
            .map(Into::into)
            .map_err(|source| ArtifactError::InvalidBytecode {
                name: self.contract_name.clone(),
                source,
            })
    }

    /// Checks the ABI constructor accepts the given number of arguments.
    pub fn check_constructor_args(&self, given: usize) -> Result<(), ArtifactError> {
        let expected = self
            .abi
            .constructor()
            .map(|constructor| constructor.inputs.len())
            .unwrap_or_default();
        if expected != given {
            return Err(ArtifactError::ConstructorArguments {
                name: self.contract_name.clone(),
                expected,
                given,
            });
        }
        Ok(())
    }
}

/// A directory of compiled artifacts.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Finds the single artifact for the contract with the given name.
    pub fn find(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::MissingDirectory(self.root.clone()));
        }

        let pattern = self.root.join("**").join(format!("{name}.json"));
        let mut found = Vec::new();
        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = entry.map_err(|err| ArtifactError::Read {
                path: err.path().to_owned(),
                source: io::Error::from(err),
            })?;
            if self.is_build_info(&path) {
                continue;
            }
            let artifact = ContractArtifact::from_file(&path)?;
            if artifact.contract_name == name {
                debug!(@grey, "found artifact for {name} at {}", path.display());
                found.push(artifact);
            }
        }

        match found.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_owned(),
                root: self.root.clone(),
            }),
            1 => Ok(found.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_owned(),
                candidates: found
                    .iter()
                    .map(ContractArtifact::fully_qualified_name)
                    .collect(),
            }),
        }
    }

    fn is_build_info(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .map(|relative| relative.starts_with(BUILD_INFO_DIR))
            .unwrap_or(false)
    }
}

impl From<&Path> for ArtifactStore {
    fn from(root: &Path) -> Self {
        Self::new(root)
    }
}

impl From<PathBuf> for ArtifactStore {
    fn from(root: PathBuf) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const RETURN_42_CODE: &str = "0x600a600c600039600a6000f3602a60005260206000f3";

    pub fn artifact_json(name: &str, source: &str, bytecode: &str) -> String {
        format!(
            r#"{{
  "_format": "hh-sol-artifact-1",
  "contractName": "{name}",
  "sourceName": "{source}",
  "abi": [],
  "bytecode": "{bytecode}",
  "deployedBytecode": "0x602a60005260206000f3",
  "linkReferences": {{}},
  "deployedLinkReferences": {{}}
}}"#
        )
    }

    pub fn write_artifact(root: &Path, source: &str, name: &str, bytecode: &str) -> PathBuf {
        let dir = root.join(source);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.json"));
        fs::write(&path, artifact_json(name, source, bytecode)).unwrap();
        fs::write(dir.join(format!("{name}.dbg.json")), r#"{"buildInfo": "x"}"#).unwrap();
        path
    }

    fn parse(json: &str) -> ContractArtifact {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn finds_compiled_contract() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/CrossLendDAO.sol",
            "CrossLendDAO",
            RETURN_42_CODE,
        );
        write_artifact(dir.path(), "contracts/Other.sol", "Other", RETURN_42_CODE);

        let artifact = ArtifactStore::new(dir.path()).find("CrossLendDAO").unwrap();
        assert_eq!(artifact.contract_name, "CrossLendDAO");
        assert_eq!(
            artifact.fully_qualified_name(),
            "contracts/CrossLendDAO.sol:CrossLendDAO"
        );
        assert_eq!(
            artifact.creation_code().unwrap().to_vec(),
            hex::decode(&RETURN_42_CODE[2..]).unwrap()
        );
    }

    #[test]
    fn missing_contract_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/Other.sol", "Other", RETURN_42_CODE);

        let err = ArtifactStore::new(dir.path())
            .find("CrossLendDAO")
            .unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { ref name, .. } if name == "CrossLendDAO"));
        assert!(err.to_string().contains("has it been compiled?"));
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArtifactStore::new(dir.path().join("artifacts"))
            .find("CrossLendDAO")
            .unwrap_err();
        assert!(matches!(err, ArtifactError::MissingDirectory(_)));
    }

    #[test]
    fn same_name_in_two_sources_is_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/A.sol", "CrossLendDAO", RETURN_42_CODE);
        write_artifact(dir.path(), "contracts/B.sol", "CrossLendDAO", RETURN_42_CODE);

        let err = ArtifactStore::new(dir.path())
            .find("CrossLendDAO")
            .unwrap_err();
        let ArtifactError::Ambiguous { candidates, .. } = err else {
            panic!("expected ambiguous artifacts, got {err}");
        };
        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains(&"contracts/A.sol:CrossLendDAO".to_owned()));
    }

    #[test]
    fn ignores_build_info() {
        let dir = tempfile::tempdir().unwrap();
        let build_info = dir.path().join(BUILD_INFO_DIR);
        fs::create_dir_all(&build_info).unwrap();
        fs::write(build_info.join("CrossLendDAO.json"), "not an artifact").unwrap();

        let err = ArtifactStore::new(dir.path())
            .find("CrossLendDAO")
            .unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn malformed_artifact_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let contracts = dir.path().join("contracts/CrossLendDAO.sol");
        fs::create_dir_all(&contracts).unwrap();
        fs::write(contracts.join("CrossLendDAO.json"), "{").unwrap();

        let err = ArtifactStore::new(dir.path())
            .find("CrossLendDAO")
            .unwrap_err();
        assert!(matches!(err, ArtifactError::Decode { .. }));
    }

    #[test]
    fn interface_is_not_deployable() {
        let artifact = parse(&artifact_json("ILending", "contracts/ILending.sol", "0x"));
        assert!(matches!(
            artifact.creation_code(),
            Err(ArtifactError::NotDeployable(_))
        ));
    }

    #[test]
    fn unlinked_library_is_rejected() {
        let mut artifact = parse(&artifact_json(
            "CrossLendDAO",
            "contracts/CrossLendDAO.sol",
            "0x73__$f3b1a2c4d5e6f7a8b9c0d1e2f3a4b5c6d7$__63",
        ));
        artifact.link_references = serde_json::from_str(
            r#"{"contracts/Math.sol": {"Math": [{"start": 1, "length": 20}]}}"#,
        )
        .unwrap();

        let Err(ArtifactError::UnlinkedLibraries { libraries, .. }) = artifact.creation_code()
        else {
            panic!("expected unlinked libraries");
        };
        assert_eq!(libraries, vec!["contracts/Math.sol:Math".to_owned()]);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let artifact = parse(&artifact_json("Bad", "contracts/Bad.sol", "0xzz"));
        assert!(matches!(
            artifact.creation_code(),
            Err(ArtifactError::InvalidBytecode { .. })
        ));
    }

    #[test]
    fn constructor_arguments_are_checked() {
        let mut artifact = parse(&artifact_json(
            "CrossLendDAO",
            "contracts/CrossLendDAO.sol",
            RETURN_42_CODE,
        ));
        artifact.check_constructor_args(0).unwrap();

        artifact.abi = serde_json::from_str(
            r#"[{"type": "constructor", "stateMutability": "nonpayable",
                 "inputs": [{"name": "token", "type": "address", "internalType": "address"}]}]"#,
        )
        .unwrap();
        let err = artifact.check_constructor_args(0).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::ConstructorArguments {
                expected: 1,
                given: 0,
                ..
            }
        ));
    }
}
