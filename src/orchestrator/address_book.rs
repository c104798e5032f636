use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::AddressBookError;

pub type ContractName = String;

/// Logical contract name -> on-chain contract address.
pub type AddressBook = Book<String>;

/// Logical contract name -> stored wasm code id.
pub type CodeIdBook = Book<u64>;

/// A small persisted mapping keyed by logical contract name.
///
/// Keys only exist after the corresponding deployment step succeeded.
/// [Book::save] overwrites the whole file, there is no merge with what is
/// already on disk, so two processes saving the same file race and the last
/// writer wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book<V> {
    map: BTreeMap<ContractName, V>,
}

impl<V> Book<V> {
    /// Records `value` under `name`, replacing any previous entry.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: V) {
        self.map.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.map.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V: Serialize + DeserializeOwned> Book<V> {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AddressBookError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| AddressBookError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_json::from_slice(&raw).map_err(|e| AddressBookError::Json {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Like [Book::load] but a missing file yields an empty book.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AddressBookError> {
        match Self::load(&path) {
            Err(AddressBookError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self { map: BTreeMap::new() })
            }
            res => res,
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AddressBookError> {
        let path = path.as_ref();
        let write_err = |e| AddressBookError::Write {
            path: path.display().to_string(),
            source: e,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let json = serde_json::to_vec_pretty(&self.map).map_err(|e| AddressBookError::Json {
            path: path.display().to_string(),
            source: e,
        })?;
        fs::write(path, json).map_err(write_err)?;

        debug!("saved {} entries to {}", self.map.len(), path.display());
        Ok(())
    }
}

impl Book<String> {
    /// Returns the deployed contract address for a given contract name
    pub fn address(&self, name: &str) -> Result<&str, AddressBookError> {
        self.map
            .get(name)
            .map(String::as_str)
            .ok_or(AddressBookError::NotDeployed { name: name.into() })
    }
}

impl Book<u64> {
    /// Returns the stored code id for a given contract name
    pub fn code_id(&self, name: &str) -> Result<u64, AddressBookError> {
        self.map
            .get(name)
            .copied()
            .ok_or(AddressBookError::NotStored { name: name.into() })
    }
}
