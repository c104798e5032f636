use log::info;
use serde::Serialize;
use std::fmt::{self, Debug};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::address_book::{AddressBook, CodeIdBook};
use super::error::{AddressBookError, DeployError, ExecutionError, QueryError};
use super::invoker;
use crate::client::{ExecResponse, InstantiateResponse, QueryResponse, WasmSigner};
use crate::config::cfg::{BookCfg, Coin};

/// Upper bound on waiting for the block after a code upload.
pub const BLOCK_TIMEOUT: Duration = Duration::from_secs(60);

/// A signing handle together with the two books it deploys into.
///
/// Contracts are addressed by logical name, the session resolves the name
/// through its [AddressBook] before every query or execute.
pub struct Session<C> {
    handle: C,
    sender: String,
    book_cfg: BookCfg,
    pub address_book: AddressBook,
    pub code_ids: CodeIdBook,
}

impl<C> Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?} {:?}", self.sender, self.address_book, self.code_ids)
    }
}

impl<C: WasmSigner> Session<C> {
    /// Loads both books from `book_cfg`, missing files start out empty.
    pub fn open(handle: C, book_cfg: BookCfg) -> Result<Self, AddressBookError> {
        let address_book = AddressBook::load_or_default(&book_cfg.address_book)?;
        let code_ids = CodeIdBook::load_or_default(&book_cfg.code_ids)?;

        Ok(Self::new(handle, book_cfg, address_book, code_ids))
    }

    pub fn new(
        handle: C,
        book_cfg: BookCfg,
        address_book: AddressBook,
        code_ids: CodeIdBook,
    ) -> Self {
        Self {
            sender: handle.address(),
            handle,
            book_cfg,
            address_book,
            code_ids,
        }
    }

    pub fn handle(&self) -> &C {
        &self.handle
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Resolves a logical contract name to its deployed address.
    pub fn address(&self, name: &str) -> Result<&str, AddressBookError> {
        self.address_book.address(name)
    }

    /// Uploads `wasm_path`, instantiates it and records the result under `name`.
    ///
    /// The code id is saved as soon as the upload succeeds, so a failed
    /// instantiate can be retried with [Session::instantiate] without
    /// uploading again. The address book is only written once the contract
    /// has an address.
    pub async fn deploy<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        wasm_path: &Path,
        init_msg: &T,
        label: &str,
        admin: Option<String>,
    ) -> Result<InstantiateResponse, DeployError> {
        let wasm = fs::read(wasm_path).map_err(|e| DeployError::WasmFileRead {
            path: wasm_path.display().to_string(),
            source: e,
        })?;

        let stored = invoker::upload(&self.handle, &self.sender, wasm, name).await?;
        info!("Stored {} with code id {}", name, stored.code_id);

        self.code_ids.insert(name, stored.code_id);
        self.code_ids.save(&self.book_cfg.code_ids)?;

        tokio::time::timeout(BLOCK_TIMEOUT, self.handle.poll_for_n_blocks(1, false))
            .await
            .map_err(|_| DeployError::PollTimeout)?
            .map_err(ExecutionError::from)?;

        self.instantiate(name, init_msg, label, admin).await
    }

    /// Instantiates the code id recorded under `name` and records the new
    /// address under the same name.
    pub async fn instantiate<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        init_msg: &T,
        label: &str,
        admin: Option<String>,
    ) -> Result<InstantiateResponse, DeployError> {
        let code_id = self.code_ids.code_id(name)?;

        let res =
            invoker::instantiate(&self.handle, &self.sender, code_id, init_msg, label, admin)
                .await?;

        self.address_book.insert(name, res.address.clone());
        self.address_book.save(&self.book_cfg.address_book)?;

        info!("Deployed {} at {}", name, res.address);
        Ok(res)
    }

    pub async fn query<T: Serialize + ?Sized>(
        &self,
        name: &str,
        msg: &T,
    ) -> Result<QueryResponse, QueryError> {
        let contract = self.address_book.address(name)?;
        invoker::query(&self.handle, contract, msg).await
    }

    pub async fn execute<T: Serialize + ?Sized>(
        &self,
        name: &str,
        msg: &T,
        funds: Vec<Coin>,
        memo: &str,
    ) -> Result<ExecResponse, ExecutionError> {
        let contract = self.address_book.address(name)?;
        invoker::execute(&self.handle, &self.sender, contract, msg, funds, memo).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockChain;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    const SIGNER: &str = "neutron1signer";

    fn books(dir: &TempDir) -> BookCfg {
        BookCfg {
            address_book: dir.path().join("scripts/contract_addresses.json"),
            code_ids: dir.path().join("scripts/code_ids.json"),
        }
    }

    #[tokio::test]
    async fn deploy_records_and_persists() {
        let dir = TempDir::new().unwrap();
        let wasm = dir.child("cw404.wasm");
        wasm.write_binary(b"\0asm cw404").unwrap();

        let mut session = Session::open(MockChain::new(SIGNER), books(&dir)).unwrap();
        assert!(session.address_book.is_empty());

        let res = session
            .deploy("cw404", wasm.path(), &json!({ "minter": SIGNER }), "cw404", None)
            .await
            .unwrap();

        assert_eq!(session.address("cw404").unwrap(), res.address);

        // reopening picks up what the deploy saved
        let reopened = Session::open(MockChain::new(SIGNER), books(&dir)).unwrap();
        assert_eq!(reopened.address_book, session.address_book);
        assert_eq!(reopened.code_ids.code_id("cw404").unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_wasm_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let cfg = books(&dir);
        let mut session = Session::open(MockChain::new(SIGNER), cfg.clone()).unwrap();

        let res = session
            .deploy("cw404", &dir.path().join("nope.wasm"), &json!({}), "cw404", None)
            .await;

        assert_matches!(res, Err(DeployError::WasmFileRead { .. }));
        assert!(!cfg.address_book.exists());
        assert!(!cfg.code_ids.exists());
    }

    #[tokio::test]
    async fn failed_instantiate_keeps_the_code_id() {
        let dir = TempDir::new().unwrap();
        let cfg = books(&dir);
        let wasm = dir.child("cw404.wasm");
        wasm.write_binary(b"\0asm cw404").unwrap();

        let mut session = Session::open(MockChain::new(SIGNER), cfg.clone()).unwrap();
        let res = session
            .deploy("cw404", wasm.path(), &json!({}), "", None)
            .await;

        assert_matches!(res, Err(DeployError::Execution(ExecutionError::Rejected { .. })));
        assert!(!cfg.address_book.exists());
        assert_eq!(CodeIdBook::load(&cfg.code_ids).unwrap().code_id("cw404").unwrap(), 1);
    }

    #[tokio::test]
    async fn instantiate_from_a_reloaded_code_id_book() {
        let dir = TempDir::new().unwrap();
        let cfg = books(&dir);

        let chain = MockChain::new(SIGNER);
        let stored = invoker::upload(&chain, SIGNER, b"\0asm launchpad".to_vec(), "")
            .await
            .unwrap();

        let mut ids = CodeIdBook::default();
        ids.insert("launchpad", stored.code_id);
        ids.save(&cfg.code_ids).unwrap();

        let mut session = Session::open(chain, cfg.clone()).unwrap();
        let res = session
            .instantiate("launchpad", &json!({}), "launchpad", None)
            .await
            .unwrap();

        let book = AddressBook::load(&cfg.address_book).unwrap();
        assert_eq!(book.address("launchpad").unwrap(), res.address);

        assert_matches!(
            session.instantiate("cw404", &json!({}), "cw404", None).await,
            Err(DeployError::AddressBook(AddressBookError::NotStored { .. }))
        );
    }

    #[tokio::test]
    async fn execute_and_query_by_name() {
        let dir = TempDir::new().unwrap();
        let wasm = dir.child("launchpad.wasm");
        wasm.write_binary(b"\0asm launchpad").unwrap();

        let mut session = Session::open(MockChain::new(SIGNER), books(&dir)).unwrap();
        session
            .deploy("launchpad", wasm.path(), &json!({}), "launchpad", Some(SIGNER.into()))
            .await
            .unwrap();

        session
            .execute(
                "launchpad",
                &json!({ "set": { "key": "fee", "value": "100" } }),
                vec![],
                "",
            )
            .await
            .unwrap();

        let got: Value = session
            .query("launchpad", &json!({ "get": { "key": "fee" } }))
            .await
            .unwrap()
            .data()
            .unwrap();
        assert_eq!(got, json!({ "value": "100" }));
    }

    #[tokio::test]
    async fn unknown_names_fail_before_the_chain() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(MockChain::new(SIGNER), books(&dir)).unwrap();
        let before = session.handle().snapshot();

        assert_matches!(
            session.query("astroport_pair", &json!({ "pool": {} })).await,
            Err(QueryError::AddressBook(AddressBookError::NotDeployed { .. }))
        );
        assert_matches!(
            session.execute("astroport_pair", &json!({ "swap": {} }), vec![], "").await,
            Err(ExecutionError::AddressBook(AddressBookError::NotDeployed { .. }))
        );
        assert_eq!(session.handle().snapshot(), before);
    }
}
