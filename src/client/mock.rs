//! In-memory chain used by the unit tests.
//!
//! Every instantiated contract runs the same tiny ledger program: its state is
//! a JSON object, `{"deposit":{}}` credits the attached funds, `{"set":{..}}`
//! stores a value and `{"fail":{}}` aborts. `{"state":{}}` and `{"get":{..}}`
//! are the supported queries. Instantiating with an empty label is rejected,
//! like wasmd does.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;

use super::chain_res::{
    ChainEvent, ChainResponse, ExecResponse, InstantiateResponse, QueryResponse,
    StoreCodeResponse,
};
use super::error::ClientError;
use super::{Code, WasmQuerier, WasmSigner};
use crate::config::cfg::Coin;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MockState {
    pub height: u64,
    pub balances: BTreeMap<(String, String), u64>,
    pub codes: Vec<Vec<u8>>,
    pub contracts: BTreeMap<String, MockContract>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MockContract {
    pub code_id: u64,
    pub admin: Option<String>,
    pub label: String,
    pub state: Value,
}

#[derive(Debug)]
pub(crate) struct MockChain {
    signer: String,
    state: RefCell<MockState>,
}

fn rejected(code: u32, log: &str) -> ClientError {
    ClientError::TxRejected {
        res: ChainResponse {
            code: Code::Err(code),
            log: log.to_string(),
            ..Default::default()
        },
    }
}

impl MockChain {
    pub fn new<S: Into<String>>(signer: S) -> Self {
        Self {
            signer: signer.into(),
            state: RefCell::new(MockState::default()),
        }
    }

    pub fn fund(&self, address: &str, coin: Coin) {
        *self
            .state
            .borrow_mut()
            .balances
            .entry((address.to_string(), coin.denom))
            .or_default() += coin.amount;
    }

    pub fn balance(&self, address: &str, denom: &str) -> u64 {
        self.state
            .borrow()
            .balances
            .get(&(address.to_string(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> MockState {
        self.state.borrow().clone()
    }

    fn tx_hash(height: u64) -> String {
        format!("{:064X}", height)
    }

    // CheckTx: the signer must hold every attached coin
    fn check_funds(state: &MockState, sender: &str, funds: &[Coin]) -> Result<(), ClientError> {
        for coin in funds {
            let held = state
                .balances
                .get(&(sender.to_string(), coin.denom.clone()))
                .copied()
                .unwrap_or_default();
            if held < coin.amount {
                return Err(rejected(
                    5,
                    &format!("{}{} is smaller than {}: insufficient funds", held, coin.denom, coin),
                ));
            }
        }
        Ok(())
    }

    fn move_funds(state: &mut MockState, from: &str, to: &str, funds: &[Coin]) {
        for coin in funds {
            *state
                .balances
                .entry((from.to_string(), coin.denom.clone()))
                .or_default() -= coin.amount;
            *state
                .balances
                .entry((to.to_string(), coin.denom.clone()))
                .or_default() += coin.amount;
        }
    }

    fn run_contract(state: &mut Value, msg: &Value, funds: &[Coin]) -> Result<(), String> {
        let (action, args) = msg
            .as_object()
            .and_then(|m| m.iter().next())
            .ok_or_else(|| "message is not a tagged variant".to_string())?;

        match action.as_str() {
            "deposit" => {
                if funds.is_empty() {
                    return Err("no funds sent".to_string());
                }
                for coin in funds {
                    let entry = &mut state["deposits"][coin.denom.as_str()];
                    let prev = entry.as_u64().unwrap_or_default();
                    *entry = json!(prev + coin.amount);
                }
                Ok(())
            }
            "set" => {
                let key = args["key"].as_str().ok_or("missing key")?;
                state["values"][key] = args["value"].clone();
                Ok(())
            }
            "fail" => Err("contract aborted".to_string()),
            other => Err(format!("unknown variant `{}`", other)),
        }
    }
}

#[async_trait(?Send)]
impl WasmQuerier for MockChain {
    async fn query_smart(
        &self,
        address: &str,
        payload: Vec<u8>,
    ) -> Result<QueryResponse, ClientError> {
        let state = self.state.borrow();
        let not_found = |log: String| ClientError::CosmosSdk {
            res: ChainResponse {
                code: Code::Err(18),
                log,
                ..Default::default()
            },
        };

        let contract = state
            .contracts
            .get(address)
            .ok_or_else(|| not_found(format!("contract {}: not found", address)))?;

        let msg: Value = serde_json::from_slice(&payload)
            .map_err(|e| not_found(format!("invalid query: {}", e)))?;

        let res = match msg.as_object().and_then(|m| m.iter().next()) {
            Some((q, _)) if q == "state" => contract.state.clone(),
            Some((q, args)) if q == "get" => {
                let key = args["key"].as_str().unwrap_or_default();
                json!({ "value": contract.state["values"][key] })
            }
            _ => return Err(not_found("unknown query variant".to_string())),
        };

        Ok(QueryResponse {
            res: ChainResponse {
                data: Some(serde_json::to_vec(&res).unwrap_or_default()),
                ..Default::default()
            },
        })
    }

    async fn poll_for_n_blocks(&self, n: u64, _is_first_block: bool) -> Result<(), ClientError> {
        self.state.borrow_mut().height += n;
        Ok(())
    }
}

#[async_trait(?Send)]
impl WasmSigner for MockChain {
    fn address(&self) -> String {
        self.signer.clone()
    }

    async fn store(&self, payload: Vec<u8>, _memo: &str) -> Result<StoreCodeResponse, ClientError> {
        if payload.is_empty() {
            return Err(rejected(2, "empty wasm code"));
        }

        let mut state = self.state.borrow_mut();
        state.codes.push(payload);
        state.height += 1;
        let code_id = state.codes.len() as u64;

        Ok(StoreCodeResponse {
            code_id,
            res: ChainResponse {
                events: vec![ChainEvent::new("store_code").add_attribute("code_id", code_id.to_string())],
                ..Default::default()
            },
            tx_hash: Self::tx_hash(state.height),
            height: state.height,
        })
    }

    async fn instantiate(
        &self,
        code_id: u64,
        payload: Vec<u8>,
        label: &str,
        admin: Option<String>,
        funds: Vec<Coin>,
        _memo: &str,
    ) -> Result<InstantiateResponse, ClientError> {
        let mut state = self.state.borrow_mut();
        if code_id == 0 || code_id as usize > state.codes.len() {
            return Err(rejected(2, &format!("code id {}: not found", code_id)));
        }
        if label.trim().is_empty() {
            return Err(rejected(2, "label is required on all contracts"));
        }
        Self::check_funds(&state, &self.signer, &funds)?;

        let init: Value = serde_json::from_slice(&payload).map_err(|e| rejected(2, &e.to_string()))?;

        let address = format!("neutron1contract{}", state.contracts.len() + 1);
        Self::move_funds(&mut state, &self.signer.clone(), &address, &funds);
        state.contracts.insert(
            address.clone(),
            MockContract {
                code_id,
                admin,
                label: label.to_string(),
                state: json!({ "init": init, "deposits": {}, "values": {} }),
            },
        );
        state.height += 1;

        Ok(InstantiateResponse {
            res: ChainResponse {
                events: vec![ChainEvent::new("instantiate")
                    .add_attribute("_contract_address", address.clone())
                    .add_attribute("code_id", code_id.to_string())],
                ..Default::default()
            },
            address,
            tx_hash: Self::tx_hash(state.height),
            height: state.height,
        })
    }

    async fn execute(
        &self,
        address: &str,
        payload: Vec<u8>,
        funds: Vec<Coin>,
        _memo: &str,
    ) -> Result<ExecResponse, ClientError> {
        let mut state = self.state.borrow_mut();
        Self::check_funds(&state, &self.signer, &funds)?;

        let msg: Value = serde_json::from_slice(&payload).map_err(|e| rejected(2, &e.to_string()))?;

        let contract = state
            .contracts
            .get(address)
            .ok_or_else(|| rejected(2, &format!("contract {}: not found", address)))?;

        // run against a copy so an abort leaves no trace
        let mut contract_state = contract.state.clone();
        let height = state.height + 1;
        if let Err(log) = Self::run_contract(&mut contract_state, &msg, &funds) {
            state.height = height;
            return Err(ClientError::TxReverted {
                tx_hash: Self::tx_hash(height),
                res: ChainResponse {
                    code: Code::Err(5),
                    log,
                    ..Default::default()
                },
            });
        }

        Self::move_funds(&mut state, &self.signer.clone(), address, &funds);
        if let Some(contract) = state.contracts.get_mut(address) {
            contract.state = contract_state;
        }
        state.height = height;

        Ok(ExecResponse {
            res: ChainResponse {
                events: vec![ChainEvent::new("execute").add_attribute("_contract_address", address)],
                ..Default::default()
            },
            tx_hash: Self::tx_hash(height),
            height,
        })
    }

    async fn send(
        &self,
        recipient: &str,
        amount: Vec<Coin>,
        _memo: &str,
    ) -> Result<ExecResponse, ClientError> {
        let mut state = self.state.borrow_mut();
        Self::check_funds(&state, &self.signer, &amount)?;
        Self::move_funds(&mut state, &self.signer.clone(), recipient, &amount);
        state.height += 1;

        Ok(ExecResponse {
            res: ChainResponse {
                events: vec![ChainEvent::new("transfer").add_attribute("recipient", recipient)],
                ..Default::default()
            },
            tx_hash: Self::tx_hash(state.height),
            height: state.height,
        })
    }
}
