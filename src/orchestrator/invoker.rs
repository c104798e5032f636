use log::{debug, info};
use serde::Serialize;

use super::error::{ExecutionError, QueryError};
use crate::client::{
    ExecResponse, InstantiateResponse, QueryResponse, StoreCodeResponse, WasmQuerier, WasmSigner,
};
use crate::config::cfg::Coin;

// Stateless query / execute primitives shared by the session and the cli.
// None of them retry: a failed broadcast is returned to the caller as is.

/// Smart queries `contract` with `msg`. Has no side effects.
pub async fn query<Q, T>(handle: &Q, contract: &str, msg: &T) -> Result<QueryResponse, QueryError>
where
    Q: WasmQuerier + ?Sized,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(msg).map_err(QueryError::json)?;

    let res = handle
        .query_smart(contract, payload)
        .await
        .map_err(|e| QueryError::Rejected {
            contract: contract.to_string(),
            source: e,
        })?;

    debug!("{:?}", res.res);

    Ok(res)
}

/// Signs and broadcasts a `MsgExecuteContract`, waiting for block inclusion.
pub async fn execute<S, T>(
    handle: &S,
    sender: &str,
    contract: &str,
    msg: &T,
    funds: Vec<Coin>,
    memo: &str,
) -> Result<ExecResponse, ExecutionError>
where
    S: WasmSigner + ?Sized,
    T: Serialize + ?Sized,
{
    check_sender(handle, sender)?;

    let payload = serde_json::to_vec(msg).map_err(ExecutionError::json)?;

    let res = handle.execute(contract, payload, funds, memo).await?;

    debug!("{:?}", res.res);

    Ok(res)
}

/// Uploads wasm byte code, returning the new code id.
pub async fn upload<S>(
    handle: &S,
    sender: &str,
    wasm: Vec<u8>,
    memo: &str,
) -> Result<StoreCodeResponse, ExecutionError>
where
    S: WasmSigner + ?Sized,
{
    check_sender(handle, sender)?;

    info!("Storing {} bytes of wasm", wasm.len());
    let res = handle.store(wasm, memo).await?;

    debug!("{:?}", res.res);

    Ok(res)
}

/// Instantiates `code_id`, returning the new contract address.
pub async fn instantiate<S, T>(
    handle: &S,
    sender: &str,
    code_id: u64,
    msg: &T,
    label: &str,
    admin: Option<String>,
) -> Result<InstantiateResponse, ExecutionError>
where
    S: WasmSigner + ?Sized,
    T: Serialize + ?Sized,
{
    check_sender(handle, sender)?;

    let payload = serde_json::to_vec(msg).map_err(ExecutionError::json)?;

    let res = handle
        .instantiate(code_id, payload, label, admin, vec![], "")
        .await?;

    info!("Instantiated code {} at {}", code_id, res.address);
    debug!("{:?}", res.res);

    Ok(res)
}

/// Bank transfer of `amount` from the signing account to `recipient`.
pub async fn send<S>(
    handle: &S,
    sender: &str,
    recipient: &str,
    amount: Vec<Coin>,
    memo: &str,
) -> Result<ExecResponse, ExecutionError>
where
    S: WasmSigner + ?Sized,
{
    check_sender(handle, sender)?;

    let res = handle.send(recipient, amount, memo).await?;

    debug!("{:?}", res.res);

    Ok(res)
}

// the handle only holds one key, so it can only sign for its own address
fn check_sender<S: WasmSigner + ?Sized>(handle: &S, sender: &str) -> Result<(), ExecutionError> {
    let expected = handle.address();
    if expected != sender {
        return Err(ExecutionError::SignerMismatch {
            expected,
            actual: sender.to_string(),
        });
    }
    Ok(())
}
