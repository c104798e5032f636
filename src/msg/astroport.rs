use cosmwasm_std::{Decimal, Uint128};
use serde::{Deserialize, Serialize};

pub use astroport::asset::{Asset, AssetInfo};

/// `amount` of a native bank denom.
pub fn native_asset<S: Into<String>>(denom: S, amount: u128) -> Asset {
    Asset {
        info: AssetInfo::NativeToken {
            denom: denom.into(),
        },
        amount: Uint128::new(amount),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Simulation { offer_asset: Asset },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SimulationResponse {
    pub return_amount: Uint128,
    pub spread_amount: Uint128,
    pub commission_amount: Uint128,
}

/// Pair swap. The offered native amount must also be attached as funds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Swap {
        offer_asset: Asset,
        #[serde(skip_serializing_if = "Option::is_none")]
        belief_price: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_spread: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to: Option<String>,
    },
}
