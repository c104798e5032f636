use cosmwasm_std::{Binary, Uint128, Uint64};
use serde::{Deserialize, Serialize};

pub use cw_utils::Expiration;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstantiateMsg {
    pub admin: String,
    pub minter: String,
    pub royalty_payment_address: String,
    pub royalty_percentage: Uint64,
    pub max_nft_supply: Uint128,
    /// `bad404` becomes the base denom `factory/<contract>/ubad404`
    pub subdenom: String,
    pub denom_description: String,
    pub denom_name: String,
    pub denom_symbol: String,
    pub denom_uri: String,
    pub denom_uri_hash: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    pub addr: String,
    pub share: Uint64,
}

/// A phase of the public sale (allowlist, public, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintGroup {
    pub name: String,
    /// hex encoded
    pub merkle_root: Option<String>,
    pub merkle_tree_uri: Option<String>,
    pub max_base_denom_amount_per_mint: Uint128,
    pub price_per_base_denom: Uint128,
    pub creators: Vec<Creator>,
    pub start_time: Uint128,
    pub end_time: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    // fungible side
    MintFt {
        amount: Uint128,
        recipient: String,
        mint_group_name: String,
        merkle_proof: Option<Vec<Vec<u8>>>,
    },
    BurnFt {
        amount: Uint128,
    },
    SendFt {
        recipient_addr: String,
        amount: Uint128,
    },

    // cw721 side
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    Revoke {
        spender: String,
        token_id: String,
    },
    RevokeAll {
        operator: String,
    },
    TransferNft {
        recipient: String,
        token_id: String,
    },
    /// Transfers to a contract and calls its receive hook with `msg`.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    Burn {
        token_id: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    Supply {},
    Balance {
        owner: String,
    },
    NumTokens {},
    ContractInfo {},
    NftInfo {
        token_id: String,
    },
    OwnerOf {
        token_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        include_expired: Option<bool>,
    },
    Tokens {
        owner: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    AllTokens {
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Option<String>,
    pub minter: Option<String>,
    pub denom_metadata: DenomMetadata,
    pub royalty_payment_address: Option<String>,
    pub royalty_percentage: Option<Uint64>,
}

/// bank denom metadata of the collection's fungible token
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DenomMetadata {
    pub base: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Timestamp;
    use serde_json::json;

    #[test]
    fn send_nft_carries_base64_msg() {
        let msg = ExecuteMsg::SendNft {
            contract: "neutron1receiver".to_string(),
            token_id: "1".to_string(),
            msg: Binary::from(br#""hello""#.to_vec()),
        };

        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "send_nft": {
                    "contract": "neutron1receiver",
                    "token_id": "1",
                    "msg": "ImhlbGxvIg=="
                }
            })
        );
    }

    #[test]
    fn approve_all_expirations() {
        let never = ExecuteMsg::ApproveAll {
            operator: "neutron1op".to_string(),
            expires: Some(Expiration::Never {}),
        };
        assert_eq!(
            serde_json::to_value(&never).unwrap(),
            json!({ "approve_all": { "operator": "neutron1op", "expires": { "never": {} } } })
        );

        let at = ExecuteMsg::ApproveAll {
            operator: "neutron1op".to_string(),
            expires: Some(Expiration::AtHeight(1_000)),
        };
        assert_eq!(
            serde_json::to_value(&at).unwrap()["approve_all"]["expires"],
            json!({ "at_height": 1000 })
        );

        let at = ExecuteMsg::Approve {
            spender: "neutron1op".to_string(),
            token_id: "1".to_string(),
            expires: Some(Expiration::AtTime(Timestamp::from_seconds(1_700_000_000))),
        };
        assert_eq!(
            serde_json::to_value(&at).unwrap()["approve"]["expires"],
            json!({ "at_time": "1700000000000000000" })
        );
    }

    #[test]
    fn merkle_proof_is_a_list_of_byte_arrays() {
        let msg = ExecuteMsg::MintFt {
            amount: Uint128::new(10),
            recipient: "neutron1me".to_string(),
            mint_group_name: "allowlist".to_string(),
            merkle_proof: Some(vec![vec![0xab, 0x01]]),
        };

        assert_eq!(
            serde_json::to_value(&msg).unwrap()["mint_ft"]["merkle_proof"],
            json!([[171, 1]])
        );
    }

    #[test]
    fn paging_fields_are_omitted_when_unset() {
        let q = QueryMsg::AllTokens {
            start_after: None,
            limit: None,
        };
        assert_eq!(serde_json::to_string(&q).unwrap(), r#"{"all_tokens":{}}"#);

        let q = QueryMsg::OwnerOf {
            token_id: "1".to_string(),
            include_expired: Some(true),
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({ "owner_of": { "token_id": "1", "include_expired": true } })
        );
    }

    #[test]
    fn config_response_exposes_base_denom() {
        let res: ConfigResponse = serde_json::from_value(json!({
            "config": {
                "admin": "neutron1admin",
                "minter": null,
                "denom_metadata": {
                    "description": "cw404 experiment",
                    "denom_units": [],
                    "base": "factory/neutron1collection/ubad404",
                    "display": "factory/neutron1collection/bad404",
                    "name": "Bad 404",
                    "symbol": "BAD404",
                    "uri": "dummy.com",
                    "uri_hash": "dummy_hash"
                },
                "royalty_payment_address": "neutron1admin",
                "royalty_percentage": "10"
            }
        }))
        .unwrap();

        assert_eq!(res.config.denom_metadata.base, "factory/neutron1collection/ubad404");
        assert_eq!(res.config.royalty_percentage, Some(Uint64::new(10)));
        assert_eq!(res.config.minter, None);
    }
}
