use cosmwasm_std::{Uint128, Uint64};
use serde::{Deserialize, Serialize};

use super::cw404::MintGroup;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Creates a token factory coin paired with the chain denom on astroport.
    /// The native funds sent along become the initial pool liquidity.
    CreateCoin {
        immutable: bool,
        /// whole denom units, the contract scales to the base denom
        initial_supply_in_denom: Uint128,
        max_supply_in_denom: Uint128,
        subdenom: String,
        denom_description: String,
        denom_name: String,
        denom_symbol: String,
        denom_uri: String,
        denom_uri_hash: String,
    },
    CreateCw404Collection {
        royalty_payment_address: String,
        royalty_percentage: Uint64,
        max_nft_supply: Uint128,
        subdenom: String,
        denom_description: String,
        denom_name: String,
        denom_symbol: String,
        denom_uri: String,
        denom_uri_hash: String,
        mint_groups: Vec<MintGroup>,
    },
    /// Mints through the collection's mint group, NFTs follow implicitly.
    MintFt {
        collection_addr: String,
        /// in base denom
        amount: Uint128,
        recipient: String,
        mint_group_name: String,
        merkle_proof: Option<Vec<Vec<u8>>>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    Coins {},
    CoinsByCreator { creator_addr: String },
    Cw404CollectionByContract { contract_addr: String },
    Token { subdenom: String },
}

/// Answer to [QueryMsg::Token]; only the AMM pair is decoded.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenResponse {
    pub token_info: TokenInfo,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    pub astroport_pair_info: PairInfo,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PairInfo {
    pub contract_addr: String,
    pub liquidity_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_coin_shape() {
        let msg = ExecuteMsg::CreateCoin {
            immutable: true,
            initial_supply_in_denom: Uint128::new(1_000_000_000),
            max_supply_in_denom: Uint128::new(1_000_000_000),
            subdenom: "meme100".to_string(),
            denom_description: "meme experiment 100".to_string(),
            denom_name: "Meme100".to_string(),
            denom_symbol: "MEME100".to_string(),
            denom_uri: "dummy.com".to_string(),
            denom_uri_hash: "dummy_hash".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "create_coin": {
                    "immutable": true,
                    "initial_supply_in_denom": "1000000000",
                    "max_supply_in_denom": "1000000000",
                    "subdenom": "meme100",
                    "denom_description": "meme experiment 100",
                    "denom_name": "Meme100",
                    "denom_symbol": "MEME100",
                    "denom_uri": "dummy.com",
                    "denom_uri_hash": "dummy_hash"
                }
            })
        );
    }

    #[test]
    fn mint_ft_without_proof() {
        let msg = ExecuteMsg::MintFt {
            collection_addr: "neutron1collection".to_string(),
            amount: Uint128::new(5_500_000),
            recipient: "neutron1me".to_string(),
            mint_group_name: "everyone".to_string(),
            merkle_proof: None,
        };

        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["mint_ft"]["amount"], json!("5500000"));
        assert_eq!(v["mint_ft"]["merkle_proof"], json!(null));
    }

    #[test]
    fn unit_queries_are_empty_objects() {
        assert_eq!(serde_json::to_string(&QueryMsg::Coins {}).unwrap(), r#"{"coins":{}}"#);
        assert_eq!(
            serde_json::to_value(QueryMsg::Cw404CollectionByContract {
                contract_addr: "neutron1".to_string()
            })
            .unwrap(),
            json!({ "cw404_collection_by_contract": { "contract_addr": "neutron1" } })
        );
    }

    #[test]
    fn token_response_ignores_extra_fields() {
        let res: TokenResponse = serde_json::from_value(json!({
            "token_info": {
                "creator_addr": "neutron1creator",
                "astroport_pair_info": {
                    "asset_infos": [],
                    "contract_addr": "neutron1pair",
                    "liquidity_token": "neutron1lp",
                    "pair_type": { "xyk": {} }
                }
            }
        }))
        .unwrap();

        assert_eq!(res.token_info.astroport_pair_info.contract_addr, "neutron1pair");
        assert_eq!(res.token_info.astroport_pair_info.liquidity_token, "neutron1lp");
    }
}
