use clap::{Parser, Subcommand};
use launchpad_orc::config::Coin;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "launchpad-orc",
    about = "Deploy, execute and query the launchpad, cw404 and astroport contracts.",
    version
)]
pub struct Cli {
    /// Read the chain settings from a yaml file instead of the environment.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Memo attached to every tx.
    #[arg(long, default_value = "", global = true)]
    pub memo: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a wasm file, instantiate it and record it in the address book.
    Deploy {
        /// Logical contract name used as the book key.
        name: String,

        wasm: PathBuf,

        /// InstantiateMsg as JSON.
        #[arg(long, default_value = "{}")]
        msg: String,

        #[arg(long)]
        label: Option<String>,

        /// Contract admin, defaults to the signer.
        #[arg(long)]
        admin: Option<String>,

        /// Instantiate without an admin.
        #[arg(long, conflicts_with = "admin")]
        no_admin: bool,
    },

    /// Instantiate the code id recorded under `name` by an earlier deploy.
    Instantiate {
        name: String,

        /// InstantiateMsg as JSON.
        #[arg(long, default_value = "{}")]
        msg: String,

        #[arg(long)]
        label: Option<String>,

        /// Contract admin, defaults to the signer.
        #[arg(long)]
        admin: Option<String>,

        /// Instantiate without an admin.
        #[arg(long, conflicts_with = "admin")]
        no_admin: bool,
    },

    /// Smart query with a raw JSON message.
    Query {
        /// Book name or contract address.
        contract: String,

        msg: String,
    },

    /// Execute a raw JSON message.
    Execute {
        /// Book name or contract address.
        contract: String,

        msg: String,

        /// Funds to attach, e.g. `1000untrn`. Repeatable.
        #[arg(long = "funds", value_parser = parse_coin)]
        funds: Vec<Coin>,
    },

    /// Launchpad factory.
    Launchpad {
        /// Book name or address of the launchpad.
        #[arg(long, default_value = "launchpad")]
        contract: String,

        #[command(subcommand)]
        command: LaunchpadCommand,
    },

    /// cw404 collection.
    Cw404 {
        /// Book name or address of the collection.
        #[arg(long, default_value = "cw404")]
        contract: String,

        #[command(subcommand)]
        command: Cw404Command,
    },

    /// Astroport pair of a launchpad coin.
    Astroport {
        /// Book name or address of the launchpad that created the coin.
        #[arg(long, default_value = "launchpad")]
        launchpad: String,

        #[command(subcommand)]
        command: AstroportCommand,
    },

    /// Bank transfers from the signer.
    Bank {
        #[command(subcommand)]
        command: BankCommand,
    },
}

#[derive(clap::Args)]
pub struct DenomArgs {
    /// e.g. `meme100`, the base denom becomes `umeme100`
    #[arg(long)]
    pub subdenom: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub symbol: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub uri: String,

    #[arg(long, default_value = "")]
    pub uri_hash: String,
}

#[derive(Subcommand)]
pub enum LaunchpadCommand {
    /// Create a coin and seed its astroport pool.
    CreateCoin {
        #[command(flatten)]
        denom: DenomArgs,

        /// Initial supply in whole denom units.
        #[arg(long)]
        supply: u128,

        /// Defaults to the initial supply.
        #[arg(long)]
        max_supply: Option<u128>,

        #[arg(long)]
        mutable: bool,

        /// Chain denom amount paired with the supply in the pool.
        #[arg(long)]
        liquidity: u64,
    },

    /// Create a cw404 collection.
    CreateCollection {
        #[command(flatten)]
        denom: DenomArgs,

        #[arg(long)]
        max_nft_supply: u128,

        #[arg(long, default_value_t = 10)]
        royalty_percentage: u64,

        /// Defaults to the signer.
        #[arg(long)]
        royalty_address: Option<String>,

        /// JSON array of mint groups, each with `name`, `merkle_root`,
        /// `merkle_tree_uri`, `max_base_denom_amount_per_mint`,
        /// `price_per_base_denom`, `creators`, `start_time` and `end_time`.
        #[arg(long, default_value = "[]")]
        mint_groups: String,

        /// Creation fee in the chain denom.
        #[arg(long, default_value_t = 0)]
        fee: u64,
    },

    /// Mint through a collection's mint group.
    MintFt {
        /// Book name or address of the collection.
        #[arg(long, default_value = "cw404")]
        collection: String,

        /// Amount in base denom.
        amount: u128,

        #[arg(long, default_value = "everyone")]
        mint_group: String,

        /// Defaults to the signer.
        #[arg(long)]
        recipient: Option<String>,

        /// Hex encoded merkle proof element. Repeatable.
        #[arg(long = "proof")]
        proof: Vec<String>,

        /// Mint fee in the chain denom.
        #[arg(long, default_value_t = 0)]
        fee: u64,
    },

    Config,

    Coins,

    CoinsByCreator {
        creator: String,
    },

    Collection {
        contract_addr: String,
    },

    Token {
        subdenom: String,
    },
}

#[derive(Subcommand)]
pub enum Cw404Command {
    MintFt {
        amount: u128,

        #[arg(long, default_value = "everyone")]
        mint_group: String,

        /// Defaults to the signer.
        #[arg(long)]
        recipient: Option<String>,

        /// Hex encoded merkle proof element. Repeatable.
        #[arg(long = "proof")]
        proof: Vec<String>,
    },

    BurnFt {
        amount: u128,
    },

    SendFt {
        recipient: String,
        amount: u128,
    },

    Approve {
        spender: String,
        token_id: String,
    },

    ApproveAll {
        operator: String,
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

    /// Send an NFT to a contract, `msg` is JSON handed to its receive hook.
    SendNft {
        receiver: String,
        token_id: String,
        msg: String,
    },

    Burn {
        token_id: String,
    },

    Config,

    Supply,

    /// Defaults to the signer.
    Balance {
        owner: Option<String>,
    },

    NumTokens,

    ContractInfo,

    NftInfo {
        token_id: String,
    },

    OwnerOf {
        token_id: String,
    },

    /// Defaults to the signer.
    Tokens {
        owner: Option<String>,
    },

    AllTokens,
}

#[derive(Subcommand)]
pub enum AstroportCommand {
    /// Simulate selling `amount` of the chain denom for the coin.
    Simulate {
        subdenom: String,
        amount: u64,
    },

    /// Sell `amount` of the chain denom for the coin.
    Swap {
        subdenom: String,
        amount: u64,

        #[arg(long, default_value = "0.5")]
        max_spread: String,
    },
}

#[derive(Subcommand)]
pub enum BankCommand {
    /// Send native coins, e.g. `700untrn`.
    Send {
        recipient: String,

        #[arg(required = true, value_parser = parse_coin)]
        amount: Vec<Coin>,
    },

    /// Send a collection's fungible token by base denom.
    SendFt {
        recipient: String,
        amount: u64,

        #[arg(long, default_value = "cw404")]
        collection: String,
    },
}

fn parse_coin(s: &str) -> Result<Coin, String> {
    s.parse().map_err(|e: launchpad_orc::config::error::ConfigError| e.to_string())
}
