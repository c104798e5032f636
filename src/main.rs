use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Command};
use commands::deploy::DeployArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Deploy {
            name,
            wasm,
            msg,
            label,
            admin,
            no_admin,
        } => {
            let args = DeployArgs {
                name,
                wasm: Some(wasm),
                msg,
                label: label.as_deref(),
                admin: admin.as_deref(),
                no_admin: *no_admin,
            };
            commands::deploy::run(&cli, args).await
        }
        Command::Instantiate {
            name,
            msg,
            label,
            admin,
            no_admin,
        } => {
            let args = DeployArgs {
                name,
                wasm: None,
                msg,
                label: label.as_deref(),
                admin: admin.as_deref(),
                no_admin: *no_admin,
            };
            commands::deploy::run(&cli, args).await
        }
        Command::Query { contract, msg } => commands::contract::query(&cli, contract, msg).await,
        Command::Execute {
            contract,
            msg,
            funds,
        } => commands::contract::execute(&cli, contract, msg, funds.clone()).await,
        Command::Launchpad { contract, command } => {
            commands::launchpad::run(&cli, contract, command).await
        }
        Command::Cw404 { contract, command } => commands::cw404::run(&cli, contract, command).await,
        Command::Astroport { launchpad, command } => {
            commands::astroport::run(&cli, launchpad, command).await
        }
        Command::Bank { command } => commands::bank::run(&cli, command).await,
    }
}
