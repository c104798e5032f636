use anyhow::Result;
use launchpad_orc::config::Coin;
use launchpad_orc::msg::cw404::{ConfigResponse, QueryMsg};
use launchpad_orc::orchestrator::invoker;

use super::{load_config, print_tx, resolve, signing_session};
use crate::cli::{BankCommand, Cli};

pub async fn run(cli: &Cli, cmd: &BankCommand) -> Result<()> {
    let cfg = load_config(cli)?;
    let session = signing_session(&cfg).await?;

    let (recipient, amount) = match cmd {
        BankCommand::Send { recipient, amount } => (recipient, amount.clone()),
        BankCommand::SendFt {
            recipient,
            amount,
            collection,
        } => {
            // the collection's fungible side is a plain bank denom
            let collection = resolve(&session.address_book, &cfg.chain_cfg.prefix, collection)?;
            let res: ConfigResponse =
                invoker::query(session.handle(), &collection, &QueryMsg::Config {})
                    .await?
                    .data()?;

            (recipient, vec![Coin::new(*amount, res.config.denom_metadata.base)])
        }
    };

    let res = invoker::send(
        session.handle(),
        session.sender(),
        recipient,
        amount,
        &cli.memo,
    )
    .await?;

    print_tx(&res);
    Ok(())
}
