use anyhow::Result;
use log::info;
use std::path::Path;

use super::{load_config, parse_json, signing_session};
use crate::cli::Cli;

pub struct DeployArgs<'a> {
    pub name: &'a str,
    /// `None` instantiates the code id already recorded under `name`.
    pub wasm: Option<&'a Path>,
    pub msg: &'a str,
    pub label: Option<&'a str>,
    pub admin: Option<&'a str>,
    pub no_admin: bool,
}

pub async fn run(cli: &Cli, args: DeployArgs<'_>) -> Result<()> {
    let cfg = load_config(cli)?;
    let init_msg = parse_json(args.msg)?;

    let mut session = signing_session(&cfg).await?;

    let admin = match (args.no_admin, args.admin) {
        (true, _) => None,
        (false, Some(admin)) => Some(admin.to_string()),
        (false, None) => Some(session.sender().to_string()),
    };
    let label = args.label.unwrap_or(args.name);

    let res = match args.wasm {
        Some(wasm) => {
            session
                .deploy(args.name, wasm, &init_msg, label, admin)
                .await?
        }
        None => {
            session
                .instantiate(args.name, &init_msg, label, admin)
                .await?
        }
    };

    info!(
        "{} code id {:?}, address saved to {}",
        args.name,
        session.code_ids.get(args.name),
        cfg.book.address_book.display()
    );
    println!("{}", res.address);

    Ok(())
}
