use anyhow::Context;

use prodchain_chaincode::ProductChaincode;
use prodchain_runner::{RunnerConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = RunnerConfig::from_env().context("invalid runner configuration")?;
    prodchain_observability::init(config.log_format);

    let default_creator = config
        .creator_file
        .as_ref()
        .map(|path| {
            std::fs::read(path).with_context(|| format!("failed to read creator file {}", path.display()))
        })
        .transpose()?;
    if default_creator.is_none() {
        tracing::warn!("no default creator configured; transactions must carry their own");
    }

    let session = Session::new(ProductChaincode::new(&config.chaincode_name), default_creator);

    if let Some(args) = &config.init_args {
        let response = session.init(args);
        if !response.is_ok() {
            anyhow::bail!("init failed with status {}: {}", response.status, response.message);
        }
        tracing::info!(keys = session.state().len(), "chaincode initialized");
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let count = session.run(stdin, stdout)?;

    tracing::info!(
        transactions = count,
        keys = session.state().len(),
        "input exhausted"
    );
    Ok(())
}
