use shared::{AccountsClient, Config, ParserClient, Result};
use std::sync::Arc;

/// Shared application state: the immutable configuration plus the two
/// upstream clients, built once at startup. Nothing in here is mutated
/// after construction, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub accounts: Arc<AccountsClient>,
    pub parser: Arc<ParserClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let accounts = Arc::new(AccountsClient::new(&config.upstreams)?);
        let parser = Arc::new(ParserClient::new(&config.upstreams)?);

        Ok(AppState {
            config,
            accounts,
            parser,
        })
    }
}
