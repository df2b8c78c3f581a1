//! RPC interactions with the target cluster

use log::debug;
use solana_client::rpc_client::RpcClient;
use solana_sdk::hash::Hash;

use crate::errors::BuilderResult;

/// Handle to the cluster the transactions are built against
pub struct Cluster {
    rpc_client: RpcClient,
}

impl Cluster {
    /// Connect to the given RPC URL
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_client: RpcClient::new(rpc_url.to_string()),
        }
    }

    /// Fetch the latest blockhash to anchor transaction lifetimes
    pub async fn latest_blockhash(&self) -> BuilderResult<Hash> {
        let blockhash = self.rpc_client.get_latest_blockhash()?;
        debug!("Fetched latest blockhash: {}", blockhash);

        Ok(blockhash)
    }
}
