use lanscout_common::envelope::ShareList;
use lanscout_core::discovery::DiscoveryService;

use crate::terminal;

pub async fn run(service: &DiscoveryService, computer: &str) -> anyhow::Result<()> {
    match service.list_shares(computer).await {
        Ok(shares) => terminal::render(&ShareList::new(shares)),
        Err(err) => terminal::render_failure(err),
    }
}
