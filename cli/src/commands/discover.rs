use lanscout_common::envelope::HostList;
use lanscout_core::discovery::DiscoveryService;

use crate::terminal;

pub async fn run(service: &DiscoveryService, segment: Option<&str>) -> anyhow::Result<()> {
    let hosts = service.discover_hosts(segment).await;
    terminal::render(&HostList::new(hosts))
}
