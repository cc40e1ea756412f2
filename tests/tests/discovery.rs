use std::collections::HashSet;

use tokio_util::sync::CancellationToken;

use std::time::{Duration, Instant};

use lanscout_common::config::ScanConfig;
use lanscout_common::error::DiscoveryError;
use lanscout_common::model::Host;
use lanscout_core::discovery::DiscoveryService;
use lanscout_integration_tests::{
    FixedBrowser, FixedShares, HangingProbe, NoNames, StaticProbe, TableResolver,
    UnreachableShares, file_only_service, scanner_with, scanner_with_config,
};

#[tokio::test]
async fn sweep_reports_exactly_the_reachable_addresses() {
    let scanner = scanner_with(StaticProbe::new(&["10.0.0.5", "10.0.0.200"]), NoNames);

    let hosts = scanner.sweep("10.0.0").await;

    let ips: HashSet<String> = hosts.iter().filter_map(|h| h.ip.clone()).collect();
    let expected: HashSet<String> = ["10.0.0.5", "10.0.0.200"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(ips, expected);
    // membership is idempotent: one host per reachable address
    assert_eq!(hosts.len(), 2);
}

#[tokio::test]
async fn unresolved_hosts_fall_back_to_their_address() {
    let scanner = scanner_with(StaticProbe::new(&["192.168.1.7"]), NoNames);

    let hosts = scanner.sweep("192.168.1").await;

    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].name, "192.168.1.7");
    assert_eq!(hosts[0].path, r"\\192.168.1.7");
    assert_eq!(hosts[0].ip.as_deref(), Some("192.168.1.7"));
}

#[tokio::test]
async fn resolved_hosts_use_their_name() {
    let scanner = scanner_with(
        StaticProbe::new(&["192.168.1.7"]),
        TableResolver::new(&[("192.168.1.7", "WORKSTATION7")]),
    );

    let hosts = scanner.sweep("192.168.1").await;

    assert_eq!(hosts[0].name, "WORKSTATION7");
    assert_eq!(hosts[0].path, r"\\WORKSTATION7");
    assert_eq!(hosts[0].ip.as_deref(), Some("192.168.1.7"));
}

#[tokio::test]
async fn dead_segment_is_an_empty_result_not_an_error() {
    let scanner = scanner_with(StaticProbe::nothing(), NoNames);
    assert!(scanner.sweep("10.9.9").await.is_empty());
}

#[tokio::test]
async fn malformed_segment_degrades_to_empty() {
    let scanner = scanner_with(StaticProbe::new(&["10.0.0.1"]), NoNames);
    assert!(scanner.sweep("front.office.lan").await.is_empty());
    assert!(scanner.sweep("10.0.0.0").await.is_empty());
}

#[tokio::test]
async fn sweep_deadline_cuts_off_stuck_probes() {
    let config = ScanConfig {
        probe_timeout: Duration::from_millis(10),
        max_in_flight: 16,
        sweep_timeout: Duration::from_millis(200),
    };
    let scanner = scanner_with_config(HangingProbe, NoNames, config);

    let start = Instant::now();
    let hosts = scanner.sweep("10.0.0").await;

    assert!(hosts.is_empty());
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "sweep did not respect its deadline"
    );
}

#[tokio::test]
async fn cancelled_sweep_stops_early() {
    let scanner = scanner_with(StaticProbe::new(&["10.0.0.1"]), NoNames);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let hosts = scanner.sweep_with_cancel("10.0.0", &cancel).await;
    assert!(hosts.is_empty());
}

#[tokio::test]
async fn passive_discovery_comes_from_the_browse_list() {
    let browsed = vec![Host::named("DESKTOP-A1"), Host::named("NAS")];
    let service = DiscoveryService::with_backends(
        scanner_with(StaticProbe::nothing(), NoNames),
        Box::new(FixedBrowser(browsed.clone())),
        Box::new(FixedShares(Vec::new())),
    );

    assert_eq!(service.discover_hosts(None).await, browsed);
}

#[tokio::test]
async fn segment_selects_the_active_sweep() {
    let service = DiscoveryService::with_backends(
        scanner_with(StaticProbe::new(&["10.0.0.3"]), NoNames),
        // browse list would say something else entirely
        Box::new(FixedBrowser(vec![Host::named("GHOST")])),
        Box::new(FixedShares(Vec::new())),
    );

    let hosts = service.discover_hosts(Some("10.0.0")).await;
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].ip.as_deref(), Some("10.0.0.3"));
}

#[tokio::test]
async fn missing_computer_parameter_never_reaches_the_backend() {
    let service = DiscoveryService::with_backends(
        scanner_with(StaticProbe::nothing(), NoNames),
        Box::new(FixedBrowser(Vec::new())),
        Box::new(UnreachableShares),
    );

    let err = service.list_shares("").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::InvalidArgument("computer")));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn missing_share_parameter_is_rejected_everywhere() {
    let service = file_only_service();

    let err = service.list_files("", "").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::InvalidArgument("share")));

    let err = service.fetch_file("", "x").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::InvalidArgument("share")));

    let err = service.upload("", "", "x", b"x").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::InvalidArgument("share")));
}
