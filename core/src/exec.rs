use tokio::process::Command;

/// Runs an external command and captures its stdout.
///
/// A non-zero exit is an error here; callers decide whether that is
/// fatal or just an unreachable/empty answer. The child is killed when
/// the owning task is dropped, so an aborted sweep reclaims its
/// subprocesses instead of leaving them to run out their own timeouts.
pub(crate) async fn run(program: &str, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await?;
    anyhow::ensure!(
        output.status.success(),
        "{program} exited with {}",
        output.status
    );
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
