use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::runtime::Runtime;
use tokio::time::timeout;

/// AptClient adapter for resolving Debian/Ubuntu package dependencies
///
/// Shells out to `apt-cache show` and parses the `Depends:` line of the
/// reported package record. Queries run on a private current-thread tokio
/// runtime so they can be killed after a hard timeout; apt-cache can hang
/// on damaged package indexes.
pub struct AptClient {
    runtime: Runtime,
}

impl AptClient {
    const QUERY_TIMEOUT: Duration = Duration::from_secs(15);
    const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
    const DPKG_STATUS_PATH: &'static str = "/var/lib/dpkg/status";

    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }

    /// Checks whether apt tooling exists on this system.
    ///
    /// The dpkg status database is the cheap positive signal; without it,
    /// a probe query against a package that exists on every Debian-family
    /// system decides. The probe's exit code does not matter, only whether
    /// apt-cache could be run at all.
    pub fn is_available() -> bool {
        if Path::new(Self::DPKG_STATUS_PATH).exists() {
            return true;
        }

        let Ok(runtime) = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        else {
            return false;
        };
        runtime.block_on(async {
            let mut command = Command::new("apt-cache");
            command
                .args(["show", "--no-all-versions", "coreutils"])
                .kill_on_drop(true);
            matches!(timeout(Self::PROBE_TIMEOUT, command.output()).await, Ok(Ok(_)))
        })
    }

    /// Queries apt-cache for the direct dependencies of a package.
    ///
    /// A package apt-cache does not know (non-zero exit or empty output)
    /// yields an empty list. Only a missing apt-cache binary or a timeout
    /// is an error.
    fn fetch_dependencies(&self, package: &str) -> Result<Vec<String>> {
        let queried = self.runtime.block_on(async {
            let mut command = Command::new("apt-cache");
            command
                .args(["show", "--no-all-versions", package])
                .kill_on_drop(true);
            timeout(Self::QUERY_TIMEOUT, command.output()).await
        });

        let output = match queried {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => anyhow::bail!("Failed to run apt-cache for '{}': {}", package, e),
            Err(_) => anyhow::bail!("apt-cache query for '{}' timed out", package),
        };

        if !output.status.success() || output.stdout.is_empty() {
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let Some(depends_line) = stdout.lines().find_map(|line| line.strip_prefix("Depends:"))
        else {
            return Ok(Vec::new());
        };

        Ok(parse_depends_line(depends_line))
    }
}

/// Parses an apt `Depends:` line into bare package names.
///
/// Entries are comma-separated; of an alternative group (`a | b | c`) only
/// the first member counts, and version constraints in parentheses are
/// stripped. Repeated names are kept once, in line order.
fn parse_depends_line(line: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();
    for part in line.split(',') {
        let alternative = match part.split_once('|') {
            Some((first, _)) => first,
            None => part,
        };
        let name = match alternative.split_once('(') {
            Some((prefix, _)) => prefix,
            None => alternative,
        };
        let name = name.trim();
        if !name.is_empty() && !dependencies.iter().any(|d| d == name) {
            dependencies.push(name.to_string());
        }
    }
    dependencies
}

impl DependencySource for AptClient {
    fn direct_dependencies(&self, package: &str) -> Vec<String> {
        match self.fetch_dependencies(package) {
            Ok(dependencies) => dependencies,
            Err(e) => {
                eprintln!("⚠️  Warning: {}", e);
                Vec::new()
            }
        }
    }
}
