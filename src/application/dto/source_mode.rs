/// Dependency source mode enumeration
///
/// Selects which backend resolves direct dependencies. Both the CLI
/// (inbound) and the source factory wiring in main need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Static JSON test-repository file
    Test,
    /// NuGet package registry (default)
    Nuget,
    /// Local apt package database
    Apt,
}

impl std::str::FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" => Ok(SourceMode::Test),
            "nuget" => Ok(SourceMode::Nuget),
            "apt" => Ok(SourceMode::Apt),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'test', 'nuget' or 'apt'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceMode::Test => write!(f, "test"),
            SourceMode::Nuget => write!(f, "nuget"),
            SourceMode::Apt => write!(f, "apt"),
        }
    }
}
