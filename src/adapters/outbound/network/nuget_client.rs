use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Version index returned by the flat-container endpoint
#[derive(Debug, Deserialize)]
struct VersionIndex {
    #[serde(default)]
    versions: Vec<String>,
}

/// NuGet registry client for fetching package dependencies
///
/// Uses the NuGet v3 flat-container API: the version index of a package is
/// fetched first, then the .nuspec manifest of the latest version is parsed
/// for its `<dependency id="..">` entries.
///
/// # Security
/// - Implements timeout (10 seconds)
/// - Validates package names before building URLs
pub struct NuGetClient {
    client: Client,
    api_url: String,
}

impl NuGetClient {
    const API_ENDPOINT: &'static str = "https://api.nuget.org/v3-flatcontainer";
    const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a new client against the public NuGet registry
    pub fn new() -> Result<Self> {
        Self::with_endpoint(Self::API_ENDPOINT)
    }

    /// Creates a client against a custom flat-container endpoint
    /// (private registries, mirrors, test servers)
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depgraph/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Validates a package name or version for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} must not be empty", component_type);
        }

        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// Fetches the direct dependencies of a package from the registry.
    ///
    /// The registry stores package ids lowercased. Resolution is two
    /// requests: the version index, then the .nuspec of the last listed
    /// version. A package without versions yields an empty list.
    fn fetch_dependencies(&self, package: &str) -> Result<Vec<String>> {
        let package_lower = package.to_lowercase();
        Self::validate_url_component(&package_lower, "Package name")?;

        let encoded_package = urlencoding::encode(&package_lower);
        let index_url = format!("{}/{}/index.json", self.api_url, encoded_package);

        let response = self.client.get(&index_url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("Package '{}' not found in NuGet", package);
        }
        if !response.status().is_success() {
            anyhow::bail!(
                "NuGet registry returned status code {} for '{}'",
                response.status(),
                package
            );
        }

        let index: VersionIndex = response.json()?;
        let latest_version = match index.versions.last() {
            Some(version) => version.clone(),
            None => return Ok(Vec::new()),
        };
        Self::validate_url_component(&latest_version, "Version")?;

        let encoded_version = urlencoding::encode(&latest_version);
        let nuspec_url = format!(
            "{}/{}/{}/{}.nuspec",
            self.api_url, encoded_package, encoded_version, encoded_package
        );

        let response = self.client.get(&nuspec_url).send()?;
        if !response.status().is_success() {
            anyhow::bail!(
                "NuGet registry returned status code {} for '{}' nuspec",
                response.status(),
                package
            );
        }

        let nuspec_content = response.text()?;
        parse_nuspec_dependencies(&nuspec_content)
    }
}

/// Extracts dependency ids from a .nuspec manifest.
///
/// Matches `<dependency id="..">` elements by local name, so any nuspec
/// schema revision parses the same way. Entries repeated across framework
/// groups are kept once, in document order.
fn parse_nuspec_dependencies(nuspec: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(nuspec);
    let mut dependencies: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element)
                if element.local_name().as_ref() == b"dependency" =>
            {
                for attribute in element.attributes().flatten() {
                    if attribute.key.as_ref() == b"id" {
                        let id = attribute.unescape_value()?.into_owned();
                        if !id.is_empty() && !dependencies.contains(&id) {
                            dependencies.push(id);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(dependencies)
}

impl DependencySource for NuGetClient {
    fn direct_dependencies(&self, package: &str) -> Vec<String> {
        match self.fetch_dependencies(package) {
            Ok(dependencies) => dependencies,
            Err(e) => {
                // Lookup failures degrade to a leaf node so discovery continues
                eprintln!("⚠️  Warning: {}", e);
                Vec::new()
            }
        }
    }
}
