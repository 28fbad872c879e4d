/// PackageUrlResolver service for deriving a homepage from a package identifier
///
/// Purely syntactic: no network access. Identifiers that do not have the
/// `type/name@version` shape simply have no known homepage.
pub struct PackageUrlResolver;

/// Parsed parts of a `type/name@version` identifier
#[derive(Debug, PartialEq, Eq)]
struct PackageIdentifier<'a> {
    package_type: &'a str,
    name: String,
}

impl PackageUrlResolver {
    /// Derives the homepage URL for a package identifier
    ///
    /// # Examples
    /// ```
    /// use sbom_licenses::license_resolution::services::PackageUrlResolver;
    ///
    /// assert_eq!(
    ///     PackageUrlResolver::homepage("npm/left-pad@1.3.0").as_deref(),
    ///     Some("https://www.npmjs.com/package/left-pad")
    /// );
    /// assert_eq!(PackageUrlResolver::homepage("cargo/rand@0.8.0"), None);
    /// ```
    pub fn homepage(purl: &str) -> Option<String> {
        let identifier = Self::parse(purl)?;
        let name = identifier.name.as_str();

        match identifier.package_type {
            "npm" => Some(format!("https://www.npmjs.com/package/{}", name)),
            "pypi" => Some(format!("https://pypi.org/project/{}/", name)),
            "golang" => Some(Self::golang_homepage(name)),
            _ => None,
        }
    }

    fn golang_homepage(name: &str) -> String {
        if let Some(path) = name.strip_prefix("github.com/") {
            let mut segments = path.split('/').filter(|s| !s.is_empty());
            if let (Some(owner), Some(repo)) = (segments.next(), segments.next()) {
                return format!("https://github.com/{}/{}", owner, repo);
            }
        }
        format!("https://pkg.go.dev/{}", name)
    }

    fn parse(purl: &str) -> Option<PackageIdentifier<'_>> {
        let without_scheme = purl.strip_prefix("pkg:").unwrap_or(purl);
        let (package_type, rest) = without_scheme.split_once('/')?;
        let (raw_name, version) = rest.rsplit_once('@')?;

        if package_type.is_empty() || raw_name.is_empty() || version.is_empty() {
            return None;
        }

        let name = urlencoding::decode(raw_name).ok()?.into_owned();

        Some(PackageIdentifier { package_type, name })
    }
}
