//! Candidate eligibility.

use fastrelay_types::{CandidateServer, SelectionConfig};

/// Decides which catalog entries are worth probing.
///
/// A candidate is eligible when it is active, its diskless flag equals
/// `diskless_only`, it has a probe address, and (when a country is set) its
/// country code matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityFilter {
    country: Option<String>,
    diskless_only: bool,
}

impl EligibilityFilter {
    pub fn new(country: Option<&str>, diskless_only: bool) -> Self {
        let country = country.map(|c| c.trim().to_ascii_lowercase()).filter(|c| !c.is_empty());
        Self { country, diskless_only }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.country.as_deref(), config.diskless_only)
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn diskless_only(&self) -> bool {
        self.diskless_only
    }

    pub fn accepts(&self, server: &CandidateServer) -> bool {
        server.active
            && server.diskless == self.diskless_only
            && server.has_probe_address()
            && self.country.as_deref().map_or(true, |c| server.is_in_country(c))
    }

    /// Eligible candidates in catalog order.
    pub fn eligible<'a>(
        &'a self,
        catalog: &'a [CandidateServer],
    ) -> impl Iterator<Item = &'a CandidateServer> + 'a {
        catalog.iter().filter(move |server| self.accepts(server))
    }

    pub fn count_eligible(&self, catalog: &[CandidateServer]) -> usize {
        self.eligible(catalog).count()
    }
}
