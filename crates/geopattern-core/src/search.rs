// crates/geopattern-core/src/search.rs
use crate::common::RegistryStats;
use crate::model::CountryPattern;
use crate::text::contains_lowercase;
use crate::traits::NameMatch;
use crate::validator::CountryValidator;

impl CountryValidator {
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            countries: self.slots.len(),
            phone_patterns: self.slots.iter().filter(|s| s.phone.is_some()).count(),
            postal_patterns: self.slots.iter().filter(|s| s.postal.is_some()).count(),
        }
    }

    /// Countries whose name contains `term`, ignoring case.
    ///
    /// Results keep registry order. An empty term matches every country.
    /// Accents are significant here; see
    /// [`search_by_name_folded`](Self::search_by_name_folded) for the loose
    /// variant.
    pub fn search_by_name(&self, term: &str) -> Vec<&CountryPattern> {
        let q = term.to_lowercase();
        self.countries()
            .filter(|c| contains_lowercase(&c.name, &q))
            .collect()
    }

    /// Like [`search_by_name`](Self::search_by_name) but also folds accents,
    /// so `"cote"` finds `"Côte d'Ivoire"`.
    pub fn search_by_name_folded(&self, term: &str) -> Vec<&CountryPattern> {
        self.countries().filter(|c| c.name_contains(term)).collect()
    }

    /// First country whose whole name equals `name`, ignoring case and accents.
    pub fn find_by_name(&self, name: &str) -> Option<&CountryPattern> {
        self.countries().find(|c| c.is_named(name))
    }
}
