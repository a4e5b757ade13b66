//! Der zentrale Datensatz-Container mit Standort-Lookup.

use indexmap::IndexMap;

use super::ConstructionSite;

/// Container für alle geladenen Baustellen-Standorte.
///
/// Die Einfügereihenfolge bleibt erhalten (IndexMap), damit die
/// Standortliste der UI und die Tie-Break-Regel der Stundenauswahl
/// deterministisch der Quell-Reihenfolge folgen.
#[derive(Debug, Default)]
pub struct SiteDataset {
    sites: IndexMap<String, ConstructionSite>,
}

impl SiteDataset {
    /// Erstellt einen leeren Datensatz
    pub fn new() -> Self {
        Self {
            sites: IndexMap::new(),
        }
    }

    /// Baut den Datensatz aus geladenen Standorten auf.
    ///
    /// Standorte ohne Bereichsbezeichnung werden bereits hier aus der
    /// wählbaren Menge ausgeschlossen. Bei doppelten Namen bleibt der
    /// erste Eintrag erhalten.
    pub fn from_sites(sites: Vec<ConstructionSite>) -> Self {
        let mut dataset = Self::new();
        for site in sites {
            dataset.add_site(site);
        }
        dataset
    }

    /// Fügt einen Standort hinzu (leere Namen und Duplikate werden verworfen)
    pub fn add_site(&mut self, site: ConstructionSite) {
        if site.name.is_empty() {
            log::debug!("Standort ohne Bereichsbezeichnung übersprungen");
            return;
        }
        if self.sites.contains_key(&site.name) {
            log::warn!("Doppelter Standortname '{}', erster gewinnt", site.name);
            return;
        }
        self.sites.insert(site.name.clone(), site);
    }

    /// Findet einen Standort per exaktem Namensvergleich
    pub fn find_site(&self, name: &str) -> Option<&ConstructionSite> {
        self.sites.get(name)
    }

    /// Liefert alle wählbaren Standortnamen in Quell-Reihenfolge
    pub fn site_names(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    /// Gibt die Anzahl der Standorte zurück (für UI-Anzeige)
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Gibt `true` zurück, wenn keine Standorte geladen sind.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    fn site(name: &str) -> ConstructionSite {
        ConstructionSite::new(name.to_string(), GeoPoint::new(50.0, 8.0), Vec::new())
    }

    #[test]
    fn test_empty_named_sites_are_excluded_at_load() {
        let dataset = SiteDataset::from_sites(vec![site("Nord"), site(""), site("Süd")]);

        assert_eq!(dataset.site_count(), 2);
        assert!(dataset.find_site("").is_none());
        let names: Vec<&str> = dataset.site_names().collect();
        assert_eq!(names, vec!["Nord", "Süd"]);
    }

    #[test]
    fn test_duplicate_site_name_keeps_first_entry() {
        let mut first = site("Nord");
        first.position = GeoPoint::new(1.0, 2.0);
        let mut second = site("Nord");
        second.position = GeoPoint::new(3.0, 4.0);

        let dataset = SiteDataset::from_sites(vec![first, second]);

        assert_eq!(dataset.site_count(), 1);
        let found = dataset.find_site("Nord").expect("Standort erwartet");
        assert_eq!(found.position, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let dataset = SiteDataset::from_sites(vec![site("Nordbaustelle")]);

        assert!(dataset.find_site("Nordbaustelle").is_some());
        assert!(dataset.find_site("nordbaustelle").is_none());
        assert!(dataset.find_site("Nord").is_none());
    }
}
