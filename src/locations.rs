/// Location registry for the Malaysia flood risk service.
///
/// Defines the canonical list of flood-prone states and districts the
/// service can forecast for. This is the single source of truth for place
/// names — all other modules should reference locations from here rather
/// than hardcoding district strings, since these names are also what gets
/// sent to the geocoder.

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// A Malaysian state and its flood-prone districts.
pub struct Region {
    /// Official state name, as recognized by Nominatim.
    pub state: &'static str,
    /// Districts within the state with a history of flooding, ordered
    /// roughly by flood frequency.
    pub districts: &'static [&'static str],
}

/// All monitored flood-prone regions.
///
/// Sources: Malaysian Department of Irrigation and Drainage flood reports;
/// district lists match what the public dashboard offers for selection.
pub static REGION_REGISTRY: &[Region] = &[
    Region {
        state: "Selangor",
        districts: &["Shah Alam", "Petaling", "Klang", "Gombak", "Hulu Langat", "Sabak Bernam"],
    },
    Region {
        state: "Johor",
        districts: &["Johor Bahru", "Batu Pahat", "Muar", "Kluang", "Segamat", "Kota Tinggi"],
    },
    Region {
        state: "Sarawak",
        districts: &["Kuching", "Sibu", "Miri", "Bintulu", "Sri Aman", "Limbang"],
    },
    Region {
        state: "Sabah",
        districts: &["Kota Kinabalu", "Sandakan", "Tawau", "Lahad Datu", "Beaufort", "Keningau"],
    },
    Region {
        state: "Kelantan",
        districts: &["Kota Bharu", "Pasir Mas", "Tumpat", "Gua Musang", "Tanah Merah"],
    },
    Region {
        state: "Terengganu",
        districts: &["Kuala Terengganu", "Dungun", "Kemaman", "Besut", "Setiu"],
    },
    Region {
        state: "Pahang",
        districts: &["Kuantan", "Temerloh", "Jerantut", "Raub", "Bentong"],
    },
    Region {
        state: "Penang",
        districts: &["George Town", "Seberang Perai", "Balik Pulau"],
    },
    Region {
        state: "Perak",
        districts: &["Ipoh", "Taiping", "Teluk Intan", "Lumut"],
    },
    Region {
        state: "Negeri Sembilan",
        districts: &["Seremban", "Port Dickson", "Jempol"],
    },
    Region {
        state: "Melaka",
        districts: &["Melaka Tengah", "Alor Gajah", "Jasin"],
    },
    Region {
        state: "Kedah",
        districts: &["Alor Setar", "Sungai Petani", "Kulim"],
    },
    Region {
        state: "Perlis",
        districts: &["Kangar", "Arau"],
    },
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Returns all state names, in registry order.
pub fn all_states() -> Vec<&'static str> {
    REGION_REGISTRY.iter().map(|r| r.state).collect()
}

/// Looks up a region by state name. Returns `None` if not found.
/// Matching is exact — state names are canonical, not user free-text.
pub fn find_region(state: &str) -> Option<&'static Region> {
    REGION_REGISTRY.iter().find(|r| r.state == state)
}

/// Returns the districts for a state, or an empty slice for an unknown state.
pub fn districts_in(state: &str) -> &'static [&'static str] {
    find_region(state).map(|r| r.districts).unwrap_or(&[])
}

/// Checks whether a district is monitored under the given state.
pub fn is_monitored(state: &str, district: &str) -> bool {
    districts_in(state).contains(&district)
}

/// Builds the forward-geocoding query for a district, in the form the
/// geocoder resolves most reliably: "{district}, {state}, Malaysia".
pub fn geocode_query(state: &str, district: &str) -> String {
    format!("{}, {}, Malaysia", district, state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_states() {
        let mut seen = std::collections::HashSet::new();
        for region in REGION_REGISTRY {
            assert!(
                seen.insert(region.state),
                "duplicate state '{}' found in REGION_REGISTRY",
                region.state
            );
        }
    }

    #[test]
    fn test_no_duplicate_districts_within_a_state() {
        for region in REGION_REGISTRY {
            let mut seen = std::collections::HashSet::new();
            for district in region.districts {
                assert!(
                    seen.insert(district),
                    "duplicate district '{}' in state '{}'",
                    district,
                    region.state
                );
            }
        }
    }

    #[test]
    fn test_every_state_has_at_least_one_district() {
        for region in REGION_REGISTRY {
            assert!(
                !region.districts.is_empty(),
                "state '{}' must list at least one district",
                region.state
            );
        }
    }

    #[test]
    fn test_registry_contains_all_thirteen_states() {
        let expected = [
            "Selangor", "Johor", "Sarawak", "Sabah", "Kelantan", "Terengganu",
            "Pahang", "Penang", "Perak", "Negeri Sembilan", "Melaka", "Kedah",
            "Perlis",
        ];
        let states = all_states();
        assert_eq!(states.len(), expected.len());
        for state in &expected {
            assert!(states.contains(state), "REGION_REGISTRY missing state '{}'", state);
        }
    }

    #[test]
    fn test_find_region_returns_correct_entry() {
        let region = find_region("Kelantan").expect("Kelantan should be in registry");
        assert_eq!(region.state, "Kelantan");
        assert!(region.districts.contains(&"Kota Bharu"));
    }

    #[test]
    fn test_find_region_returns_none_for_unknown_state() {
        assert!(find_region("Singapore").is_none());
        // Matching is exact, not case-insensitive.
        assert!(find_region("kelantan").is_none());
    }

    #[test]
    fn test_districts_in_unknown_state_is_empty() {
        assert!(districts_in("Atlantis").is_empty());
    }

    #[test]
    fn test_is_monitored_requires_correct_state_pairing() {
        assert!(is_monitored("Selangor", "Klang"));
        // Klang is in Selangor, not Johor.
        assert!(!is_monitored("Johor", "Klang"));
    }

    #[test]
    fn test_geocode_query_shape() {
        assert_eq!(
            geocode_query("Pahang", "Kuantan"),
            "Kuantan, Pahang, Malaysia"
        );
    }

    #[test]
    fn test_place_names_have_no_stray_whitespace() {
        // Leading/trailing whitespace would silently degrade geocoder matches.
        for region in REGION_REGISTRY {
            assert_eq!(region.state, region.state.trim());
            for district in region.districts {
                assert_eq!(*district, district.trim());
            }
        }
    }
}
