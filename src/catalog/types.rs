use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stable identifier of a profile within one catalog file.
///
/// `0` means "not yet assigned" (files written before ids existed).
pub type ProfileId = u32;

/// One filament SKU: manufacturer, material, print temperatures and colours.
///
/// Temperatures are kept as the strings the user typed ("220", "220C", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: ProfileId,
    pub manufacturer: String,
    pub material: String,
    pub temp_nozzle: String,
    pub temp_bed: String,
    #[serde(default)]
    pub colours: Vec<String>,
}

impl Profile {
    /// Human-readable label, `"<manufacturer> <material>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.material)
    }
}

/// Root document of the catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profiles: Vec<Profile>,
}

impl Catalog {
    /// Total number of colours across all profiles.
    pub fn colour_count(&self) -> usize {
        self.profiles.iter().map(|p| p.colours.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn max_id(&self) -> ProfileId {
        self.profiles.iter().map(|p| p.id).max().unwrap_or(0)
    }

    /// Next free id (one past the largest assigned id).
    ///
    /// When the largest id is `ProfileId::MAX` the catalog is renumbered
    /// from 1 first, so the result is never the unassigned sentinel.
    pub fn next_id(&mut self) -> ProfileId {
        if let Some(id) = self.max_id().checked_add(1) {
            return id;
        }
        self.renumber();
        self.max_id() + 1
    }

    /// Reassign every id as its 1-based position.
    pub fn renumber(&mut self) {
        log::info!("Profile ids exhausted, renumbering {} profile(s)", self.profiles.len());
        for (i, profile) in self.profiles.iter_mut().enumerate() {
            profile.id = i as ProfileId + 1;
        }
    }

    /// Give every unassigned or duplicated id a fresh value.
    ///
    /// Returns the number of profiles that were renumbered.
    pub fn normalize_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let needs_id: Vec<bool> = self
            .profiles
            .iter()
            .map(|p| p.id == 0 || !seen.insert(p.id))
            .collect();
        let missing = needs_id.iter().filter(|&&n| n).count();

        if missing == 0 {
            return 0;
        }

        let max = self.max_id();
        let fits = ProfileId::try_from(missing)
            .ok()
            .and_then(|n| max.checked_add(n))
            .is_some();
        if !fits {
            self.renumber();
            return self.profiles.len();
        }

        let mut next = max;
        for (profile, needs) in self.profiles.iter_mut().zip(needs_id) {
            if needs {
                next += 1;
                profile.id = next;
            }
        }

        missing
    }
}
