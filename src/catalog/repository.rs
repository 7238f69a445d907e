//! In-memory operations over a loaded [`Catalog`].
//!
//! Positions are 1-based, matching what the shell displays. Every operation
//! validates before it mutates, so a failed call leaves the catalog untouched.

use super::types::{Catalog, Profile, ProfileId};
use crate::error::{Result, SwatchError};
use crate::utils::parsing::parse_colours;

/// Mutable view over a catalog.
pub struct Repository<'a> {
    catalog: &'a mut Catalog,
}

impl<'a> Repository<'a> {
    pub fn new(catalog: &'a mut Catalog) -> Self {
        Self { catalog }
    }

    pub fn len(&self) -> usize {
        self.catalog.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.profiles.is_empty()
    }

    /// Profile at a 1-based position.
    pub fn get(&self, position: usize) -> Result<&Profile> {
        let idx = to_index("profile", position, self.len())?;
        Ok(&self.catalog.profiles[idx])
    }

    /// Profile with the given id.
    pub fn find(&self, id: ProfileId) -> Option<&Profile> {
        self.catalog.profiles.iter().find(|p| p.id == id)
    }

    /// 1-based position of the profile with the given id.
    pub fn position_of(&self, id: ProfileId) -> Option<usize> {
        self.catalog
            .profiles
            .iter()
            .position(|p| p.id == id)
            .map(|idx| idx + 1)
    }

    /// Append a new profile.
    ///
    /// The four scalar fields are trimmed and must be non-empty.
    /// `colours` is a comma-separated list; blank fragments are dropped.
    pub fn add_profile(
        &mut self,
        manufacturer: &str,
        material: &str,
        temp_nozzle: &str,
        temp_bed: &str,
        colours: &str,
    ) -> Result<&Profile> {
        let manufacturer = required("manufacturer", manufacturer)?;
        let material = required("material", material)?;
        let temp_nozzle = required("nozzle temperature", temp_nozzle)?;
        let temp_bed = required("bed temperature", temp_bed)?;

        let profile = Profile {
            id: self.catalog.next_id(),
            manufacturer,
            material,
            temp_nozzle,
            temp_bed,
            colours: parse_colours(colours),
        };

        log::debug!("Adding profile {} (id {})", profile.display_name(), profile.id);
        self.catalog.profiles.push(profile);
        Ok(&self.catalog.profiles[self.catalog.profiles.len() - 1])
    }

    /// Append colours to an existing profile. Returns how many were added.
    pub fn add_colours(&mut self, position: usize, colours: &str) -> Result<usize> {
        let idx = to_index("profile", position, self.len())?;

        let new_colours = parse_colours(colours);
        if new_colours.is_empty() {
            return Err(SwatchError::EmptyInput("colours"));
        }

        let added = new_colours.len();
        self.catalog.profiles[idx].colours.extend(new_colours);
        Ok(added)
    }

    /// Remove the profile at a 1-based position. Later profiles shift left.
    pub fn remove_profile(&mut self, position: usize) -> Result<Profile> {
        let idx = to_index("profile", position, self.len())?;
        Ok(self.catalog.profiles.remove(idx))
    }

    /// Remove the profile with the given id.
    pub fn remove_profile_by_id(&mut self, id: ProfileId) -> Result<Profile> {
        let position = self
            .position_of(id)
            .ok_or_else(|| SwatchError::InvalidInput(format!("No profile with id {}", id)))?;
        self.remove_profile(position)
    }

    /// Remove one colour from a profile; both positions are 1-based.
    pub fn remove_colour(&mut self, position: usize, colour: usize) -> Result<String> {
        let idx = to_index("profile", position, self.len())?;
        let profile = &mut self.catalog.profiles[idx];

        if profile.colours.is_empty() {
            return Err(SwatchError::EmptyProfile(profile.display_name()));
        }

        let colour_idx = to_index("colour", colour, profile.colours.len())?;
        Ok(profile.colours.remove(colour_idx))
    }
}

/// Convert a 1-based position into a vector index.
fn to_index(what: &'static str, position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        return Err(SwatchError::InvalidIndex {
            what,
            index: position,
            max: len,
        });
    }
    Ok(position - 1)
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SwatchError::EmptyInput(field));
    }
    Ok(value.to_string())
}
