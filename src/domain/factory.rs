//! Particle factory - maps a dropdown name to a fresh particle
//!
//! Matching is exact and case-sensitive. Unknown names yield `None`, which the
//! caller treats as "nothing placed". Grass is rule-spawned only.

use serde::Serialize;

use super::particle::Particle;
use super::species::{Species, ALL_SPECIES};

pub fn create(name: &str) -> Option<Particle> {
    let species = match name {
        "Sand" => Species::Sand,
        "Water" => Species::Water,
        "Ice" => Species::Ice,
        "Fire" => Species::Fire,
        "Wood" => Species::Wood,
        "Stone" => Species::Stone,
        "Dirt" => Species::Dirt,
        _ => return None,
    };
    Some(Particle::new(species))
}

/// Species the factory can create, in dropdown order
pub fn placeable_species() -> impl Iterator<Item = Species> {
    ALL_SPECIES.into_iter().filter(|s| s.props().placeable)
}

#[derive(Serialize)]
struct SpeciesManifest {
    format_version: u32,
    species: Vec<SpeciesManifestEntry>,
}

#[derive(Clone, Serialize)]
struct SpeciesManifestEntry {
    name: &'static str,
    #[serde(rename = "type")]
    type_tag: &'static str,
    color: &'static str,
}

/// Dropdown manifest: `{"format_version":1,"species":[{"name","type","color"}, ...]}`
pub fn manifest_json() -> String {
    let out = SpeciesManifest {
        format_version: 1,
        species: placeable_species()
            .map(|s| SpeciesManifestEntry {
                name: s.name(),
                type_tag: s.type_tag(),
                color: s.color(),
            })
            .collect(),
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_every_placeable_species_by_name() {
        for species in placeable_species() {
            let p = create(species.name()).expect("placeable species must be creatable");
            assert_eq!(p.species(), species);
        }
        assert_eq!(placeable_species().count(), 7);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(create("sand"), None);
        assert_eq!(create("SAND"), None);
        assert_eq!(create(" Sand"), None);
    }

    #[test]
    fn unknown_and_hidden_names_yield_none() {
        assert_eq!(create(""), None);
        assert_eq!(create("Lava"), None);
        assert_eq!(create("Grass"), None);
    }

    #[test]
    fn manifest_lists_placeable_species_in_order() {
        let json: serde_json::Value = serde_json::from_str(&manifest_json()).unwrap();
        assert_eq!(json["format_version"], 1);
        let species = json["species"].as_array().unwrap();
        let names: Vec<&str> = species.iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Sand", "Water", "Ice", "Fire", "Wood", "Stone", "Dirt"]);
        assert_eq!(species[1]["type"], "water");
        assert_eq!(species[1]["color"], "blue");
    }
}
