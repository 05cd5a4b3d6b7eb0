use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{LeagueRankError, LrResult};

/// Per-species immutable base values, sourced from the external data
/// pipeline. Identity belongs to the owning species/form record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: i32,
    pub defense: i32,
    pub stamina: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesNames {
    pub en: String,
    #[serde(default)]
    pub ko: String,
}

impl SpeciesNames {
    /// Localized name with English fallback.
    pub fn display(&self) -> &str {
        if self.ko.is_empty() {
            &self.en
        } else {
            &self.ko
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Stable `id__FORM` identity, e.g. "618__GALARIAN".
    pub pointer: String,
    pub id: u32,
    pub form: String,
    pub names: SpeciesNames,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub stats: BaseStats,
}

/// Normalized alias-index entry. The raw file may still carry the legacy
/// bare-pointer form; both are folded into this shape at load time.
#[derive(Debug, Clone)]
pub struct NameIndexEntry {
    pub pointer: String,
    pub display: String,
}

#[derive(Deserialize)]
struct RawCatalog {
    species: HashMap<String, RawSpecies>,
    #[serde(default)]
    name_index: HashMap<String, RawNameEntry>,
}

#[derive(Deserialize)]
struct RawSpecies {
    id: u32,
    form: String,
    names: SpeciesNames,
    #[serde(default)]
    aliases: Vec<String>,
    stats: BaseStats,
}

/// Legacy index entries were either a bare pointer string or a
/// `{ref, display}` object; both are accepted here and nowhere else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNameEntry {
    Pointer(String),
    Named {
        #[serde(rename = "ref")]
        pointer: String,
        display: String,
    },
}

/// The species-data collaborator boundary: catalog records plus a normalized
/// alias index for name lookup.
#[derive(Debug)]
pub struct SpeciesCatalog {
    records: Vec<SpeciesRecord>,
    by_pointer: HashMap<String, usize>,
    name_index: HashMap<String, NameIndexEntry>,
}

fn normalize_alias(value: &str) -> String {
    value.trim().to_lowercase()
}

impl SpeciesCatalog {
    pub fn load_from_file(path: impl AsRef<Path>) -> LrResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> LrResult<Self> {
        let raw: RawCatalog = serde_json::from_reader(reader)?;

        let mut records: Vec<SpeciesRecord> = Vec::with_capacity(raw.species.len());
        for (pointer, species) in raw.species {
            let stats = species.stats;
            if stats.attack <= 0 || stats.defense <= 0 || stats.stamina <= 0 {
                return Err(LeagueRankError::Validation(format!(
                    "Species '{}' has non-positive base stats",
                    pointer
                )));
            }
            records.push(SpeciesRecord {
                pointer,
                id: species.id,
                form: species.form,
                names: species.names,
                aliases: species.aliases,
                stats,
            });
        }
        records.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.form.cmp(&b.form)));

        let by_pointer: HashMap<String, usize> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.pointer.clone(), i))
            .collect();

        let mut name_index: HashMap<String, NameIndexEntry> = HashMap::new();
        for (alias, entry) in raw.name_index {
            let (pointer, display) = match entry {
                RawNameEntry::Pointer(pointer) => (pointer, alias.clone()),
                RawNameEntry::Named { pointer, display } => (pointer, display),
            };
            if !by_pointer.contains_key(&pointer) {
                return Err(LeagueRankError::Validation(format!(
                    "Name index alias '{}' references unknown species '{}'",
                    alias, pointer
                )));
            }
            name_index
                .entry(normalize_alias(&alias))
                .or_insert(NameIndexEntry { pointer, display });
        }

        // Every record's own names and aliases resolve too; explicit index
        // entries win on collision.
        for record in &records {
            let mut candidates: Vec<&str> = vec![&record.names.en];
            if !record.names.ko.is_empty() {
                candidates.push(&record.names.ko);
            }
            candidates.extend(record.aliases.iter().map(String::as_str));
            for candidate in candidates {
                let key = normalize_alias(candidate);
                if key.is_empty() {
                    continue;
                }
                name_index.entry(key).or_insert(NameIndexEntry {
                    pointer: record.pointer.clone(),
                    display: candidate.to_string(),
                });
            }
        }

        Ok(Self {
            records,
            by_pointer,
            name_index,
        })
    }

    /// Alias lookup, case- and whitespace-insensitive.
    pub fn find_by_name(&self, query: &str) -> Option<(&SpeciesRecord, &str)> {
        let entry = self.name_index.get(&normalize_alias(query))?;
        let record = self.get(&entry.pointer)?;
        Some((record, &entry.display))
    }

    pub fn get(&self, pointer: &str) -> Option<&SpeciesRecord> {
        self.by_pointer.get(pointer).map(|&i| &self.records[i])
    }

    /// All records, ordered by (dex id, form).
    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    /// All forms sharing one dex id.
    pub fn records_for_dex(&self, id: u32) -> Vec<&SpeciesRecord> {
        self.records.iter().filter(|r| r.id == id).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
