use crate::api::{
    AbilitySlot, LocalizedName, NamedResource, RawAbility, RawPokemon, RawSpecies, SpeciesSource,
    StatEntry, TypeSlot,
};
use crate::errors::{FetchError, FetchResult};
use async_trait::async_trait;
use schema::{BaseStats, SpeciesRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A builder for the upstream payloads of one species.
///
/// # Example
/// ```ignore
/// let fixture = SpeciesFixture::new(25, "pikachu")
///     .types(&[(1, "electric")])
///     .name("ko", "피카츄")
///     .ability("static", Some("정전기"));
/// ```
pub struct SpeciesFixture {
    id: u32,
    dex_no: u16,
    name: String,
    types: Vec<(u8, String)>,
    stats: Vec<(String, u16)>,
    names: Vec<(String, String)>,
    abilities: Vec<(String, Option<String>)>,
}

impl SpeciesFixture {
    /// Defaults: dex number equal to `id`, a single normal type, stats of 50.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            dex_no: u16::try_from(id).unwrap_or(u16::MAX),
            name: name.to_string(),
            types: vec![(1, "normal".to_string())],
            stats: ["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
                .iter()
                .map(|s| (s.to_string(), 50))
                .collect(),
            names: Vec::new(),
            abilities: Vec::new(),
        }
    }

    pub fn dex_no(mut self, dex_no: u16) -> Self {
        self.dex_no = dex_no;
        self
    }

    pub fn types(mut self, types: &[(u8, &str)]) -> Self {
        self.types = types.iter().map(|(slot, t)| (*slot, t.to_string())).collect();
        self
    }

    pub fn stats(mut self, stats: &[(&str, u16)]) -> Self {
        self.stats = stats.iter().map(|(n, v)| (n.to_string(), *v)).collect();
        self
    }

    /// Adds a localized species name.
    pub fn name(mut self, language: &str, name: &str) -> Self {
        self.names.push((language.to_string(), name.to_string()));
        self
    }

    /// Adds an ability reference, optionally with a Korean localization.
    pub fn ability(mut self, name: &str, korean: Option<&str>) -> Self {
        self.abilities
            .push((name.to_string(), korean.map(str::to_string)));
        self
    }
}

pub fn ability_url(name: &str) -> String {
    format!("https://fake.test/ability/{name}/")
}

fn localized(language: &str, name: &str) -> LocalizedName {
    LocalizedName {
        name: name.to_string(),
        language: NamedResource {
            name: language.to_string(),
            url: String::new(),
        },
    }
}

/// In-memory [`SpeciesSource`] with scriptable failures and a call log.
#[derive(Default)]
pub struct FakeSource {
    pokemon: HashMap<u32, RawPokemon>,
    species: HashMap<u32, RawSpecies>,
    abilities: HashMap<String, RawAbility>,
    /// Remaining forced failures of the pokemon lookup per id.
    failures: Mutex<HashMap<u32, u32>>,
    failing_abilities: Mutex<HashSet<String>>,
    pokemon_calls: Mutex<Vec<u32>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, fixture: SpeciesFixture) -> Self {
        let abilities = fixture
            .abilities
            .iter()
            .enumerate()
            .map(|(i, (name, _))| AbilitySlot {
                ability: Some(NamedResource {
                    name: name.clone(),
                    url: ability_url(name),
                }),
                slot: u8::try_from(i + 1).unwrap_or(u8::MAX),
                is_hidden: false,
            })
            .collect();

        for (name, korean) in &fixture.abilities {
            let names = korean
                .iter()
                .map(|ko| localized("ko", ko))
                .chain(std::iter::once(localized("en", name)))
                .collect();
            self.abilities.insert(ability_url(name), RawAbility { names });
        }

        self.pokemon.insert(
            fixture.id,
            RawPokemon {
                name: fixture.name.clone(),
                types: fixture
                    .types
                    .iter()
                    .map(|(slot, name)| TypeSlot {
                        slot: *slot,
                        type_: NamedResource {
                            name: name.clone(),
                            url: String::new(),
                        },
                    })
                    .collect(),
                stats: fixture
                    .stats
                    .iter()
                    .map(|(name, value)| StatEntry {
                        base_stat: *value,
                        stat: NamedResource {
                            name: name.clone(),
                            url: String::new(),
                        },
                    })
                    .collect(),
                abilities,
            },
        );
        self.species.insert(
            fixture.id,
            RawSpecies {
                id: fixture.dex_no,
                names: fixture
                    .names
                    .iter()
                    .map(|(language, name)| localized(language, name))
                    .collect(),
            },
        );
        self
    }

    /// The next `times` pokemon lookups for `id` answer 503.
    pub fn fail_times(&self, id: u32, times: u32) {
        self.failures.lock().unwrap().insert(id, times);
    }

    pub fn fail_ability(&self, name: &str) {
        self.failing_abilities.lock().unwrap().insert(ability_url(name));
    }

    /// Identifiers passed to `fetch_pokemon`, in call order.
    pub fn pokemon_calls(&self) -> Vec<u32> {
        self.pokemon_calls.lock().unwrap().clone()
    }
}

fn not_found(url: String) -> FetchError {
    FetchError::Status { url, status: 404 }
}

#[async_trait]
impl SpeciesSource for FakeSource {
    async fn fetch_pokemon(&self, id: u32) -> FetchResult<RawPokemon> {
        self.pokemon_calls.lock().unwrap().push(id);
        let url = format!("https://fake.test/pokemon/{id}");

        if let Some(remaining) = self.failures.lock().unwrap().get_mut(&id) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(FetchError::Status { url, status: 503 });
            }
        }

        self.pokemon.get(&id).cloned().ok_or_else(|| not_found(url))
    }

    async fn fetch_species(&self, id: u32) -> FetchResult<RawSpecies> {
        self.species
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(format!("https://fake.test/pokemon-species/{id}")))
    }

    async fn fetch_ability(&self, url: &str) -> FetchResult<RawAbility> {
        if self.failing_abilities.lock().unwrap().contains(url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 500,
            });
        }
        self.abilities
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url.to_string()))
    }
}

/// A ready-made normalized record for reconcile and writer tests.
pub fn record(dex_no: u16, id: &str) -> SpeciesRecord {
    SpeciesRecord {
        id: id.to_string(),
        dex_no,
        ko_name: format!("{id}-ko"),
        en_name: id.to_string(),
        jp_name: format!("{id}-ja"),
        types: vec!["노말".to_string()],
        base_stats: BaseStats {
            hp: 10,
            attack: 20,
            defense: 30,
            sp_attack: 40,
            sp_defense: 50,
            speed: 60,
        },
        abilities: vec![format!("{id}-ability")],
    }
}
