//! Turns one upstream identifier into one normalized [`SpeciesRecord`].

use crate::api::{AbilitySlot, SpeciesSource};
use crate::errors::FetchResult;
use crate::localize::{localize_name, slugify, to_title, type_label, JAPANESE, KOREAN};
use schema::{BaseStats, SpeciesRecord};
use std::time::Duration;
use tracing::debug;

pub struct RecordBuilder<'a, S: SpeciesSource + ?Sized> {
    source: &'a S,
    ability_pacing: Duration,
}

impl<'a, S: SpeciesSource + ?Sized> RecordBuilder<'a, S> {
    pub fn new(source: &'a S, ability_pacing: Duration) -> Self {
        Self {
            source,
            ability_pacing,
        }
    }

    /// Fetches and normalizes the species behind `id`.
    ///
    /// Fails only when one of the two required lookups fails; ability lookups
    /// degrade to the formatted canonical name instead. No retries here.
    pub async fn build(&self, id: u32) -> FetchResult<SpeciesRecord> {
        let pokemon = self.source.fetch_pokemon(id).await?;
        let species = self.source.fetch_species(id).await?;

        let en_name = to_title(&pokemon.name);
        let ko_name = localize_name(&species.names, KOREAN, &pokemon.name);
        let jp_name = localize_name(&species.names, JAPANESE, &pokemon.name);

        let mut type_slots = pokemon.types;
        type_slots.sort_by_key(|t| t.slot);
        let types = type_slots
            .iter()
            .map(|t| type_label(&t.type_.name))
            .collect();

        let base_stats = BaseStats::from_named(
            pokemon
                .stats
                .iter()
                .map(|s| (s.stat.name.as_str(), s.base_stat)),
        );

        let abilities = self.localize_abilities(&pokemon.abilities).await;

        Ok(SpeciesRecord {
            id: slugify(&en_name),
            dex_no: species.id,
            ko_name,
            en_name,
            jp_name,
            types,
            base_stats,
            abilities,
        })
    }

    async fn localize_abilities(&self, slots: &[AbilitySlot]) -> Vec<String> {
        let mut names = Vec::with_capacity(slots.len());
        for slot in slots {
            let Some(ability) = slot.ability.as_ref() else {
                continue;
            };
            if ability.name.is_empty() || ability.url.is_empty() {
                continue;
            }

            let name = match self.source.fetch_ability(&ability.url).await {
                Ok(raw) => localize_name(&raw.names, KOREAN, &ability.name),
                Err(err) => {
                    debug!(ability = %ability.name, error = %err, "ability lookup failed, using canonical name");
                    to_title(&ability.name)
                }
            };
            names.push(name);
            tokio::time::sleep(self.ability_pacing).await;
        }
        names
    }
}
