//! Néel and Curie record builders.
//!
//! Both record kinds share one normaliser; they differ only in which
//! measurement list of a [`Compound`] they read and in the `Type` tag
//! written to each entry.

use magdb_common::{Measurement, RecordType};
use magdb_db::Entry;

use crate::models::Compound;
use crate::normalise::normalise_measurement;

/// Transition temperatures of one kind reported for a compound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionRecord<'a> {
    Neel(&'a [Measurement]),
    Curie(&'a [Measurement]),
}

impl<'a> TransitionRecord<'a> {
    pub fn from_compound(record_type: RecordType, compound: &'a Compound) -> Self {
        match record_type {
            RecordType::Neel  => TransitionRecord::Neel(&compound.neel_temperatures),
            RecordType::Curie => TransitionRecord::Curie(&compound.curie_temperatures),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            TransitionRecord::Neel(_)  => RecordType::Neel,
            TransitionRecord::Curie(_) => RecordType::Curie,
        }
    }

    pub fn measurements(&self) -> &'a [Measurement] {
        match *self {
            TransitionRecord::Neel(m) | TransitionRecord::Curie(m) => m,
        }
    }

    /// One entry per measurement, normalised to Kelvin.
    /// A failed normalisation leaves the normalised fields empty.
    pub fn entries(&self, names: &[String]) -> Vec<Entry> {
        let record_type = self.record_type();
        self.measurements()
            .iter()
            .map(|m| {
                let n = normalise_measurement(m);
                if n.is_failed() {
                    tracing::debug!(
                        record_type = record_type.as_str(),
                        value = %m.value,
                        units = ?m.units,
                        "Keeping entry without normalised value"
                    );
                }
                Entry::new(record_type, names.to_vec(), m).with_normalised(n.value, n.units)
            })
            .collect()
    }
}
