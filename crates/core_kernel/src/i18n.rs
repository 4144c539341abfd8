//! Flat key/value translation
//!
//! Translation is a plain key lookup: no plural rules, no interpolation.
//! Components that need display text receive a [`Translator`] explicitly.

use std::collections::HashMap;

use crate::error::CoreError;

/// Resolves a translation key to display text
pub trait Translator: Send + Sync {
    /// Returns the text for `key`, or the key itself when it is unknown
    fn translate(&self, key: &str) -> String;
}

/// Translation keys of the twelve month labels, January first
pub const MONTH_KEYS: [&str; 12] = [
    "month.1", "month.2", "month.3", "month.4", "month.5", "month.6",
    "month.7", "month.8", "month.9", "month.10", "month.11", "month.12",
];

const ENGLISH: &[(&str, &str)] = &[
    ("month.1", "January"),
    ("month.2", "February"),
    ("month.3", "March"),
    ("month.4", "April"),
    ("month.5", "May"),
    ("month.6", "June"),
    ("month.7", "July"),
    ("month.8", "August"),
    ("month.9", "September"),
    ("month.10", "October"),
    ("month.11", "November"),
    ("month.12", "December"),
    ("receipt.error.invalid_lease_date", "The lease date is not a valid dd/mm/yyyy date"),
    ("receipt.error.price_not_found", "No price is defined for this period"),
    ("receipt.error.negative_amount", "The amount cannot be negative"),
    ("receipt.error.unknown_field", "This field cannot be edited"),
    ("receipt.error.amount_out_of_range", "The amounts of this month are too large"),
    ("receipt.error.month_out_of_range", "This month does not exist"),
    ("receipt.error.line_out_of_range", "This payment line does not exist"),
];

const FRENCH: &[(&str, &str)] = &[
    ("month.1", "Janvier"),
    ("month.2", "Février"),
    ("month.3", "Mars"),
    ("month.4", "Avril"),
    ("month.5", "Mai"),
    ("month.6", "Juin"),
    ("month.7", "Juillet"),
    ("month.8", "Août"),
    ("month.9", "Septembre"),
    ("month.10", "Octobre"),
    ("month.11", "Novembre"),
    ("month.12", "Décembre"),
    ("receipt.error.invalid_lease_date", "La date du bail n'est pas au format jj/mm/aaaa"),
    ("receipt.error.price_not_found", "Aucun prix n'est défini pour cette période"),
    ("receipt.error.negative_amount", "Le montant ne peut pas être négatif"),
    ("receipt.error.unknown_field", "Ce champ ne peut pas être modifié"),
    ("receipt.error.amount_out_of_range", "Les montants de ce mois sont trop élevés"),
    ("receipt.error.month_out_of_range", "Ce mois n'existe pas"),
    ("receipt.error.line_out_of_range", "Cette ligne de paiement n'existe pas"),
];

/// A translator backed by a single flat map
#[derive(Debug, Clone, Default)]
pub struct FlatTranslator {
    entries: HashMap<String, String>,
}

impl FlatTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Returns the catalog bundled for `locale` (`en` or `fr`)
    pub fn builtin(locale: &str) -> Option<Self> {
        let table = match locale {
            "en" => ENGLISH,
            "fr" => FRENCH,
            _ => return None,
        };
        Some(Self::from_pairs(table))
    }

    /// Loads a catalog from a flat JSON object of string values
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CoreError::Configuration(format!("translation catalog: {}", e)))?;
        Ok(Self { entries })
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Adds or replaces an entry
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Translator for FlatTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Resolves the twelve month labels, January first
pub fn month_labels(translator: &dyn Translator) -> [String; 12] {
    MONTH_KEYS.map(|key| translator.translate(key))
}
