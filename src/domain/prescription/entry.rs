//! Prescription entries and the editable list that holds them.

use serde::{Deserialize, Serialize};

/// One structured prescription line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PrescriptionEntry {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

impl PrescriptionEntry {
    pub fn new(
        medication_name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            medication_name: medication_name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            duration: duration.into(),
        }
    }

    /// An entry with every field empty, as shown in a fresh form row.
    pub fn blank() -> Self {
        Self::default()
    }

    fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Medication => &mut self.medication_name,
            EntryField::Dosage => &mut self.dosage,
            EntryField::Frequency => &mut self.frequency,
            EntryField::Duration => &mut self.duration,
        }
    }
}

/// Names one editable field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Medication,
    Dosage,
    Frequency,
    Duration,
}

/// Ordered prescription entries, edited by index.
///
/// # Invariants
///
/// - Always holds at least one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrescriptionList {
    entries: Vec<PrescriptionEntry>,
}

impl PrescriptionList {
    /// A list with a single blank entry.
    pub fn new() -> Self {
        Self {
            entries: vec![PrescriptionEntry::blank()],
        }
    }

    /// Wraps parsed or loaded entries; an empty vector becomes one blank entry.
    pub fn from_entries(entries: Vec<PrescriptionEntry>) -> Self {
        if entries.is_empty() {
            Self::new()
        } else {
            Self { entries }
        }
    }

    pub fn entries(&self) -> &[PrescriptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false while the list invariant holds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a blank entry.
    pub fn add(&mut self) {
        self.entries.push(PrescriptionEntry::blank());
    }

    /// Removes the entry at `index`.
    ///
    /// No-op (returns `false`) when it is the last entry or `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Sets one field of the entry at `index`.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn update(&mut self, index: usize, field: EntryField, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    /// Back to a single blank entry.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PrescriptionList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paracetamol() -> PrescriptionEntry {
        PrescriptionEntry::new("Paracetamol", "500mg", "twice daily", "7 days")
    }

    mod entry {
        use super::*;

        #[test]
        fn serializes_snake_case_fields() {
            let json = serde_json::to_value(paracetamol()).unwrap();
            assert_eq!(json["medication_name"], "Paracetamol");
            assert_eq!(json["duration"], "7 days");
        }
    }

    mod list {
        use super::*;

        #[test]
        fn new_list_has_one_blank_entry() {
            let list = PrescriptionList::new();
            assert_eq!(list.len(), 1);
            assert_eq!(list.entries()[0], PrescriptionEntry::blank());
        }

        #[test]
        fn from_empty_entries_keeps_one_row() {
            assert_eq!(PrescriptionList::from_entries(vec![]).len(), 1);
        }

        #[test]
        fn removing_last_entry_is_noop() {
            let mut list = PrescriptionList::new();
            assert!(!list.remove(0));
            assert_eq!(list.len(), 1);
        }

        #[test]
        fn remove_out_of_range_is_noop() {
            let mut list = PrescriptionList::from_entries(vec![paracetamol(), paracetamol()]);
            assert!(!list.remove(5));
            assert_eq!(list.len(), 2);
        }

        #[test]
        fn remove_shifts_following_entries() {
            let mut list = PrescriptionList::new();
            list.add();
            list.update(1, EntryField::Medication, "Ibuprofen");
            assert!(list.remove(0));
            assert_eq!(list.len(), 1);
            assert_eq!(list.entries()[0].medication_name, "Ibuprofen");
        }

        #[test]
        fn update_sets_the_named_field() {
            let mut list = PrescriptionList::new();
            assert!(list.update(0, EntryField::Dosage, "250mg"));
            assert!(list.update(0, EntryField::Frequency, "once daily"));
            assert!(list.update(0, EntryField::Duration, "5 days"));
            let entry = &list.entries()[0];
            assert_eq!(entry.dosage, "250mg");
            assert_eq!(entry.frequency, "once daily");
            assert_eq!(entry.duration, "5 days");
        }

        #[test]
        fn update_out_of_range_returns_false() {
            let mut list = PrescriptionList::new();
            assert!(!list.update(1, EntryField::Medication, "Aspirin"));
        }

        #[test]
        fn reset_restores_single_blank_row() {
            let mut list = PrescriptionList::from_entries(vec![paracetamol(), paracetamol()]);
            list.reset();
            assert_eq!(list, PrescriptionList::new());
        }
    }
}
