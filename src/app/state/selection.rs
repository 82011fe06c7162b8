use crate::core::SelectionEntry;
use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Sitzungszustand
///
/// Einfügereihenfolge bleibt erhalten, Duplikate sind ausgeschlossen.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierte Objekte (Arc für O(1)-Clone in RenderScene)
    pub entries: Arc<IndexSet<SelectionEntry>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf das Set zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub fn entries_mut(&mut self) -> &mut IndexSet<SelectionEntry> {
        Arc::make_mut(&mut self.entries)
    }

    pub fn contains(&self, entry: SelectionEntry) -> bool {
        self.entries.contains(&entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = SelectionEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Fügt einen Eintrag hinten an. Gibt `false` zurück, wenn er schon selektiert war.
    pub fn insert(&mut self, entry: SelectionEntry) -> bool {
        if self.contains(entry) {
            return false;
        }
        self.entries_mut().insert(entry)
    }

    /// Entfernt einen selektierten Eintrag, die Reihenfolge der übrigen bleibt.
    ///
    /// Das Entfernen eines nicht selektierten Eintrags ist ein Programmierfehler.
    pub fn remove(&mut self, entry: SelectionEntry) {
        let removed = self.entries_mut().shift_remove(&entry);
        if !removed {
            log::error!("Selektion: {:?} sollte entfernt werden, war aber nicht selektiert", entry);
        }
        debug_assert!(removed, "{entry:?} war nicht selektiert");
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries_mut().clear();
        }
    }

    /// Ersetzt die Selektion durch genau einen Eintrag.
    pub fn select_only(&mut self, entry: SelectionEntry) {
        let set = self.entries_mut();
        set.clear();
        set.insert(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut selection = SelectionState::new();
        assert!(selection.insert(SelectionEntry::JumpPoint(2)));
        assert!(selection.insert(SelectionEntry::Planet(0)));
        assert!(!selection.insert(SelectionEntry::JumpPoint(2)));

        let order: Vec<_> = selection.iter().collect();
        assert_eq!(
            order,
            vec![SelectionEntry::JumpPoint(2), SelectionEntry::Planet(0)]
        );
    }

    #[test]
    fn remove_preserves_order_of_remaining_entries() {
        let mut selection = SelectionState::new();
        selection.insert(SelectionEntry::Planet(0));
        selection.insert(SelectionEntry::Planet(1));
        selection.insert(SelectionEntry::Planet(2));

        selection.remove(SelectionEntry::Planet(1));

        let order: Vec<_> = selection.iter().collect();
        assert_eq!(
            order,
            vec![SelectionEntry::Planet(0), SelectionEntry::Planet(2)]
        );
    }

    #[test]
    fn clone_is_copy_on_write() {
        let mut selection = SelectionState::new();
        selection.insert(SelectionEntry::Planet(0));
        let snapshot = selection.clone();

        selection.insert(SelectionEntry::Planet(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(selection.len(), 2);
    }
}
