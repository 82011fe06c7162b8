//! Begrenztes Command-Log für Diagnose und Tests.

use super::AppCommand;
use std::collections::VecDeque;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, der älteste Eintrag fällt heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Iteriert über alle Einträge (ältester zuerst).
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_entry_when_full() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::ZoomIn);
        for _ in 1..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::ToggleGrid);
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);
        assert!(matches!(log.iter().next(), Some(AppCommand::ZoomIn)));

        log.record(&AppCommand::ZoomOut);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);
        assert!(matches!(log.iter().next(), Some(AppCommand::ToggleGrid)));
        assert!(matches!(log.last(), Some(AppCommand::ZoomOut)));
    }
}
