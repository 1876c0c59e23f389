use tracing::{debug, info};

use crate::models::{BACKGROUND_KEY, Background, DARK_KEY, NOTE_KEY, decode_flag, encode_flag};
use crate::store::KeyValueStore;

/// The note field and its two display preferences, kept in sync with a store.
pub struct Notepad<S: KeyValueStore> {
    store: S,
    text: String,
    dark: bool,
    background: Option<Background>,
}

impl<S: KeyValueStore> Notepad<S> {
    pub fn open(store: S) -> Self {
        let text = store.load(NOTE_KEY).unwrap_or_default();
        let dark = decode_flag(store.load(DARK_KEY).as_deref());
        let background = store
            .load(BACKGROUND_KEY)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| {
                let parsed = Background::parse(&raw);
                if parsed.is_none() {
                    debug!(value = %raw, "ignoring unknown background");
                }
                parsed
            });

        Notepad {
            store,
            text,
            dark,
            background,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn background(&self) -> Option<Background> {
        self.background
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replaces the note and writes it through right away.
    pub fn edit(&mut self, content: &str) {
        self.text.clear();
        self.text.push_str(content);
        self.store.save(NOTE_KEY, &self.text);
        debug!(len = self.text.len(), "note saved");
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.store.clear(NOTE_KEY);
        info!("note cleared");
    }

    pub fn toggle_dark(&mut self) -> bool {
        self.dark = !self.dark;
        self.store.save(DARK_KEY, encode_flag(self.dark));
        info!(dark = self.dark, "theme toggled");
        self.dark
    }

    pub fn select_background(&mut self, choice: Option<Background>) {
        self.background = choice;
        self.store.save(BACKGROUND_KEY, Background::encode(choice));
        info!(background = Background::encode(choice), "background selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_empty_store_starts_blank() {
        let pad = Notepad::open(MemoryStore::new());
        assert_eq!(pad.text(), "");
        assert!(!pad.is_dark());
        assert_eq!(pad.background(), None);
        assert_eq!(pad.store().load(NOTE_KEY), None);
    }

    #[test]
    fn test_open_prefills_from_store() {
        let mut store = MemoryStore::new();
        store.save(NOTE_KEY, "lista de compras");
        store.save(DARK_KEY, "true");
        store.save(BACKGROUND_KEY, "amarelo");

        let pad = Notepad::open(store);
        assert_eq!(pad.text(), "lista de compras");
        assert!(pad.is_dark());
        assert_eq!(pad.background(), Some(Background::Yellow));
    }

    #[test]
    fn test_open_ignores_unknown_background() {
        let mut store = MemoryStore::new();
        store.save(BACKGROUND_KEY, "verde");
        store.save(DARK_KEY, "yes");

        let pad = Notepad::open(store);
        assert_eq!(pad.background(), None);
        assert!(!pad.is_dark());
    }

    #[test]
    fn test_every_edit_is_persisted() {
        let mut pad = Notepad::open(MemoryStore::new());
        for partial in ["h", "he", "hel", "hell", "hello"] {
            pad.edit(partial);
            assert_eq!(pad.store().load(NOTE_KEY).as_deref(), Some(partial));
        }
        assert_eq!(pad.text(), "hello");
    }

    #[test]
    fn test_clear_removes_key() {
        let mut pad = Notepad::open(MemoryStore::new());
        pad.edit("temporary");
        pad.clear();

        assert_eq!(pad.text(), "");
        assert_eq!(pad.store().load(NOTE_KEY), None);
    }

    #[test]
    fn test_toggle_dark_twice_restores_flag() {
        let mut pad = Notepad::open(MemoryStore::new());

        assert!(pad.toggle_dark());
        assert_eq!(pad.store().load(DARK_KEY).as_deref(), Some("true"));

        assert!(!pad.toggle_dark());
        assert_eq!(pad.store().load(DARK_KEY).as_deref(), Some("false"));
        assert!(!pad.is_dark());
    }

    #[test]
    fn test_background_choices_are_exclusive() {
        let mut pad = Notepad::open(MemoryStore::new());
        pad.select_background(Some(Background::Blue));
        pad.select_background(Some(Background::Yellow));

        assert_eq!(pad.background(), Some(Background::Yellow));
        assert_eq!(pad.store().load(BACKGROUND_KEY).as_deref(), Some("amarelo"));
    }

    #[test]
    fn test_empty_choice_clears_background() {
        let mut pad = Notepad::open(MemoryStore::new());
        pad.select_background(Some(Background::Pink));
        pad.select_background(None);

        assert_eq!(pad.background(), None);
        assert_eq!(pad.store().load(BACKGROUND_KEY).as_deref(), Some(""));
    }
}
