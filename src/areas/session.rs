use crate::areas::file_store::FileStore;
use crate::areas::store::{DatasetStore, StoreConfig};
use crate::artifacts::diff::report::ContentWindow;
use crate::artifacts::merge::diff_concat::DiffConcat;
use std::cell::{RefCell, RefMut};

/// Context every command runs in: the dataset store, the content window and
/// the output writer
pub struct Session {
    store: Box<dyn DatasetStore>,
    window: ContentWindow,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(
        store: Box<dyn DatasetStore>,
        window: ContentWindow,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Session {
            store,
            window,
            writer: RefCell::new(writer),
        }
    }

    /// Open a session over the file store described by `config`.
    pub fn open(config: &StoreConfig, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let store = FileStore::open(config.root())?;

        Ok(Self::new(Box::new(store), config.window(), writer))
    }

    pub fn store(&self) -> &dyn DatasetStore {
        self.store.as_ref()
    }

    pub fn window(&self) -> ContentWindow {
        self.window
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn diff_concat(&self) -> DiffConcat<'_> {
        DiffConcat::new(self.store()).with_window(self.window)
    }
}
