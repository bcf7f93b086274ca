//! The address-bar stand-in: a narrow read/write interface over the
//! shareable query string, injected so tests and other front ends can
//! substitute their own store.

/// Read once at startup, written on every filter change thereafter.
pub trait ParamStore {
    /// Current query string, without a leading `?`.
    fn read(&self) -> String;
    /// Replace the stored query string (no history entry, no reload).
    fn write(&mut self, query: &str);
}

/// Process-local store seeded from the command line.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParamStore {
    query: String,
}

impl InMemoryParamStore {
    pub fn new(initial: &str) -> Self {
        Self {
            query: initial.strip_prefix('?').unwrap_or(initial).to_string(),
        }
    }
}

impl ParamStore for InMemoryParamStore {
    fn read(&self) -> String {
        self.query.clone()
    }

    fn write(&mut self, query: &str) {
        self.query = query.to_string();
    }
}
