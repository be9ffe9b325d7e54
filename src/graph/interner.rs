use std::collections::HashMap;

/// Maps external vertex identifiers (coordinate strings, names, ...) to dense
/// ids in `[0, len)`, assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct VertexInterner {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl VertexInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next free id on first sight
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Looks up an already-interned name
    pub fn get(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Reverse lookup
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of distinct vertices; a valid vertex count for graph construction
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_dense_ids_in_first_seen_order() {
        let mut interner = VertexInterner::new();
        let a = interner.intern("-73.98 40.75");
        let b = interner.intern("-73.99 40.76");
        let a_again = interner.intern("-73.98 40.75");

        assert_eq!((a, b, a_again), (0, 1, 0));
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.get("-73.99 40.76"), Some(1));
        assert_eq!(interner.get("missing"), None);
        assert_eq!(interner.name_of(0), Some("-73.98 40.75"));
        assert_eq!(interner.name_of(2), None);
    }
}
