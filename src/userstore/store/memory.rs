use super::BackingStore;
use crate::error::Result;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    content: Vec<u8>,
    reads: usize,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of `read_all` calls so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of `overwrite` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BackingStore for InMemoryStore {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        self.reads += 1;
        Ok(self.content.clone())
    }

    fn overwrite(&mut self, content: &[u8]) -> Result<()> {
        self.writes += 1;
        self.content = content.to_vec();
        Ok(())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::User;

    pub struct StoreFixture {
        users: Vec<User>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { users: Vec::new() }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            let start = self.users.len();
            for n in start + 1..=start + count {
                let email = format!("user{}@example.com", n);
                self.users.push(User::new(n.to_string(), email, 20 + n as i64));
            }
            self
        }

        pub fn with_user(mut self, id: &str, email: &str, age: i64) -> Self {
            self.users.push(User::new(id, email, age));
            self
        }

        pub fn users(&self) -> &[User] {
            &self.users
        }

        pub fn build(self) -> InMemoryStore {
            let content = serde_json::to_vec(&self.users).unwrap();
            InMemoryStore::with_content(content)
        }
    }
}
