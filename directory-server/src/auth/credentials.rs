use std::sync::Arc;

/// One username/password pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Built-in credential set
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("admin", "password"),
        Credential::new("user", "123456"),
        Credential::new("test", "test123"),
    ]
}

/// Parse `user:pass,user:pass`
///
/// The password is everything after the first `:` so it may itself
/// contain colons.
pub fn parse_credentials(raw: &str) -> Result<Vec<Credential>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((user, pass)) if !user.is_empty() && !pass.is_empty() => {
                Ok(Credential::new(user, pass))
            }
            _ => Err(format!("expected user:password, got '{entry}'")),
        })
        .collect()
}

/// Read-only credential set, shared by all handlers
#[derive(Debug, Clone)]
pub struct CredentialStore {
    credentials: Arc<Vec<Credential>>,
}

impl CredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_credentials())
    }

    /// Exact match on both fields
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.username == username && c.password == password)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
