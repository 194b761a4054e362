//! Server configuration.

use std::net::SocketAddr;

/// Configuration for the ticklist server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Username half of the shared credential.
    pub username: String,
    /// Password half of the shared credential.
    pub password: String,
    /// Realm reported in the authentication challenge.
    pub realm: String,
}

impl ServerConfig {
    /// Creates a new server configuration with the default credential.
    ///
    /// The default credential is `todo:123456789`. Deployments that face
    /// anyone but their author should replace it with
    /// [`with_credential`](Self::with_credential).
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            username: "todo".to_string(),
            password: "123456789".to_string(),
            realm: "ticklist".to_string(),
        }
    }

    /// Sets the shared credential.
    pub fn with_credential(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Sets the realm reported in the authentication challenge.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 3000)))
    }
}
