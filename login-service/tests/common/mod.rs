use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;
use login_service::credentials::errors::ComparatorError;
use login_service::credentials::ports::SecretComparator;
use login_service::credentials::service::CredentialVerifier;
use login_service::inbound::http::router::create_router;
use login_service::outbound::password::PasswordHashComparator;
use login_service::user::errors::DirectoryError;
use login_service::user::models::EmailAddress;
use login_service::user::models::User;
use login_service::user::models::UserId;
use login_service::user::ports::UserDirectory;

/// In-memory user directory that counts lookups and can simulate an outage.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<HashMap<String, User>>,
    lookups: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryUserDirectory {
    /// Register a user, hashing the password with Argon2id
    pub fn register(&self, name: &str, email: &str, password: &str) -> User {
        let hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");
        self.register_with_hash(name, email, &hash)
    }

    /// Register a user with a stored hash taken as-is
    pub fn register_with_hash(&self, name: &str, email: &str, password_hash: &str) -> User {
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: EmailAddress::new(email.to_string()).expect("Invalid test email"),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        self.users
            .lock()
            .unwrap()
            .insert(email.to_string(), user.clone());
        user
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DirectoryError::Connection("connection refused".to_string()));
        }
        Ok(self.users.lock().unwrap().get(email.as_str()).cloned())
    }
}

/// Real comparator that counts how often it is consulted.
#[derive(Default)]
pub struct CountingComparator {
    inner: PasswordHashComparator,
    comparisons: AtomicUsize,
}

impl CountingComparator {
    pub fn comparisons(&self) -> usize {
        self.comparisons.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretComparator for CountingComparator {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, ComparatorError> {
        self.comparisons.fetch_add(1, Ordering::SeqCst);
        self.inner.compare(plaintext, hash).await
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub directory: Arc<InMemoryUserDirectory>,
    pub comparator: Arc<CountingComparator>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(InMemoryUserDirectory::default());
        let comparator = Arc::new(CountingComparator::default());
        let verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&directory),
            Arc::clone(&comparator),
        ));

        let router = create_router(verifier);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            directory,
            comparator,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Submit credentials to the login endpoint
    pub async fn login(&self, body: serde_json::Value) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
