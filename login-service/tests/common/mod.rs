use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;
use chrono::Utc;
use login_service::domain::login::errors::DirectoryError;
use login_service::domain::login::models::Credential;
use login_service::domain::login::ports::UserDirectory;
use login_service::domain::login::service::AuthenticationService;
use login_service::domain::product::errors::ProductError;
use login_service::domain::product::models::Product;
use login_service::domain::product::models::ProductDraft;
use login_service::domain::product::ports::ProductRepository;
use login_service::domain::product::service::ProductService;
use login_service::inbound::http::router::create_router;
use uuid::Uuid;

/// Signing secret shared by the spawned server and the tests that craft
/// tokens by hand.
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port, wired to
/// in-memory adapters so the suite needs no external services.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub directory: Arc<InMemoryUserDirectory>,
}

impl TestApp {
    /// Spawn the application with a default active user
    /// (`testuser` / `password123`).
    pub async fn spawn() -> Self {
        let directory = Arc::new(InMemoryUserDirectory::new());
        directory.add_user("testuser", "password123");

        let token_service = Arc::new(TokenService::new(TEST_SECRET, Duration::hours(24)));
        let auth_service = Arc::new(AuthenticationService::new(
            Arc::clone(&directory),
            Arc::clone(&token_service),
        ));
        let product_service = Arc::new(ProductService::new(Arc::new(
            InMemoryProductRepository::new(),
        )));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(
            auth_service,
            product_service,
            token_service,
            directory.clone(),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            directory,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Log in and return the issued token, panicking on a denied login.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["success"], true, "login denied: {}", body["message"]);
        body["token"]
            .as_str()
            .expect("Token missing on successful login")
            .to_string()
    }

    /// Craft a token with arbitrary claims, signed with the server's secret.
    pub fn sign_token(&self, subject: &str, iat: i64, exp: i64) -> String {
        let claims = auth::Claims {
            sub: subject.to_string(),
            iat,
            exp,
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET),
        )
        .expect("Failed to sign token")
    }

    /// A structurally valid token whose expiry is an hour in the past.
    pub fn expired_token(&self, subject: &str) -> String {
        let now = Utc::now().timestamp();
        self.sign_token(subject, now - 7200, now - 3600)
    }
}

/// In-memory user directory for tests.
pub struct InMemoryUserDirectory {
    users: Mutex<HashMap<String, Credential>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    pub fn add_user(&self, username: &str, password: &str) {
        self.add_credential(username, password, true);
    }

    pub fn add_inactive_user(&self, username: &str, password: &str) {
        self.add_credential(username, password, false);
    }

    fn add_credential(&self, username: &str, password: &str, active: bool) {
        let credential = Credential {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: PasswordHasher::new()
                .hash(password)
                .expect("Failed to hash password"),
            active,
            roles: vec!["ROLE_USER".to_string()],
        };
        self.users
            .lock()
            .unwrap()
            .insert(username.to_string(), credential);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DirectoryError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }
}

/// In-memory product store for tests.
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            description: draft.description,
            category: draft.category,
            created_at: Utc::now(),
        };
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        Ok(self.products.lock().unwrap().get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let mut products: Vec<Product> = self.products.lock().unwrap().values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.lock().unwrap();
        if !products.contains_key(&product.id) {
            return Err(ProductError::NotFound(product.id));
        }
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<(), ProductError> {
        match self.products.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(ProductError::NotFound(id)),
        }
    }
}
