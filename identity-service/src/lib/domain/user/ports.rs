use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing names, email, and password
    ///
    /// # Returns
    /// Persisted user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Unknown` - Password hashing or storage failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Authenticate a user and issue a session token.
    ///
    /// # Arguments
    /// * `email` - Login email address
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// The authenticated user and a signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (never
    ///   distinguished)
    /// * `Unknown` - Token generation failed
    async fn login(&self, email: &str, password: &str) -> Result<(User, String), UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User entity to store
    ///
    /// # Returns
    /// Stored user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    async fn save(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
