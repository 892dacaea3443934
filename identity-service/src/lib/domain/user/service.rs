use std::sync::Arc;

use async_trait::async_trait;
use auth::Identity;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Password hashing and verification run on blocking tasks because the
/// memory-hard key derivation would otherwise stall request-handling threads.
pub struct UserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    repository: Arc<R>,
    password_hasher: Arc<H>,
    token_service: Arc<T>,
}

impl<R, H, T> UserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Credential hashing implementation
    /// * `token_service` - Session token implementation
    pub fn new(repository: Arc<R>, password_hasher: Arc<H>, token_service: Arc<T>) -> Self {
        Self {
            repository,
            password_hasher,
            token_service,
        }
    }
}

#[async_trait]
impl<R, H, T> UserServicePort for UserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let hasher = Arc::clone(&self.password_hasher);
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))?
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let now = Utc::now();
        let user = User {
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        // Storage enforces uniqueness again; the lookup above only avoids
        // hashing on the common duplicate path.
        self.repository.save(user).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<(User, String), UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let hasher = Arc::clone(&self.password_hasher);
        let credential = user.password_hash.clone();
        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&credential, &password))
            .await
            .map_err(|e| UserError::Unknown(e.to_string()))?;

        // A wrong password and an undecodable stored credential must be
        // indistinguishable to the caller.
        if !verified.unwrap_or(false) {
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(Identity {
                email: user.email.as_str().to_string(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
            })
            .map_err(|e| UserError::Unknown(format!("Token generation failed: {}", e)))?;

        Ok((user, token))
    }
}

#[cfg(test)]
mod tests {
    use auth::ArgonParams;
    use auth::ArgonPasswordHasher;
    use auth::JwtTokenService;
    use auth::TokenConfig;
    use chrono::Duration;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn save(&self, user: User) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn password_hasher() -> Arc<ArgonPasswordHasher> {
        // Cheap cost parameters to keep the suite fast
        Arc::new(ArgonPasswordHasher::new(ArgonParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
            ..ArgonParams::default()
        }))
    }

    fn token_service() -> Arc<JwtTokenService> {
        Arc::new(JwtTokenService::new(TokenConfig {
            secret: b"test-secret-key-for-jwt-signing-at-least-32-bytes".to_vec(),
            lifetime: Duration::hours(24),
        }))
    }

    fn stored_user(password_hash: &str) -> User {
        let now = Utc::now();
        User {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_save()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2id$v=19$")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), password_hasher(), token_service());

        let command = RegisterUserCommand {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let user = service.register(command).await.unwrap();
        assert_eq!(user.first_name, "Test");
        // Password is hashed with real Argon2id; plaintext never stored
        assert!(user.password_hash.starts_with("$argon2id$"));
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        let existing = stored_user("$argon2id$irrelevant");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository.expect_save().times(0);

        let service = UserService::new(Arc::new(repository), password_hasher(), token_service());

        let command = RegisterUserCommand {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_success_issues_validating_token() {
        let hasher = password_hasher();
        let tokens = token_service();
        let credential = hasher.hash("password123").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(&credential);
        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), hasher, Arc::clone(&tokens));

        let (user, token) = service
            .login("test@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(user.email.as_str(), "test@example.com");
        assert_eq!(token.split('.').count(), 3);

        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.first_name, "Test");
        assert_eq!(claims.last_name, "User");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hasher = password_hasher();
        let credential = hasher.hash("password123").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(&credential);
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), hasher, token_service());

        let result = service.login("test@example.com", "wrong_password").await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), password_hasher(), token_service());

        let result = service.login("nobody@example.com", "password123").await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_login_corrupt_stored_credential() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("not-a-valid-hash");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), password_hasher(), token_service());

        // Must look exactly like a wrong password
        let result = service.login("test@example.com", "password123").await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidCredentials
        ));
    }
}
