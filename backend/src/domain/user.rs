//! User aggregate data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyEmail,
    InvalidEmail,
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like local@domain"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use userbase::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("u1").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Contact email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Deliberately loose: one `@` with something on either side.
        let pattern = r"^[^@\s]+@[^@\s]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// First or last name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`]. Any non-blank string is
    /// accepted; there is no length limit.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated fields required to register a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
}

/// Partial update applied by [`User::apply`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
}

impl UserChanges {
    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is a UUID assigned at registration and never changes.
/// - `subscribed_to_user_ids` keeps insertion order and may hold duplicates
///   or ids of users that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: Email,
    first_name: PersonName,
    last_name: PersonName,
    #[serde(default)]
    subscribed_to_user_ids: Vec<UserId>,
}

impl User {
    /// Build a freshly registered user with no subscriptions.
    #[must_use]
    pub fn register(id: UserId, new_user: NewUser) -> Self {
        let NewUser {
            email,
            first_name,
            last_name,
        } = new_user;
        Self {
            id,
            email,
            first_name,
            last_name,
            subscribed_to_user_ids: Vec::new(),
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Users this user is subscribed to, in subscription order.
    #[must_use]
    pub fn subscribed_to_user_ids(&self) -> &[UserId] {
        &self.subscribed_to_user_ids
    }

    /// Overwrite the fields present in `changes`.
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(email) = &changes.email {
            self.email = email.clone();
        }
        if let Some(first_name) = &changes.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &changes.last_name {
            self.last_name = last_name.clone();
        }
    }

    /// Append `target` to the subscription list.
    ///
    /// No duplicate or existence check is made.
    pub fn subscribe_to(&mut self, target: UserId) {
        self.subscribed_to_user_ids.push(target);
    }

    /// Remove the first occurrence of `target`; returns whether one was found.
    pub fn unsubscribe_from(&mut self, target: &UserId) -> bool {
        match self
            .subscribed_to_user_ids
            .iter()
            .position(|id| id == target)
        {
            Some(index) => {
                self.subscribed_to_user_ids.remove(index);
                true
            }
            None => false,
        }
    }
}
