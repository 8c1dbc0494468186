// ABOUTME: User account, profile, and program/gender enums
// ABOUTME: Separates the credential record from the public session payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher BMR constant)
    #[default]
    Male,
    /// Female (lower BMR constant)
    Female,
}

/// User-selected goal mode driving calorie and water targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    /// Hold current weight with a balanced intake
    #[default]
    Maintain,
    /// Caloric deficit for losing weight
    WeightLoss,
    /// Caloric surplus for building mass
    WeightGain,
}

impl Program {
    /// Human-readable program name
    pub fn display_name(&self) -> &'static str {
        match self {
            Program::Maintain => "Maintain",
            Program::WeightLoss => "Weight loss",
            Program::WeightGain => "Muscle gain",
        }
    }

    /// One-line description shown in the program picker
    pub fn description(&self) -> &'static str {
        match self {
            Program::Maintain => "Hold your current weight with a balanced calorie intake",
            Program::WeightLoss => "Caloric deficit to lose weight at a healthy pace",
            Program::WeightGain => "Caloric surplus to build muscle mass",
        }
    }
}

/// Profile attributes edited from the settings screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Phone number
    #[serde(default)]
    pub phone: String,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender used for BMR calculation
    #[serde(default)]
    pub gender: Gender,
    /// Reference to the profile image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Chosen program
    #[serde(default)]
    pub program: Program,
}

/// Registered account with credentials
///
/// Passwords are stored as bcrypt hashes; the plaintext never leaves
/// [`crate::auth::AuthService`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable account identifier
    pub id: String,
    /// Login email, unique across accounts
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    #[serde(default)]
    pub phone: String,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender used for BMR calculation
    #[serde(default)]
    pub gender: Gender,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Session payload persisted for the logged-in user, without the hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// Stable account identifier
    pub id: String,
    /// Login email
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    #[serde(default)]
    pub phone: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            created_at: user.created_at,
        }
    }
}

/// Sign-up form input
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    /// Login email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    pub phone: Option<String>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender used for BMR calculation
    pub gender: Option<Gender>,
}

/// Generate a fresh account identifier
pub(crate) fn new_user_id() -> String {
    format!("user_{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_serializes_snake_case() {
        let json = serde_json::to_string(&Program::WeightLoss).unwrap();
        assert_eq!(json, "\"weight_loss\"");
    }

    #[test]
    fn test_public_user_drops_password_hash() {
        let user = User {
            id: new_user_id(),
            email: "ana@example.com".into(),
            password_hash: "$2b$12$abcdef".into(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            phone: String::new(),
            weight: Some(62.0),
            height: Some(168.0),
            age: Some(28),
            gender: Gender::Female,
            created_at: Utc::now(),
        };

        let public = PublicUser::from(&user);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("ana@example.com"));
    }

    #[test]
    fn test_user_info_tolerates_missing_fields() {
        let info: UserInfo = serde_json::from_str("{}").unwrap();
        assert!(info.weight.is_none());
        assert!(info.height.is_none());
        assert_eq!(info.program, Program::Maintain);
    }
}
