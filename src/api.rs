// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize, Serializer};
use tabled::Tabled;
use uuid::Uuid;

use crate::route::CampSlug;

/// Opaque bearer credential issued by the authentication endpoint. Persisted
/// verbatim; redacted from debug output.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub(crate) struct Token(SecretString);

impl Token {
    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(SecretString::new(value))
    }
}

impl From<&Token> for String {
    fn from(value: &Token) -> Self {
        value.0.expose_secret().clone()
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        (&value).into()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Token {}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Role {
    Admin,
    CampHead,
    Doctor,
}

impl Role {
    /// Tenant-scoped roles carry a camp binding in their session; admins do
    /// not.
    pub(crate) const fn is_tenant_scoped(self) -> bool {
        !matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Admin => "Admin",
            Self::CampHead => "Camp Head",
            Self::Doctor => "Doctor",
        })
    }
}

/// The authenticated actor as the server describes it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Identity {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) camp_id: Option<Uuid>,
}

#[derive(Clone, Debug, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Camp {
    #[tabled(rename = "ID")]
    pub(crate) id: Uuid,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Slug")]
    pub(crate) slug: CampSlug,
    #[tabled(rename = "Location")]
    pub(crate) location: String,
    #[tabled(rename = "Starts")]
    pub(crate) start_date: NaiveDate,
    #[tabled(rename = "Ends")]
    pub(crate) end_date: NaiveDate,
    #[serde(default)]
    #[tabled(skip)]
    pub(crate) description: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Visitor {
    #[tabled(rename = "ID")]
    pub(crate) id: Uuid,
    #[tabled(rename = "Queue #")]
    pub(crate) token_number: u32,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Age")]
    pub(crate) age: u8,
    #[serde(default)]
    #[tabled(rename = "Gender", display_with = "format_opt")]
    pub(crate) gender: Option<String>,
    #[serde(default)]
    #[tabled(rename = "Phone", display_with = "format_opt")]
    pub(crate) phone: Option<String>,
    #[serde(default)]
    #[tabled(rename = "Symptoms", display_with = "format_opt")]
    pub(crate) symptoms: Option<String>,
    #[tabled(rename = "Registered", display_with = "format_time")]
    pub(crate) registered_at: DateTime<Utc>,
    #[serde(default)]
    #[tabled(rename = "Seen", display_with = "format_seen")]
    pub(crate) consulted: bool,
}

#[derive(Clone, Debug, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Doctor {
    #[tabled(rename = "ID")]
    pub(crate) id: Uuid,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Email")]
    pub(crate) email: String,
    #[serde(default)]
    #[tabled(rename = "Specialty", display_with = "format_opt")]
    pub(crate) specialty: Option<String>,
    #[serde(default)]
    #[tabled(rename = "Consultations")]
    pub(crate) consultations: u64,
}

#[derive(Clone, Debug, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Consultation {
    #[tabled(rename = "ID")]
    pub(crate) id: Uuid,
    #[tabled(rename = "Visitor")]
    pub(crate) visitor_name: String,
    #[tabled(skip)]
    pub(crate) visitor_id: Uuid,
    #[tabled(rename = "Diagnosis")]
    pub(crate) diagnosis: String,
    #[serde(default)]
    #[tabled(rename = "Prescription", display_with = "format_opt")]
    pub(crate) prescription: Option<String>,
    #[serde(default)]
    #[tabled(skip)]
    pub(crate) notes: Option<String>,
    #[tabled(rename = "Recorded", display_with = "format_time")]
    pub(crate) recorded_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CampStats {
    pub(crate) visitors: u64,
    pub(crate) consulted: u64,
    pub(crate) waiting: u64,
    pub(crate) doctors: u64,
}

/// Error body the server attaches to non-success responses.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: String,
}

fn format_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn format_time(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

fn format_seen(value: &bool) -> String {
    if *value { "yes" } else { "no" }.to_owned()
}

fn expose_str<S: Serializer>(value: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.expose_secret())
}

/// One REST request: its method, its path, and the response shape it decodes
/// to. Bodies are the `Serialize` form of the request struct itself; path
/// parameters are marked `#[serde(skip)]`.
pub(crate) trait Endpoint: Serialize + Send + Sync {
    type Response: DeserializeOwned;

    const METHOD: Method;

    /// Marks the authentication endpoint itself, which is exempt from the
    /// global 401 interceptor.
    const LOGIN: bool = false;

    fn path(&self) -> String;
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    #[serde(serialize_with = "expose_str")]
    pub(crate) password: SecretString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) camp_slug: Option<CampSlug>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub(crate) token: Token,
    pub(crate) user: Identity,
}

impl Endpoint for LoginRequest {
    type Response = LoginResponse;

    const METHOD: Method = Method::POST;
    const LOGIN: bool = true;

    fn path(&self) -> String {
        "/api/auth/login".to_owned()
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct GetCamp {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
}

impl Endpoint for GetCamp {
    type Response = Camp;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        format!("/api/camps/{}", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewVisitor {
    pub(crate) name: String,
    pub(crate) age: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) symptoms: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct RegisterVisitor {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
    #[serde(flatten)]
    pub(crate) registration: NewVisitor,
}

impl Endpoint for RegisterVisitor {
    type Response = Visitor;

    const METHOD: Method = Method::POST;

    fn path(&self) -> String {
        format!("/api/camps/{}/registrations", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ListVisitors {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
}

impl Endpoint for ListVisitors {
    type Response = Vec<Visitor>;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        format!("/api/camps/{}/visitors", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ListDoctors {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
}

impl Endpoint for ListDoctors {
    type Response = Vec<Doctor>;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        format!("/api/camps/{}/doctors", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ListMyPatients {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
}

impl Endpoint for ListMyPatients {
    type Response = Vec<Consultation>;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        format!("/api/camps/{}/consultations/mine", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordConsultation {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
    pub(crate) visitor_id: Uuid,
    pub(crate) diagnosis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prescription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<String>,
}

impl Endpoint for RecordConsultation {
    type Response = Consultation;

    const METHOD: Method = Method::POST;

    fn path(&self) -> String {
        format!("/api/camps/{}/consultations", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct GetCampStats {
    #[serde(skip)]
    pub(crate) camp: CampSlug,
}

impl Endpoint for GetCampStats {
    type Response = CampStats;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        format!("/api/camps/{}/stats", self.camp)
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ListCamps;

impl Endpoint for ListCamps {
    type Response = Vec<Camp>;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        "/api/admin/camps".to_owned()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCamp {
    pub(crate) name: String,
    pub(crate) slug: CampSlug,
    pub(crate) location: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl Endpoint for CreateCamp {
    type Response = Camp;

    const METHOD: Method = Method::POST;

    fn path(&self) -> String {
        "/api/admin/camps".to_owned()
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CampDetail {
    #[serde(flatten)]
    pub(crate) camp: Camp,
    pub(crate) stats: CampStats,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct GetAdminCamp {
    #[serde(skip)]
    pub(crate) id: String,
}

impl Endpoint for GetAdminCamp {
    type Response = CampDetail;

    const METHOD: Method = Method::GET;

    fn path(&self) -> String {
        format!("/api/admin/camps/{}", self.id)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCamp {
    #[serde(skip)]
    pub(crate) id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl Endpoint for UpdateCamp {
    type Response = Camp;

    const METHOD: Method = Method::PATCH;

    fn path(&self) -> String {
        format!("/api/admin/camps/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_ser_tokens, Token as SerdeToken};
    use uuid::uuid;

    use super::*;

    #[test]
    fn login_request_includes_camp_slug_for_tenant_staff() {
        let req = LoginRequest {
            email: "asha@example.org".to_owned(),
            password: SecretString::new("hunter2".to_owned()),
            camp_slug: Some(CampSlug::new("sunrise-camp")),
        };

        assert_ser_tokens(
            &req,
            &[
                SerdeToken::Struct {
                    name: "LoginRequest",
                    len: 3,
                },
                SerdeToken::Str("email"),
                SerdeToken::Str("asha@example.org"),
                SerdeToken::Str("password"),
                SerdeToken::Str("hunter2"),
                SerdeToken::Str("campSlug"),
                SerdeToken::Some,
                SerdeToken::NewtypeStruct { name: "CampSlug" },
                SerdeToken::Str("sunrise-camp"),
                SerdeToken::StructEnd,
            ],
        );
    }

    #[test]
    fn login_request_omits_camp_slug_for_admin() {
        let req = LoginRequest {
            email: "root@example.org".to_owned(),
            password: SecretString::new("hunter2".to_owned()),
            camp_slug: None,
        };

        assert_ser_tokens(
            &req,
            &[
                SerdeToken::Struct {
                    name: "LoginRequest",
                    len: 2,
                },
                SerdeToken::Str("email"),
                SerdeToken::Str("root@example.org"),
                SerdeToken::Str("password"),
                SerdeToken::Str("hunter2"),
                SerdeToken::StructEnd,
            ],
        );
    }

    #[test]
    fn identity_decodes_wire_shape() -> crate::error::Result<()> {
        let user: Identity = serde_json::from_str(
            r#"{
                "id": "46640aca-1245-44d2-8ca9-d19750597d6c",
                "name": "Dr. Asha Rao",
                "email": "asha@example.org",
                "role": "DOCTOR",
                "campId": "0d0b28ba-9012-44ba-94e3-a2b7f2b62b16"
            }"#,
        )?;

        assert_eq!(user.id, uuid!("46640aca-1245-44d2-8ca9-d19750597d6c"));
        assert_eq!(user.role, Role::Doctor);
        assert!(user.camp_id.is_some());
        Ok(())
    }

    #[test]
    fn token_persists_as_plain_string() -> crate::error::Result<()> {
        let token = Token::from("tok123".to_owned());
        assert_eq!(serde_json::to_string(&token)?, r#""tok123""#);

        let back: Token = serde_json::from_str(r#""tok123""#)?;
        assert_eq!(back, token);
        Ok(())
    }

    #[test]
    fn register_visitor_body_excludes_path_params() -> crate::error::Result<()> {
        let req = RegisterVisitor {
            camp: CampSlug::new("sunrise-camp"),
            registration: NewVisitor {
                name: "Ravi Kumar".to_owned(),
                age: 54,
                gender: None,
                phone: Some("9900011122".to_owned()),
                symptoms: Some("persistent cough".to_owned()),
            },
        };

        let body = serde_json::to_value(&req)?;
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ravi Kumar",
                "age": 54,
                "phone": "9900011122",
                "symptoms": "persistent cough"
            })
        );
        assert_eq!(req.path(), "/api/camps/sunrise-camp/registrations");
        Ok(())
    }
}
