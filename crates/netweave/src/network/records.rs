//! Record types and the built-in demo network

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// A person in the network
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sister_orgs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_founder: Option<bool>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn founder(mut self) -> Self {
        self.is_founder = Some(true);
        self
    }
}

/// A startup or other organization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Startup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// A person's role in a startup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub person_id: String,
    pub startup_id: String,
    #[serde(default)]
    pub role: String,
}

impl Relationship {
    pub fn new(
        person_id: impl Into<String>,
        startup_id: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            startup_id: startup_id.into(),
            role: role.into(),
        }
    }

    /// Both endpoints are named
    pub fn is_complete(&self) -> bool {
        !self.person_id.is_empty() && !self.startup_id.is_empty()
    }
}

/// Record counts shown in the network header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub people: usize,
    pub organizations: usize,
    pub connections: usize,
}

/// The full set of network records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkData {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub startups: Vec<Startup>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl NetworkData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse records from JSON
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize records to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// No people and no startups
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.startups.is_empty()
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            people: self.people.len(),
            organizations: self.startups.len(),
            connections: self.relationships.len(),
        }
    }

    /// A small demo network: one founder, three collaborators, four startups
    pub fn sample() -> Self {
        let people = vec![
            Person::new("dana-1", "Dana Okafor").with_role("Founder & CEO"),
            Person::new("lee-2", "Lee Park").with_role("CTO"),
            Person::new("sam-3", "Sam Ortiz").with_role("Product Manager"),
            Person::new("rio-4", "Rio Tanaka").with_role("Head of Marketing"),
        ];
        let startups = vec![
            Startup::new("learnloop", "LearnLoop")
                .with_domain("Educational Technology")
                .with_status("Active"),
            Startup::new("gridleaf", "Gridleaf Energy")
                .with_domain("Clean Technology")
                .with_status("Active"),
            Startup::new("paybridge", "PayBridge")
                .with_domain("Financial Technology")
                .with_status("Stealth"),
            Startup::new("clinicall", "Clinicall")
                .with_domain("HealthTech")
                .with_status("Active"),
        ];
        let relationships = vec![
            Relationship::new("dana-1", "learnloop", "Founder"),
            Relationship::new("dana-1", "gridleaf", "Advisor"),
            Relationship::new("lee-2", "learnloop", "CTO"),
            Relationship::new("lee-2", "paybridge", "Technical Advisor"),
            Relationship::new("sam-3", "learnloop", "Product Manager"),
            Relationship::new("sam-3", "clinicall", "Product Consultant"),
            Relationship::new("rio-4", "learnloop", "Head of Marketing"),
            Relationship::new("rio-4", "gridleaf", "Marketing Advisor"),
        ];
        Self {
            people,
            startups,
            relationships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_json() {
        let input = r#"{
            "people": [{"id": "p1", "name": "Dana", "linkedinWebsite": "https://x", "isFounder": true}],
            "startups": [{"id": "s1", "name": "Acme"}],
            "relationships": [{"personId": "p1", "startupId": "s1", "role": "Founder"}]
        }"#;
        let data = NetworkData::from_json(input).unwrap();
        assert_eq!(data.people[0].linkedin_website.as_deref(), Some("https://x"));
        assert_eq!(data.people[0].is_founder, Some(true));
        assert_eq!(data.relationships[0].startup_id, "s1");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let data = NetworkData::from_json(r#"{"people": []}"#).unwrap();
        assert!(data.is_empty());
        assert!(data.relationships.is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = NetworkData::sample().summary();
        assert_eq!(summary.people, 4);
        assert_eq!(summary.organizations, 4);
        assert_eq!(summary.connections, 8);
    }

    #[test]
    fn test_relationship_completeness() {
        assert!(Relationship::new("p", "s", "x").is_complete());
        assert!(!Relationship::new("", "s", "x").is_complete());
        assert!(!Relationship::new("p", "", "x").is_complete());
    }

    #[test]
    fn test_sample_serializes() {
        let json = NetworkData::sample().to_json_pretty().unwrap();
        assert!(json.contains("\"personId\""));
        assert_eq!(NetworkData::from_json(&json).unwrap(), NetworkData::sample());
    }
}
