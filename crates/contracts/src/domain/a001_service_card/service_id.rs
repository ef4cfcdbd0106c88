use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier carried in a card's `data-service` attribute.
///
/// Known services get their own variant; anything else is preserved verbatim
/// so the join with its detail panel still works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceId {
    Civil,
    Electrical,
    Complementary,
    Other(String),
}

impl ServiceId {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceId::Civil => "civil",
            ServiceId::Electrical => "electrical",
            ServiceId::Complementary => "complementary",
            ServiceId::Other(s) => s.as_str(),
        }
    }

    /// Element id of the matching detail panel.
    pub fn detail_id(&self) -> String {
        format!("{}-detail", self.as_str())
    }

    /// Accessible name announced for a flip card. Unknown services have none.
    pub fn accessible_name(&self) -> &'static str {
        match self {
            ServiceId::Civil => "Engenharia Civil",
            ServiceId::Electrical => "Engenharia Elétrica",
            ServiceId::Complementary => "Projetos Complementares",
            ServiceId::Other(_) => "",
        }
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        match s {
            "civil" => ServiceId::Civil,
            "electrical" => ServiceId::Electrical,
            "complementary" => ServiceId::Complementary,
            other => ServiceId::Other(other.to_string()),
        }
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        ServiceId::from(s.as_str())
    }
}

impl From<ServiceId> for String {
    fn from(id: ServiceId) -> Self {
        id.as_str().to_string()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
