use serde::{Deserialize, Serialize};

/// Processing state of a lead submission.
///
/// Any state may be set from any other; the admin panel offers all three
/// as buttons on every record.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Processed,
    Replied,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [Self::New, Self::Processed, Self::Replied];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processed => "processed",
            Self::Replied => "replied",
        }
    }

    /// Label shown in the admin panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "Новая",
            Self::Processed => "В обработке",
            Self::Replied => "Отвечено",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for SubmissionStatus {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "processed" => Ok(Self::Processed),
            "replied" => Ok(Self::Replied),
            _ => Err(format!("invalid submission status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Replied".parse::<SubmissionStatus>(), Ok(SubmissionStatus::Replied));
        assert_eq!(" new ".parse::<SubmissionStatus>(), Ok(SubmissionStatus::New));
        assert!("archived".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Processed).unwrap();
        assert_eq!(json, "\"processed\"");
        assert_eq!(SubmissionStatus::Processed, "processed");
    }
}
