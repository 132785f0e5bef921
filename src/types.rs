use serde::{Deserialize, Serialize};

/// Comparison semantics applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LowerThan,
    LowerThanOrEqual,
    BeginsWith,
    Contains,
    DateRangesOverlap,
}

/// SharePoint field type, used only as the `Type` attribute of the value
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Note,
    User,
    UserMulti,
    Boolean,
    Counter,
    Computed,
}

impl FieldType {
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Note => "Note",
            FieldType::User => "User",
            FieldType::UserMulti => "UserMulti",
            FieldType::Boolean => "Boolean",
            FieldType::Counter => "Counter",
            FieldType::Computed => "Computed",
        }
    }
}

/// One rendered filter condition, immutable once built.
///
/// Serializes as its markup string. There is deliberately no `Deserialize`:
/// a `Filter` only comes out of one of the builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filter {
    pub(crate) markup: String,
}

impl Filter {
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_labels() {
        assert_eq!(FieldType::Text.label(), "Text");
        assert_eq!(FieldType::Note.label(), "Note");
        assert_eq!(FieldType::User.label(), "User");
        assert_eq!(FieldType::UserMulti.label(), "UserMulti");
        assert_eq!(FieldType::Boolean.label(), "Boolean");
        assert_eq!(FieldType::Counter.label(), "Counter");
        assert_eq!(FieldType::Computed.label(), "Computed");
    }

    #[test]
    fn test_display_matches_as_str() {
        let filter = Filter::presence("Editor", false);
        assert_eq!(filter.to_string(), filter.as_str());
    }

    #[test]
    fn test_into_string() {
        let filter = Filter::presence("Editor", true);
        let expected = filter.as_str().to_string();
        assert_eq!(filter.into_string(), expected);
    }

    #[test]
    fn test_operator_serializes_as_variant_name() {
        let yaml = serde_yaml::to_string(&Operator::BeginsWith).unwrap();
        assert_eq!(yaml.trim(), "BeginsWith");
    }

    #[test]
    fn test_field_type_round_trips_through_serde() {
        let yaml = serde_yaml::to_string(&FieldType::UserMulti).unwrap();
        let back: FieldType = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, FieldType::UserMulti);
    }
}
