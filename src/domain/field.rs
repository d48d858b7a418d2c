use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::FieldId;

pub const DEFAULT_FIELD_NAME: &str = "Field";

/// The closed set of widget kinds a field can take. The serialized tag is the
/// camelCase form used in the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    SingleLine,
    MultiLine,
    ItemSelect,
    Checkbox,
    Radio,
    Date,
}

impl FieldType {
    /// Every field type, in palette display order.
    pub const ALL: [FieldType; 6] = [
        FieldType::SingleLine,
        FieldType::MultiLine,
        FieldType::ItemSelect,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Date,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            FieldType::SingleLine => "singleLine",
            FieldType::MultiLine => "multiLine",
            FieldType::ItemSelect => "itemSelect",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldType::SingleLine => "Single Line",
            FieldType::MultiLine => "Multi Line",
            FieldType::ItemSelect => "Item Select",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio",
            FieldType::Date => "Date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|kind| kind.tag() == raw)
            .ok_or_else(|| UnknownFieldType {
                raw: raw.to_string(),
            })
    }
}

#[derive(Debug, Clone)]
pub struct UnknownFieldType {
    pub raw: String,
}

impl fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field type: {}", self.raw)
    }
}

impl std::error::Error for UnknownFieldType {}

/// One placed widget: an id, an editable label, and an immutable type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    pub field_name: String,
    pub field_type: FieldType,
}

impl Field {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            id: FieldId::fresh(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            field_type,
        }
    }
}
