//! Saved acts (completion certificates) and the images printed on them.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::db::{SavedActItemModel, SavedActModel};

/// What an act is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "ids", rename_all = "snake_case")]
pub enum ActSelection {
    /// Whole sections, one act line per section carrying the section total.
    Sections(Vec<Uuid>),
    /// Individual items, one act line per item.
    Items(Vec<Uuid>),
}

impl ActSelection {
    /// Value stored in `saved_act.selection_mode`.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Sections(_) => "sections",
            Self::Items(_) => "items",
        }
    }

    /// Section or item IDs, in the order they were selected.
    pub fn ids(&self) -> &[Uuid] {
        match self {
            Self::Sections(ids) | Self::Items(ids) => ids,
        }
    }
}

/// Request to freeze a selection of a view into a saved act.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveActRequest {
    /// Estimate the act is saved for.
    pub estimate_id: Uuid,
    /// View whose prices are used, the estimate's first view when absent.
    #[serde(default)]
    pub view_id: Option<Uuid>,
    /// Act number printed in the header.
    pub number: String,
    /// Date printed in the header.
    pub act_date: NaiveDate,
    /// Sections or items to freeze as act lines.
    pub selection: ActSelection,
    /// Contractor name, blank is stored as `None`.
    #[serde(default)]
    pub executor_name: Option<String>,
    /// Customer name, blank is stored as `None`.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Signing director name, blank is stored as `None`.
    #[serde(default)]
    pub director_name: Option<String>,
}

/// A saved act with its lines in print order.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedAct {
    /// Act header.
    pub act: SavedActModel,
    /// Act lines in print order.
    pub items: Vec<SavedActItemModel>,
}

/// Kind of image stored per estimate for act printing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActImageType {
    /// Company logo printed in the act header.
    Logo,
    /// Company stamp next to the signatures.
    Stamp,
    /// Director's signature.
    Signature,
}

impl ActImageType {
    /// Value stored in `act_image.image_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Stamp => "stamp",
            Self::Signature => "signature",
        }
    }
}

impl fmt::Display for ActImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActImageType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "logo" => Ok(Self::Logo),
            "stamp" => Ok(Self::Stamp),
            "signature" => Ok(Self::Signature),
            other => Err(format!("unknown act image type '{}'", other)),
        }
    }
}
