use serde::Deserialize;
use strum::EnumIter;

/// A single attribute of a presidency record that can be masked for recall.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// The president's name.
    President,
    /// The span of years in office.
    Term,
    /// The political party.
    Party,
}

/// Which field types are eligible for masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySelection {
    pub president: bool,
    pub term: bool,
    pub party: bool,
}

impl Default for CategorySelection {
    fn default() -> Self {
        CategorySelection {
            president: false,
            term: true,
            party: true,
        }
    }
}

impl CategorySelection {
    /// Is the given field type eligible for masking?
    pub fn includes(&self, field_type: FieldType) -> bool {
        match field_type {
            FieldType::President => self.president,
            FieldType::Term => self.term,
            FieldType::Party => self.party,
        }
    }

    /// Is any field type eligible at all?
    pub fn any(&self) -> bool {
        self.president || self.term || self.party
    }

    /// Flip eligibility of the given field type.
    pub fn toggle(&mut self, field_type: FieldType) {
        match field_type {
            FieldType::President => self.president = !self.president,
            FieldType::Term => self.term = !self.term,
            FieldType::Party => self.party = !self.party,
        }
    }
}

/// Quiz difficulty. Determines what fraction of the eligible fields gets
/// masked when a game starts.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// A third of the eligible fields.
    Easy,
    /// Half of the eligible fields.
    #[default]
    Medium,
    /// Two thirds of the eligible fields.
    Hard,
    /// Four fifths of the eligible fields.
    Expert,
}

impl Difficulty {
    /// The fraction of candidate fields hidden at this difficulty.
    pub fn hide_fraction(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.33,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.67,
            Difficulty::Expert => 0.8,
        }
    }
}

/// A masked cell the player has to fill back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    /// Index of the record the cell belongs to.
    pub record_index: usize,
    /// Which attribute of the record is masked.
    pub field_type: FieldType,
    /// Snapshot of the cell's value at mask time.
    pub original_value: String,
    /// Whatever the player has typed so far, verbatim.
    pub user_value: String,
    /// Whether `user_value` currently matches `original_value`.
    pub is_correct: bool,
}
