use shared::data::{CarField, CarRecord};

/// A column of the car grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumn {
    Field(CarField),
    /// Opens the edit form for the row.
    Edit,
    /// Asks whether the row should be deleted.
    Delete,
}

pub const COLUMNS: [GridColumn; 8] = [
    GridColumn::Field(CarField::Brand),
    GridColumn::Field(CarField::Model),
    GridColumn::Field(CarField::Color),
    GridColumn::Field(CarField::Fuel),
    GridColumn::Field(CarField::ModelYear),
    GridColumn::Field(CarField::Price),
    GridColumn::Edit,
    GridColumn::Delete,
];

pub const DELETE_PROMPT: &str = "Do you want to delete car?";

impl GridColumn {
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            GridColumn::Field(field) => field.header(),
            GridColumn::Edit | GridColumn::Delete => "",
        }
    }

    /// The text shown in this column for `record`. Action columns show a button label.
    #[must_use]
    pub fn cell(self, record: &CarRecord) -> String {
        match self {
            GridColumn::Field(field) => field.value_of(&record.car),
            GridColumn::Edit => "Edit".to_string(),
            GridColumn::Delete => "Delete".to_string(),
        }
    }
}
