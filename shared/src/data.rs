use serde::{Deserialize, Serialize};

/// A car as it is sent to the car service when creating or replacing a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub fuel: String,
    pub model_year: i32,
    pub price: f64,
}

/// A car as the service returns it, together with the link that identifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    #[serde(flatten)]
    pub car: Car,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl CarRecord {
    /// The identity URL of this record. Updates and deletes are sent here.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.links.self_link.href
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// The body of `GET /cars`. Only the embedded cars are of interest, paging
/// information and collection links are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct CarPage {
    #[serde(rename = "_embedded")]
    embedded: Embedded,
}

#[derive(Debug, Clone, Deserialize)]
struct Embedded {
    cars: Vec<CarRecord>,
}

impl CarPage {
    #[must_use]
    pub fn into_records(self) -> Vec<CarRecord> {
        self.embedded.cars
    }
}

/// The editable fields of a [`Car`], in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarField {
    Brand,
    Model,
    Color,
    Fuel,
    ModelYear,
    Price,
}

impl CarField {
    pub const ALL: [CarField; 6] = [
        CarField::Brand,
        CarField::Model,
        CarField::Color,
        CarField::Fuel,
        CarField::ModelYear,
        CarField::Price,
    ];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            CarField::Brand => "Brand",
            CarField::Model => "Model",
            CarField::Color => "Color",
            CarField::Fuel => "Fuel",
            CarField::ModelYear => "Year",
            CarField::Price => "Price",
        }
    }

    /// Renders the value of this field of `car` as text.
    #[must_use]
    pub fn value_of(self, car: &Car) -> String {
        match self {
            CarField::Brand => car.brand.clone(),
            CarField::Model => car.model.clone(),
            CarField::Color => car.color.clone(),
            CarField::Fuel => car.fuel.clone(),
            CarField::ModelYear => car.model_year.to_string(),
            CarField::Price => car.price.to_string(),
        }
    }
}
