use shared::data::{Car, CarField, CarRecord};

/// The text a user has typed into the car fields so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarDraft {
    brand: String,
    model: String,
    color: String,
    fuel: String,
    model_year: String,
    price: String,
}

impl CarDraft {
    #[must_use]
    pub fn from_car(car: &Car) -> Self {
        CarDraft {
            brand: car.brand.clone(),
            model: car.model.clone(),
            color: car.color.clone(),
            fuel: car.fuel.clone(),
            model_year: car.model_year.to_string(),
            price: car.price.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, field: CarField) -> &str {
        match field {
            CarField::Brand => &self.brand,
            CarField::Model => &self.model,
            CarField::Color => &self.color,
            CarField::Fuel => &self.fuel,
            CarField::ModelYear => &self.model_year,
            CarField::Price => &self.price,
        }
    }

    /// Updates a field with new input. Numeric fields ignore input that is not a number,
    /// the way a numeric input control would.
    pub fn set(&mut self, field: CarField, value: String) {
        let accepted = match field {
            CarField::ModelYear => !value.contains('.') && is_partial_number::<i32>(&value),
            CarField::Price => is_partial_number::<f64>(&value),
            _ => true,
        };
        if !accepted {
            return;
        }

        match field {
            CarField::Brand => self.brand = value,
            CarField::Model => self.model = value,
            CarField::Color => self.color = value,
            CarField::Fuel => self.fuel = value,
            CarField::ModelYear => self.model_year = value,
            CarField::Price => self.price = value,
        }
    }

    /// The car described by the draft. Numeric fields that are empty or incomplete count as 0.
    #[must_use]
    pub fn to_car(&self) -> Car {
        Car {
            brand: self.brand.clone(),
            model: self.model.clone(),
            color: self.color.clone(),
            fuel: self.fuel.clone(),
            model_year: self.model_year.parse().unwrap_or_default(),
            price: self.price.parse().unwrap_or_default(),
        }
    }
}

/// Accepts complete numbers and the prefixes a user passes through while typing one.
fn is_partial_number<T: std::str::FromStr>(value: &str) -> bool {
    if !value.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.') {
        return false;
    }
    matches!(value, "" | "-" | "." | "-.") || value.parse::<T>().is_ok()
}

#[derive(Debug, Default)]
pub struct AddCarForm {
    open: bool,
    draft: CarDraft,
}

impl AddCarForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn draft(&self) -> &CarDraft {
        &self.draft
    }

    pub fn edit(&mut self, field: CarField, value: String) {
        self.draft.set(field, value);
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.draft = CarDraft::default();
    }

    /// Closes the form and returns the car to create. The draft starts empty next time.
    pub fn submit(&mut self) -> Car {
        let car = self.draft.to_car();
        self.cancel();
        car
    }
}

/// Edits a copy of an existing record. The record itself is never touched.
#[derive(Debug)]
pub struct EditCarForm {
    href: String,
    draft: CarDraft,
}

impl EditCarForm {
    #[must_use]
    pub fn new(record: &CarRecord) -> Self {
        EditCarForm {
            href: record.href().to_owned(),
            draft: CarDraft::from_car(&record.car),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &CarDraft {
        &self.draft
    }

    pub fn edit(&mut self, field: CarField, value: String) {
        self.draft.set(field, value);
    }

    /// The edited car and the identity URL it should be sent to.
    #[must_use]
    pub fn save(self) -> (Car, String) {
        (self.draft.to_car(), self.href)
    }
}
