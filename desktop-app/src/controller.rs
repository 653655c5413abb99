use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use log::{error, info};
use shared::data::{Car, CarRecord};

use crate::client::{CarApi, Error};

/// What every operation of [`CarList`] resolves to: the outcome of the list request that
/// follows it. Hand it to [`CarList::apply`] once it completes.
pub type Refresh = BoxFuture<'static, Result<Vec<CarRecord>, Error>>;

/// Holds the cars currently shown and issues the requests that change them.
///
/// Nothing is changed locally. Every mutation is sent to the service and followed by a
/// full reload, so the list is always whatever the service returned last. Refreshes that
/// overlap are applied in the order they complete.
pub struct CarList {
    api: Arc<dyn CarApi>,
    cars: Vec<CarRecord>,
    pending_delete: Option<String>,
}

impl CarList {
    #[must_use]
    pub fn new(api: Arc<dyn CarApi>) -> Self {
        CarList {
            api,
            cars: Vec::new(),
            pending_delete: None,
        }
    }

    #[must_use]
    pub fn cars(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn fetch_all(&self) -> Refresh {
        let api = Arc::clone(&self.api);
        async move { api.fetch_cars().await }.boxed()
    }

    /// Replaces the held cars with the result of a refresh. A failed refresh is logged and
    /// the previous cars are kept.
    pub fn apply(&mut self, result: Result<Vec<CarRecord>, Error>) {
        match result {
            Ok(cars) => {
                info!("Loaded {} cars.", cars.len());
                self.cars = cars;
            }
            Err(err) => error!("Failed to fetch cars. {err}"),
        }
    }

    pub fn create(&self, car: Car) -> Refresh {
        let api = Arc::clone(&self.api);
        async move {
            info!("Creating {} {}.", car.brand, car.model);
            if let Err(err) = api.create_car(&car).await {
                error!("Failed to create car. {err}");
            }
            api.fetch_cars().await
        }
        .boxed()
    }

    pub fn update(&self, car: Car, href: String) -> Refresh {
        let api = Arc::clone(&self.api);
        async move {
            info!("Updating {href}.");
            if let Err(err) = api.update_car(&href, &car).await {
                error!("Failed to update {href}. {err}");
            }
            api.fetch_cars().await
        }
        .boxed()
    }

    /// Asks for confirmation before deleting the car at `href`. Replaces any earlier
    /// unanswered request.
    pub fn request_delete(&mut self, href: String) {
        self.pending_delete = Some(href);
    }

    /// The identity URL waiting for a delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Answers the pending delete confirmation. Declining, or answering when nothing is
    /// pending, sends nothing.
    pub fn confirm_delete(&mut self, accepted: bool) -> Option<Refresh> {
        let href = self.pending_delete.take()?;
        if !accepted {
            return None;
        }

        let api = Arc::clone(&self.api);
        Some(
            async move {
                info!("Deleting {href}.");
                if let Err(err) = api.delete_car(&href).await {
                    error!("Failed to delete {href}. {err}");
                }
                api.fetch_cars().await
            }
            .boxed(),
        )
    }
}
