use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use carshop_desktop::client::{CarApi, Error, RestClient};
use reqwest::Url;
use serde_json::{json, Value};
use shared::data::Car;
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
struct Request {
    method: &'static str,
    path: String,
    body: Option<Value>,
}

#[derive(Clone)]
struct ServerState {
    address: SocketAddr,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl ServerState {
    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.requests
            .lock()
            .unwrap()
            .push(Request { method, path, body });
    }
}

async fn list_cars(State(state): State<ServerState>) -> Json<Value> {
    state.record("GET", "/cars".into(), None);
    let base = format!("http://{}", state.address);

    Json(json!({
        "_embedded": {
            "cars": [
                {
                    "brand": "Toyota",
                    "model": "Corolla",
                    "color": "White",
                    "fuel": "Petrol",
                    "modelYear": 2019,
                    "price": 18500,
                    "_links": {
                        "self": { "href": format!("{base}/cars/1") },
                        "car": { "href": format!("{base}/cars/1") }
                    }
                },
                {
                    "brand": "Honda",
                    "model": "Civic",
                    "color": "Red",
                    "fuel": "Hybrid",
                    "modelYear": 2021,
                    "price": 24000,
                    "_links": {
                        "self": { "href": format!("{base}/cars/2") },
                        "car": { "href": format!("{base}/cars/2") }
                    }
                }
            ]
        },
        "_links": { "self": { "href": format!("{base}/cars") } },
        "page": { "size": 20, "totalElements": 2, "totalPages": 1, "number": 0 }
    }))
}

async fn create_car(State(state): State<ServerState>, Json(body): Json<Value>) -> StatusCode {
    state.record("POST", "/cars".into(), Some(body));
    StatusCode::CREATED
}

async fn replace_car(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record("PUT", format!("/cars/{id}"), Some(body));
    StatusCode::OK
}

async fn remove_car(State(state): State<ServerState>, Path(id): Path<String>) -> StatusCode {
    state.record("DELETE", format!("/cars/{id}"), None);
    if id == "missing" {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn spawn_server() -> (RestClient, ServerState) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = ServerState {
        address: listener.local_addr().unwrap(),
        requests: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", axum::routing::put(replace_car).delete(remove_car))
        .with_state(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = Url::parse(&format!("http://{}", state.address)).unwrap();
    (RestClient::new(base_url).unwrap(), state)
}

fn focus() -> Car {
    Car {
        brand: "Ford".into(),
        model: "Focus".into(),
        color: "Blue".into(),
        fuel: "Diesel".into(),
        model_year: 2015,
        price: 9000.0,
    }
}

#[tokio::test]
async fn fetch_reads_embedded_cars() {
    let (client, state) = spawn_server().await;

    let cars = client.fetch_cars().await.unwrap();

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].car.brand, "Toyota");
    assert_eq!(cars[1].car.model, "Civic");
    assert_eq!(cars[1].href(), format!("http://{}/cars/2", state.address));
}

#[tokio::test]
async fn create_posts_json_body() {
    let (client, state) = spawn_server().await;

    client.create_car(&focus()).await.unwrap();

    let requests = state.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/cars");
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["brand"], "Ford");
    assert_eq!(body["modelYear"], 2015);
    assert_eq!(body["price"], 9000.0);
}

#[tokio::test]
async fn update_and_delete_target_the_identity_url() {
    let (client, state) = spawn_server().await;
    let href = format!("http://{}/cars/1", state.address);

    client.update_car(&href, &focus()).await.unwrap();
    client.delete_car("/cars/1").await.unwrap();

    let requests = state.requests.lock().unwrap().clone();
    let calls: Vec<(&str, &str)> = requests
        .iter()
        .map(|request| (request.method, request.path.as_str()))
        .collect();
    assert_eq!(calls, [("PUT", "/cars/1"), ("DELETE", "/cars/1")]);
    assert_eq!(requests[0].body.as_ref().unwrap()["model"], "Focus");
}

#[tokio::test]
async fn error_status_is_reported() {
    let (client, _state) = spawn_server().await;

    let err = client.delete_car("/cars/missing").await.unwrap_err();

    match err {
        Error::Http(err) => assert_eq!(err.status().map(|status| status.as_u16()), Some(404)),
        other => panic!("unexpected error: {other}"),
    }
}
