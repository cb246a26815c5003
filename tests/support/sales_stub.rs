use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalesStubMode {
	#[default]
	Accept,
	RejectSale,
	FailSale,
}

#[derive(Default)]
pub struct SalesStubState {
	mode:     Mutex<SalesStubMode>,
	recorded: Mutex<Vec<Value>>,
	reversed: Mutex<Vec<String>>,
}

/// An in-process Sales Service speaking the real wire contract, for
/// driving the reqwest-backed gateway end to end.
pub struct SalesStub {
	pub base_url: String,
	state:        web::Data<SalesStubState>,
}

impl SalesStub {
	pub fn set_mode(&self, mode: SalesStubMode) {
		*self.state.mode.lock().unwrap() = mode;
	}

	pub fn recorded(&self) -> Vec<Value> {
		self.state.recorded.lock().unwrap().clone()
	}

	pub fn reversed(&self) -> Vec<String> {
		self.state.reversed.lock().unwrap().clone()
	}
}

async fn record_sale(
	state: web::Data<SalesStubState>,
	payload: web::Json<Value>,
) -> HttpResponse {
	match *state.mode.lock().unwrap() {
		SalesStubMode::Accept => {
			state.recorded.lock().unwrap().push(payload.into_inner());
			HttpResponse::Created().json(json!({
				"message": "Sale processed successfully!"
			}))
		}
		SalesStubMode::RejectSale => HttpResponse::BadRequest().json(json!({
			"error": "Not enough stock for Milk"
		})),
		SalesStubMode::FailSale => {
			HttpResponse::InternalServerError().finish()
		}
	}
}

async fn delete_sale(
	state: web::Data<SalesStubState>,
	path: web::Path<String>,
) -> HttpResponse {
	match *state.mode.lock().unwrap() {
		SalesStubMode::Accept => {
			state.reversed.lock().unwrap().push(path.into_inner());
			HttpResponse::Ok().json(json!({"message": "Sale reversed"}))
		}
		SalesStubMode::RejectSale => HttpResponse::NotFound().json(json!({
			"error": "Sale not found"
		})),
		SalesStubMode::FailSale => {
			HttpResponse::InternalServerError().finish()
		}
	}
}

pub fn start_sales_stub() -> SalesStub {
	let state = web::Data::new(SalesStubState::default());
	let listener =
		TcpListener::bind("127.0.0.1:0").expect("bind sales stub listener");
	let addr = listener.local_addr().expect("sales stub listener address");
	let app_state = state.clone();

	let server = HttpServer::new(move || {
		App::new()
			.app_data(app_state.clone())
			.route("/sales", web::post().to(record_sale))
			.route("/sales/{reference}", web::delete().to(delete_sale))
	})
	.listen(listener)
	.expect("listen on sales stub listener")
	.workers(1)
	.disable_signals()
	.run();

	actix_web::rt::spawn(server);

	SalesStub {
		base_url: format!("http://{addr}"),
		state,
	}
}
