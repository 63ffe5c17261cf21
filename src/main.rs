use actix_cors::Cors;
use actix_web::{get, middleware::Logger, post, web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod chain;
mod confetti;
mod demo;
mod join;
mod schemas;
mod split;
mod wizard;

use crate::join::JoinBillFlow;
use crate::schemas::BillDraft;
use crate::wizard::CreateBillWizard;

#[derive(Deserialize, Serialize)]
struct BillIdJson {
    bill_id: String,
}

#[derive(Serialize)]
struct DashboardJson {
    active_bills: Vec<schemas::ActiveBillCard>,
    past_bills: Vec<schemas::PastBillCard>,
}

#[get("/dashboard")]
async fn get_dashboard() -> HttpResponse {
    HttpResponse::Ok().json(DashboardJson {
        active_bills: demo::active_bills(),
        past_bills: demo::past_bills(),
    })
}

#[derive(Serialize)]
struct StepJson {
    number: u8,
    title: &'static str,
    description: &'static str,
}

#[get("/create-bill/steps")]
async fn get_wizard_steps() -> HttpResponse {
    let steps: Vec<StepJson> = wizard::Step::all()
        .into_iter()
        .map(|step| StepJson {
            number: step.number(),
            title: step.title(),
            description: step.description(),
        })
        .collect();
    HttpResponse::Ok().json(steps)
}

#[post("/bills")]
async fn create_bill(draft: web::Json<BillDraft>) -> HttpResponse {
    HttpResponse::Ok().json(CreateBillWizard::from_draft(draft.into_inner()).create())
}

#[derive(Serialize)]
struct BillDetailsJson {
    #[serde(flatten)]
    bill: schemas::Bill,
    remaining_amount: f64,
    progress_percentage: f64,
    paid_participants: usize,
    your_share: f64,
    you_have_paid: bool,
}

#[get("/bills/{id}")]
async fn get_bill(id: web::Path<String>) -> HttpResponse {
    let bill = demo::bill_details(&id.into_inner());
    HttpResponse::Ok().json(BillDetailsJson {
        remaining_amount: bill.remaining_amount(),
        progress_percentage: bill.progress_percentage(),
        paid_participants: bill.paid_participants(),
        your_share: bill.your_share(),
        you_have_paid: bill.you_have_paid(),
        bill,
    })
}

#[derive(Deserialize)]
struct ViewportQuery {
    #[serde(default = "default_viewport_width")]
    width: f64,
    #[serde(default = "default_viewport_height")]
    height: f64,
}

fn default_viewport_width() -> f64 {
    1280.0
}

fn default_viewport_height() -> f64 {
    720.0
}

#[derive(Serialize)]
struct CompletedJson {
    receipt: schemas::CompletedBill,
    // Seed frame for the celebration burst on the completion screen.
    confetti: Vec<confetti::Particle>,
}

#[get("/bills/{id}/completed")]
async fn get_completed_bill(
    id: web::Path<String>,
    viewport: web::Query<ViewportQuery>,
) -> HttpResponse {
    let burst = confetti::ConfettiAnimation::new(viewport.width, viewport.height);
    HttpResponse::Ok().json(CompletedJson {
        receipt: demo::completed_bill(&id.into_inner()),
        confetti: burst.particles().to_vec(),
    })
}

#[derive(Serialize)]
struct LookupJson {
    state: join::JoinState,
    bill: schemas::Bill,
    your_share: f64,
}

#[post("/join/lookup")]
async fn lookup_bill(
    json: web::Json<BillIdJson>,
    delays: web::Data<join::SimulatedDelays>,
) -> HttpResponse {
    let mut flow = JoinBillFlow::with_delays(delays.lookup, delays.payment);
    match flow.lookup(&json.bill_id).await {
        Some(bill) => {
            let bill = bill.clone();
            HttpResponse::Ok().json(LookupJson {
                state: flow.state(),
                your_share: bill.your_share(),
                bill,
            })
        }
        None => HttpResponse::BadRequest().body("A bill id is required"),
    }
}

#[post("/join/pay")]
async fn pay_share(
    json: web::Json<BillIdJson>,
    delays: web::Data<join::SimulatedDelays>,
) -> HttpResponse {
    // The summary was already shown on lookup; only the confirmation wait
    // is simulated here.
    let mut flow = JoinBillFlow::with_delays(Duration::ZERO, delays.payment);
    if flow.lookup(&json.bill_id).await.is_none() {
        return HttpResponse::BadRequest().body("A bill id is required");
    }
    // A resolved summary is the only precondition pay has.
    let receipt = flow.pay().await.unwrap();
    HttpResponse::Ok().json(receipt)
}

#[get("/network")]
async fn get_network() -> HttpResponse {
    HttpResponse::Ok().json(chain::configured_chains())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let addr = std::env::var("BLITZ_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("Listening on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(join::SimulatedDelays::default()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(get_dashboard)
            .service(get_wizard_steps)
            .service(create_bill)
            .service(get_bill)
            .service(get_completed_bill)
            .service(lookup_bill)
            .service(pay_share)
            .service(get_network)
    })
    .bind(addr)?
    .run()
    .await
}
