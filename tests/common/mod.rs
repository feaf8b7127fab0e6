//! In-process stand-in for the REST API, served over real HTTP so the
//! reqwest client is exercised end to end.

#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use gestao_web::backend::http::HttpBackend;

pub const VALID_TOKEN: &str = "tok-123";
pub const EXPIRED_TOKEN: &str = "tok-expired";
pub const PASSWORD: &str = "secret";

/// Requests seen by the fake API, as `METHOD path?query`.
#[derive(Default)]
pub struct Recorded(pub Mutex<Vec<String>>);

impl Recorded {
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

pub struct FakeApi {
    pub base_url: String,
    pub recorded: web::Data<Recorded>,
}

impl FakeApi {
    pub fn backend(&self) -> HttpBackend {
        HttpBackend::new(&self.base_url).unwrap()
    }
}

fn record(req: &HttpRequest, recorded: &Recorded) {
    let line = match req.query_string() {
        "" => format!("{} {}", req.method(), req.path()),
        query => format!("{} {}?{}", req.method(), req.path(), query),
    };
    recorded.0.lock().unwrap().push(line);
}

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Rejects anything but the valid token with a FastAPI-style 401.
fn authorize(req: &HttpRequest) -> Result<(), HttpResponse> {
    match bearer(req) {
        Some(VALID_TOKEN) => Ok(()),
        _ => Err(HttpResponse::Unauthorized().json(json!({ "detail": "Could not validate credentials" }))),
    }
}

fn contract(id: i64, status: &str, value: Value) -> Value {
    json!({
        "id": id,
        "proposta_id": 12,
        "numero_contrato": format!("CT-{id}"),
        "data_assinatura": "2024-01-15",
        "data_vencimento": "2024-02-15",
        "valor": value,
        "status_pagamento": status,
        "observacao": null,
        "proposta": { "numero_proposta": "PROP-12" }
    })
}

async fn login(form: web::Form<Vec<(String, String)>>) -> HttpResponse {
    let field = |name: &str| {
        form.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };
    match (field("username"), field("password")) {
        (Some("ana@example.com"), Some(PASSWORD)) => {
            HttpResponse::Ok().json(json!({ "access_token": VALID_TOKEN, "token_type": "bearer" }))
        }
        (Some("revoked@example.com"), Some(PASSWORD)) => {
            HttpResponse::Ok().json(json!({ "access_token": EXPIRED_TOKEN, "token_type": "bearer" }))
        }
        _ => HttpResponse::Unauthorized().json(json!({ "detail": "Incorrect email or password" })),
    }
}

/// Both tokens resolve a profile so a session can be opened with the expired
/// one and then rejected by the data endpoints.
async fn me(req: HttpRequest) -> HttpResponse {
    if !matches!(bearer(&req), Some(VALID_TOKEN) | Some(EXPIRED_TOKEN)) {
        return HttpResponse::Unauthorized().json(json!({ "detail": "Could not validate credentials" }));
    }
    HttpResponse::Ok().json(json!({
        "id": 1,
        "nome": "Ana Souza",
        "email": "ana@example.com",
        "funcao": "Admin",
        "consultor_id": null,
        "ativo": true
    }))
}

async fn list_contracts(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::Ok().json(json!([
        contract(1, "Vencido", json!("2500.00")),
        contract(2, "Pago", json!(1200.5)),
    ]))
}

async fn contract_alerts(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::Ok().json(json!([contract(1, "Vencido", json!("2500.00"))]))
}

async fn create_contract(
    req: HttpRequest,
    body: web::Json<Value>,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    if body.get("proposta_id") == Some(&json!(999)) {
        return HttpResponse::BadRequest().json(json!({ "detail": "Proposta não encontrada" }));
    }
    let mut created = body.into_inner();
    created["id"] = json!(3);
    HttpResponse::Created().json(created)
}

async fn delete_contract(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::NoContent().finish()
}

async fn empty_list(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::Ok().json(json!([]))
}

async fn list_proposals(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::Ok().json(json!([
        {
            "id": 1,
            "numero_proposta": "P-001",
            "empresa_id": 1,
            "consultor_id": 5,
            "solucao": "ERP",
            "valor_proposta": "25000.00",
            "status": "Fechado"
        },
        {
            "id": 2,
            "numero_proposta": "P-002",
            "empresa_id": 2,
            "consultor_id": null,
            "solucao": "BI",
            "valor_proposta": 8000,
            "status": "Fechado"
        }
    ]))
}

async fn list_companies(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::Ok().json(json!([
        { "id": 1, "nome": "ACME Ltda" },
        { "id": 2, "nome": "Globex" }
    ]))
}

async fn list_consultants(req: HttpRequest, recorded: web::Data<Recorded>) -> HttpResponse {
    record(&req, &recorded);
    if let Err(response) = authorize(&req) {
        return response;
    }
    HttpResponse::Ok().json(json!([{ "id": 5, "nome": "Carlos Lima" }]))
}

async fn ask(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if let Err(response) = authorize(&req) {
        return response;
    }
    let question = body.get("mensagem").and_then(Value::as_str).unwrap_or_default();
    HttpResponse::Ok().json(json!({
        "resposta": format!("Você perguntou: {question}"),
        "dados": {
            "contratos": [
                { "numero": "CT-1", "empresa": "ACME Ltda", "vencimento": "15/02/2024", "valor": "2500.00" }
            ]
        }
    }))
}

/// Reads the whole upload before answering, like the real API. Only `.xlsx`
/// files are accepted; each kind answers with a different summary.
async fn import(
    req: HttpRequest,
    kind: web::Path<String>,
    body: web::Bytes,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    recorded
        .0
        .lock()
        .unwrap()
        .push(format!("POST {} ({} bytes)", req.path(), body.len()));
    if let Err(response) = authorize(&req) {
        return response;
    }
    if !String::from_utf8_lossy(&body).contains(".xlsx\"") {
        return HttpResponse::UnprocessableEntity().json(json!({
            "detail": [{ "loc": ["body", "file"], "msg": "Formato de arquivo inválido" }]
        }));
    }
    match kind.as_str() {
        "empresas" => HttpResponse::Ok().json(json!({
            "sucesso": true,
            "registros_importados": 3,
            "erros": ["Linha 4: CNPJ duplicado"]
        })),
        "propostas" => HttpResponse::Ok().json(json!({
            "sucesso": true,
            "registros_importados": 12,
            "erros": (2..=8).map(|line| format!("Linha {line}: valor inválido")).collect::<Vec<_>>()
        })),
        _ => HttpResponse::Ok().json(json!({
            "sucesso": false,
            "registros_importados": 0,
            "erros": ["Planilha sem a coluna data_inicio"]
        })),
    }
}

/// Binds the fake API to an ephemeral port and serves it in the background.
pub async fn spawn_fake_api() -> FakeApi {
    let recorded = web::Data::new(Recorded::default());
    let data = recorded.clone();

    let server = HttpServer::new(move || {
        App::new().app_data(data.clone()).service(
            web::scope("/api")
                .route("/login", web::post().to(login))
                .route("/usuarios/me", web::get().to(me))
                .route("/contratos/", web::get().to(list_contracts))
                .route("/contratos/", web::post().to(create_contract))
                .route("/contratos/alertas", web::get().to(contract_alerts))
                .route("/contratos/{id}", web::delete().to(delete_contract))
                .route("/cronogramas/", web::get().to(empty_list))
                .route("/cronogramas/alertas", web::get().to(empty_list))
                .route("/propostas/", web::get().to(list_proposals))
                .route("/empresas/", web::get().to(list_companies))
                .route("/consultores/", web::get().to(list_consultants))
                .route("/chatbot/perguntar", web::post().to(ask))
                .service(
                    web::resource("/importacao/{kind}")
                        .app_data(web::PayloadConfig::new(32 * 1024 * 1024))
                        .route(web::post().to(import)),
                ),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    FakeApi {
        base_url: format!("http://{addr}/api/"),
        recorded,
    }
}
