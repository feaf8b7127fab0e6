use tera::Context;

use gestao_web::build_tera;
use gestao_web::domain::analytics::ConsultantProposals;
use gestao_web::view::chatbot::ChatAnswerView;
use gestao_web::view::contracts::CONTRACTS_TABLE;
use gestao_web::view::dashboard::{DashboardSeries, build_charts};

fn empty_alerts() -> Vec<serde_json::Value> {
    Vec::new()
}

#[test]
fn every_template_parses() {
    let tera = build_tera("templates/**/*").unwrap();
    let names: Vec<&str> = tera.get_template_names().collect();

    for expected in [
        "base.html",
        "main/login.html",
        "contracts/index.html",
        "schedules/index.html",
        "proposals/index.html",
        "dashboard/index.html",
        "chatbot/answer.html",
        "import/index.html",
        "partials/entity_table.html",
    ] {
        assert!(names.contains(&expected), "{expected}");
    }
}

#[test]
fn empty_table_renders_placeholder_row() {
    let tera = build_tera("templates/**/*").unwrap();
    let mut context = Context::new();
    context.insert("table", &CONTRACTS_TABLE.render(&[]));

    let html = tera.render("partials/entity_table.html", &context).unwrap();

    assert!(html.contains(r#"colspan="7""#));
    assert!(html.contains("fa-file-contract"));
    assert!(html.contains("Nenhum contrato encontrado"));
    assert!(!html.contains("delete-form\">"));
}

#[test]
fn list_error_replaces_the_table() {
    let tera = build_tera("templates/**/*").unwrap();
    let mut context = Context::new();
    context.insert("alerts", &empty_alerts());
    context.insert("current_user", &Option::<()>::None);
    context.insert("current_page", "contratos");
    context.insert("statuses", &["Pendente"]);
    context.insert("list_error", "Erro ao carregar contratos.");

    let html = tera.render("contracts/index.html", &context).unwrap();

    assert!(html.contains("Erro ao carregar contratos."));
    assert!(!html.contains("<table"));
}

#[test]
fn dashboard_without_kpis_still_draws_charts() {
    let tera = build_tera("templates/**/*").unwrap();
    let mut context = Context::new();
    context.insert("alerts", &empty_alerts());
    context.insert("current_user", &Option::<()>::None);
    context.insert("current_page", "dashboard");
    context.insert("kpis", &Option::<()>::None);
    context.insert("charts", &build_charts(&DashboardSeries::default()));

    let html = tera.render("dashboard/index.html", &context).unwrap();

    assert!(html.contains("Indicadores indisponíveis no momento."));
    for id in [
        "graficoPropostaStatus",
        "graficoReceitaMensal",
        "graficoConsultor",
        "graficoProdutividade",
    ] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "{id}");
    }
}

#[test]
fn chat_answer_text_is_escaped() {
    let tera = build_tera("templates/**/*").unwrap();
    let mut context = Context::new();
    context.insert(
        "answer",
        &ChatAnswerView {
            answer: "<b>3</b> contratos".to_string(),
            ..ChatAnswerView::default()
        },
    );

    let html = tera.render("chatbot/answer.html", &context).unwrap();

    assert!(html.contains("&lt;b&gt;3&lt;"));
    assert!(!html.contains("<b>3</b>"));
}

#[test]
fn chart_labels_cannot_close_the_inline_script() {
    let tera = build_tera("templates/**/*").unwrap();
    let series = DashboardSeries {
        by_consultant: vec![ConsultantProposals {
            consultant: "</script><script>alert(1)</script> & Cia".to_string(),
            total: 2,
        }],
        ..DashboardSeries::default()
    };
    let mut context = Context::new();
    context.insert("alerts", &empty_alerts());
    context.insert("current_user", &Option::<()>::None);
    context.insert("current_page", "dashboard");
    context.insert("kpis", &Option::<()>::None);
    context.insert("charts", &build_charts(&series));

    let html = tera.render("dashboard/index.html", &context).unwrap();

    assert!(!html.contains("</script><script>alert(1)"));
    assert!(html.contains(r"\u003c/script\u003e\u003cscript\u003ealert(1)"));
    assert!(html.contains(r"\u0026 Cia"));
}
