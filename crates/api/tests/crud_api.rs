//! HTTP-level integration tests for the single-key CRUD resources.
//!
//! Every resource shares the same handler set, so full lifecycle coverage
//! runs against `/professores` and the remaining resources get targeted
//! checks: field round-trips for each payload shape and the documented
//! Portuguese not-found messages.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Professores: full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_professor_returns_201_with_generated_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/professores",
        serde_json::json!({
            "nome_completo": "Ana Silva",
            "email": "ana@x.com",
            "telefone": "11999990000"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["nome_completo"], "Ana Silva");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["telefone"], "11999990000");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_professor_roundtrips_submitted_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/professores",
            serde_json::json!({
                "nome_completo": "Ana Silva",
                "email": "ana@x.com",
                "telefone": "11999990000"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/professores/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["nome_completo"], "Ana Silva");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["telefone"], "11999990000");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_professor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/professores/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Professor não encontrado");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_professor_overwrites_and_acknowledges(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/professores",
            serde_json::json!({
                "nome_completo": "Ana Silva",
                "email": "ana@x.com",
                "telefone": "11999990000"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/professores/{id}"),
        serde_json::json!({
            "nome_completo": "Ana Souza",
            "email": "ana.souza@x.com",
            "telefone": "11988887777"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Professor atualizado com sucesso");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/professores/{id}")).await).await;
    assert_eq!(json["nome_completo"], "Ana Souza");
    assert_eq!(json["email"], "ana.souza@x.com");
    assert_eq!(json["telefone"], "11988887777");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_professor_still_reports_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/professores/4242",
        serde_json::json!({
            "nome_completo": "Fantasma",
            "email": "nobody@x.com",
            "telefone": "0"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Professor atualizado com sucesso");

    // No row was created by the no-op update.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/professores").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_professor_then_get_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/professores",
            serde_json::json!({
                "nome_completo": "Ana Silva",
                "email": "ana@x.com",
                "telefone": "11999990000"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/professores/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Professor deletado com sucesso");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/professores/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_professor_still_reports_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/professores/4242").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Professor deletado com sucesso");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_professores_grows_with_creates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/professores").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    for nome in ["P1", "P2", "P3"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/professores",
            serde_json::json!({
                "nome_completo": nome,
                "email": "p@x.com",
                "telefone": "1"
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/professores").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Remaining resources: payload round-trips and not-found messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn pagamento_roundtrip_and_404_message(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/pagamentos",
        serde_json::json!({
            "id_aluno": 7,
            "data_pagamento": "2026-02-01",
            "valor_pago": 350.5,
            "forma_pagamento": "pix",
            "referencia": "fevereiro",
            "status": "pago"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["valor_pago"], 350.5);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/pagamentos/{id}")).await).await;
    assert_eq!(json["id_aluno"], 7);
    assert_eq!(json["data_pagamento"], "2026-02-01");
    assert_eq!(json["forma_pagamento"], "pix");
    assert_eq!(json["referencia"], "fevereiro");
    assert_eq!(json["status"], "pago");

    let app = common::build_test_app(pool);
    let response = get(app, "/pagamentos/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Pagamento não encontrado");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn atividade_roundtrips_date_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/atividades",
            serde_json::json!({
                "descricao": "Passeio ao museu",
                "data_realizacao": "2026-04-15"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/atividades/{id}")).await).await;
    assert_eq!(json["descricao"], "Passeio ao museu");
    assert_eq!(json["data_realizacao"], "2026-04-15");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn presenca_roundtrips_boolean_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/presencas",
            serde_json::json!({
                "id_aluno": 3,
                "data_presenca": "2026-03-02",
                "presente": false
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/presencas/{id}")).await).await;
    assert_eq!(json["presente"], false);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/presencas/9999").await).await;
    assert_eq!(json["message"], "Presença não encontrada");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn turma_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/turmas",
            serde_json::json!({
                "nome_turma": "Jardim B",
                "id_professor": 2,
                "horario": "08:00-12:00"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/turmas/{id}")).await).await;
    assert_eq!(json["nome_turma"], "Jardim B");
    assert_eq!(json["id_professor"], 2);
    assert_eq!(json["horario"], "08:00-12:00");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn usuario_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/usuarios",
            serde_json::json!({
                "login": "coordenacao",
                "senha": "segredo",
                "nivel_acesso": "admin",
                "id_professor": 1
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/usuarios/{id}")).await).await;
    assert_eq!(json["login"], "coordenacao");
    assert_eq!(json["nivel_acesso"], "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn aluno_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/alunos",
            serde_json::json!({
                "nome": "João Silva",
                "idade": 5,
                "turma": "Jardim A"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/alunos/{id}")).await).await;
    assert_eq!(json["nome"], "João Silva");
    assert_eq!(json["idade"], 5);
    assert_eq!(json["turma"], "Jardim A");
}
