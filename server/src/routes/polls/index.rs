use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(pool: Data<PgPool>) -> Result<Json<IndexResponse>, Error> {
    let connection = get_conn(&pool)?;
    // the whole request is evaluated against one instant
    let now = Utc::now();

    let res = block(move || Question::get_published(&connection, now)).await?;
    let questions = res?;

    let message = if questions.is_empty() {
        Some("No polls are available.".to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse { questions, message }))
}
