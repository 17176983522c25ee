use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub question: Question,
    pub can_vote: bool,
}

pub async fn detail(
    question_id: Path<i32>,
    pool: Data<PgPool>,
) -> Result<Json<DetailResponse>, Error> {
    let question_id = question_id.into_inner();
    let connection = get_conn(&pool)?;
    let now = Utc::now();

    let res = block(move || {
        let question = Question::find_by_id(&connection, question_id).map_err(|err| match err {
            // same response for a missing row and an unpublished one
            Error::NotFound(_) => Error::NotFound("Question not found".to_string()),
            _ => err,
        })?;

        if !question.is_published_at(now) {
            return Err(Error::NotFound("Question not found".to_string()));
        }

        Ok(question)
    })
    .await?;

    let question = res?;
    let can_vote = question.can_vote_at(now);

    Ok(Json(DetailResponse { question, can_vote }))
}
