use chrono::{Duration, Utc};
use diesel::{self, ExpressionMethods, RunQueryDsl};
use dotenv::dotenv;

use db::{get_conn, models::Question, new_pool, schema::questions};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    let now = Utc::now();

    for &(question_text, pub_date) in &[
        ("What's your favourite matchup to watch?", now - Duration::days(30)),
        ("Best map of the current pool?", now - Duration::days(5)),
        ("Who takes the next tournament?", now + Duration::days(5)),
    ] {
        Question::create(&conn, question_text.to_string(), pub_date).unwrap();
    }

    // one open poll that closes tomorrow
    diesel::insert_into(questions::table)
        .values((
            questions::dsl::question_text.eq("Balance winner of the latest patch?"),
            questions::dsl::pub_date.eq(now - Duration::hours(1)),
            questions::dsl::end_date.eq(now + Duration::days(1)),
        ))
        .execute(&conn)
        .unwrap();
}
