use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

#[derive(Debug, Deserialize, Serialize, Queryable)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Question, Error> {
        use questions::dsl::questions as questions_table;

        let question = questions_table.find(question_id).first(conn)?;

        Ok(question)
    }

    /// All questions visible to the public, newest first.
    pub fn get_published(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        use questions::dsl::{pub_date, questions as questions_table};

        let published = questions_table
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .load::<Question>(conn)?;

        Ok(published)
    }

    /// Published within the last day. The window is half open:
    /// exactly one day old no longer counts, exactly `now` does.
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.pub_date <= now
    }

    pub fn is_published(&self) -> bool {
        self.is_published_at(Utc::now())
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Voting stays open until `end_date`, inclusive. A question with no
    /// end date never closes.
    pub fn can_vote(&self) -> bool {
        self.can_vote_at(Utc::now())
    }

    pub fn can_vote_at(&self, now: DateTime<Utc>) -> bool {
        self.is_published_at(now)
            && match self.end_date {
                Some(end_date) => now <= end_date,
                None => true,
            }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::Question;

    fn build_question(pub_date: DateTime<Utc>, end_date: Option<DateTime<Utc>>) -> Question {
        let now = Utc::now();

        Question {
            id: 1,
            question_text: "Who to win".to_string(),
            pub_date,
            end_date,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn was_published_recently_with_future_question() {
        let now = Utc::now();
        let question = build_question(now + Duration::days(30), None);

        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn was_published_recently_with_old_question() {
        let now = Utc::now();
        let question = build_question(now - Duration::days(1) - Duration::seconds(1), None);

        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn was_published_recently_with_recent_question() {
        let now = Utc::now();
        let pub_date = now - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59);
        let question = build_question(pub_date, None);

        assert!(question.was_published_recently_at(now));
    }

    #[test]
    fn was_published_recently_window_boundaries() {
        let now = Utc::now();

        let day_old = build_question(now - Duration::days(1), None);
        assert!(!day_old.was_published_recently_at(now));

        let just_published = build_question(now, None);
        assert!(just_published.was_published_recently_at(now));
    }

    #[test]
    fn is_published_with_past_pub_date() {
        let now = Utc::now();
        let question = build_question(now - Duration::seconds(1), Some(now + Duration::days(1)));

        assert!(question.is_published_at(now));
    }

    #[test]
    fn is_published_even_after_end_date() {
        let now = Utc::now();
        let question = build_question(
            now - Duration::days(1) - Duration::seconds(1),
            Some(now - Duration::hours(1)),
        );

        assert!(question.is_published_at(now));
    }

    #[test]
    fn is_published_with_future_pub_date() {
        let now = Utc::now();
        let question = build_question(now + Duration::days(10), None);

        assert!(!question.is_published_at(now));
    }

    #[test]
    fn can_vote_is_false_for_expired_question() {
        let now = Utc::now();
        let question = build_question(
            now - Duration::days(30),
            Some(now - Duration::days(1) - Duration::seconds(1)),
        );

        assert!(!question.can_vote_at(now));
    }

    #[test]
    fn can_vote_is_false_before_publication() {
        let now = Utc::now();
        let question = build_question(now + Duration::days(1), Some(now + Duration::days(2)));

        assert!(!question.can_vote_at(now));
    }

    #[test]
    fn can_vote_with_no_end_date() {
        let now = Utc::now();
        let question = build_question(now - Duration::days(30), None);

        assert!(question.can_vote_at(now));
    }

    #[test]
    fn can_vote_at_exact_end_date() {
        let now = Utc::now();
        let question = build_question(now - Duration::days(1), Some(now));

        assert!(question.can_vote_at(now));
    }
}
