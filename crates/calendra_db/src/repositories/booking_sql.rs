//! SQL implementation of the booking repository
//!
//! Times are stored as UTC RFC 3339 text with second precision so that
//! string comparison orders them correctly.

use crate::error::DbError;
use crate::DbClient;
use calendra_common::models::{Attendee, Booking, BookingStatus};
use calendra_common::services::{BookingRepository, BoxFuture, BoxedError};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, info};

const COLUMNS: &str = "uid, event_type_id, start_time, end_time, status, attendees";

#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    db_client: DbClient,
}

pub(crate) fn encode_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn decode_time(value: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| DbError::DecodeError(format!("bad timestamp {}: {}", value, e)))
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    /// Creates the `bookings` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing booking schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                uid TEXT PRIMARY KEY,
                event_type_id INTEGER,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                status TEXT NOT NULL,
                attendees TEXT NOT NULL
            )
        "#;
        self.db_client.execute(query).await?;
        self.db_client
            .execute("CREATE INDEX IF NOT EXISTS idx_bookings_start ON bookings (start_time)")
            .await?;

        info!("Booking schema initialized successfully");
        Ok(())
    }

    fn decode(row: &AnyRow) -> Result<Booking, DbError> {
        let status: String = row.try_get("status")?;
        let attendees: String = row.try_get("attendees")?;
        let start: String = row.try_get("start_time")?;
        let end: String = row.try_get("end_time")?;
        Ok(Booking {
            uid: row.try_get("uid")?,
            event_type_id: row.try_get("event_type_id")?,
            start_time: decode_time(&start)?,
            end_time: decode_time(&end)?,
            status: BookingStatus::parse(&status)
                .ok_or_else(|| DbError::DecodeError(format!("unknown status {}", status)))?,
            attendees: serde_json::from_str::<Vec<Attendee>>(&attendees)?,
        })
    }

    async fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DbError> {
        let sql = format!(
            "SELECT {} FROM bookings WHERE start_time < $1 AND end_time > $2 ORDER BY start_time",
            COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(encode_time(&end))
            .bind(encode_time(&start))
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        rows.iter().map(Self::decode).collect()
    }

    async fn by_uid(&self, uid: String) -> Result<Option<Booking>, DbError> {
        let sql = format!("SELECT {} FROM bookings WHERE uid = $1", COLUMNS);
        let row = sqlx::query(&sql)
            .bind(uid)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        row.as_ref().map(Self::decode).transpose()
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DbError> {
        debug!("Inserting booking {}", booking.uid);
        let sql = format!(
            "INSERT INTO bookings ({}) VALUES ($1, $2, $3, $4, $5, $6)",
            COLUMNS
        );
        sqlx::query(&sql)
            .bind(booking.uid.clone())
            .bind(booking.event_type_id)
            .bind(encode_time(&booking.start_time))
            .bind(encode_time(&booking.end_time))
            .bind(booking.status.as_str())
            .bind(serde_json::to_string(&booking.attendees)?)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        Ok(booking)
    }

    async fn replace(&self, booking: Booking) -> Result<Option<Booking>, DbError> {
        let result = sqlx::query(
            "UPDATE bookings SET event_type_id = $1, start_time = $2, end_time = $3, status = $4, attendees = $5 WHERE uid = $6",
        )
        .bind(booking.event_type_id)
        .bind(encode_time(&booking.start_time))
        .bind(encode_time(&booking.end_time))
        .bind(booking.status.as_str())
        .bind(serde_json::to_string(&booking.attendees)?)
        .bind(booking.uid.clone())
        .execute(self.db_client.pool())
        .await
        .map_err(|e| DbError::QueryError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(booking))
    }
}

impl BookingRepository for SqlBookingRepository {
    fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<Booking>, BoxedError> {
        Box::pin(async move { Ok(self.in_range(start, end).await?) })
    }

    fn find_by_uid(&self, uid: &str) -> BoxFuture<'_, Option<Booking>, BoxedError> {
        let uid = uid.to_string();
        Box::pin(async move { Ok(self.by_uid(uid).await?) })
    }

    fn create(&self, booking: Booking) -> BoxFuture<'_, Booking, BoxedError> {
        Box::pin(async move { Ok(self.insert(booking).await?) })
    }

    fn update(&self, booking: Booking) -> BoxFuture<'_, Option<Booking>, BoxedError> {
        Box::pin(async move { Ok(self.replace(booking).await?) })
    }
}
