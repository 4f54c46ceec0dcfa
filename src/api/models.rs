//! Request/response types and endpoint wrappers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::stores::UserProfile;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Reserved,
    #[serde(other)]
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    /// Row label, e.g. "A"
    pub row: String,
    pub number: u32,
    pub status: SeatStatus,
}

impl Seat {
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }

    pub fn is_bookable(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

/// Group seats by row, rows and seats in display order.
pub fn seat_rows(seats: &[Seat]) -> Vec<(String, Vec<Seat>)> {
    let mut rows: Vec<(String, Vec<Seat>)> = Vec::new();
    for seat in seats {
        match rows.iter_mut().find(|(row, _)| *row == seat.row) {
            Some((_, row_seats)) => row_seats.push(seat.clone()),
            None => rows.push((seat.row.clone(), vec![seat.clone()])),
        }
    }
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, row_seats) in &mut rows {
        row_seats.sort_by_key(|s| s.number);
    }
    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub seat_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
    pub seat_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", request).await
    }

    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/users/me").await
    }

    pub async fn list_seats(&self, date: NaiveDate) -> Result<Vec<Seat>, ApiError> {
        let date = date.format("%Y-%m-%d").to_string();
        let path = format!("/seats?date={}", urlencoding::encode(&date));
        self.get_json(&path).await
    }

    pub async fn book_seats(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        self.post_json("/bookings", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::MockTransport;
    use crate::bridge::AuthFailureBridge;
    use crate::config::AppConfig;
    use crate::storage::{KeyValueStore, MemoryStorage};
    use crate::stores::SessionStore;
    use std::rc::Rc;

    fn seat(row: &str, number: u32, status: SeatStatus) -> Seat {
        Seat {
            id: format!("{}-{}", row, number),
            row: row.to_string(),
            number,
            status,
        }
    }

    fn client(transport: Rc<MockTransport>) -> ApiClient {
        ApiClient::new(
            &AppConfig::default(),
            transport,
            SessionStore::new(KeyValueStore::new(Rc::new(MemoryStorage::new()))),
            AuthFailureBridge::new(),
        )
    }

    #[test]
    fn test_seat_status_wire_format() {
        let seats: Vec<Seat> = serde_json::from_str(
            r#"[
                {"id":"a1","row":"A","number":1,"status":"available"},
                {"id":"a2","row":"A","number":2,"status":"reserved"},
                {"id":"a3","row":"A","number":3,"status":"maintenance"}
            ]"#,
        )
        .unwrap();
        assert_eq!(seats[0].status, SeatStatus::Available);
        assert_eq!(seats[1].status, SeatStatus::Reserved);
        assert_eq!(seats[2].status, SeatStatus::Blocked);
        assert!(seats[0].is_bookable());
        assert!(!seats[2].is_bookable());
        assert_eq!(seats[1].label(), "A2");
    }

    #[test]
    fn test_seat_rows_grouping() {
        let seats = vec![
            seat("B", 2, SeatStatus::Available),
            seat("A", 2, SeatStatus::Reserved),
            seat("B", 1, SeatStatus::Available),
            seat("A", 1, SeatStatus::Available),
        ];
        let rows = seat_rows(&seats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "A");
        assert_eq!(
            rows[1].1.iter().map(|s| s.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn test_list_seats_query() {
        let transport = Rc::new(MockTransport::default());
        transport.respond(200, "[]");
        let client = client(transport.clone());
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let seats = client.list_seats(date).await.unwrap();

        assert!(seats.is_empty());
        assert_eq!(
            transport.requests.borrow()[0].url.as_str(),
            "http://localhost:8080/seats?date=2026-10-19"
        );
    }

    #[tokio::test]
    async fn test_book_seats() {
        let transport = Rc::new(MockTransport::default());
        let body = serde_json::json!({
            "id": "bk-9",
            "date": "2026-10-19",
            "seat_ids": ["A-1"],
            "created_at": "2026-10-18T09:30:00Z",
        });
        transport.respond(201, &body.to_string());
        let client = client(transport.clone());
        let request = BookingRequest {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            seat_ids: vec!["A-1".into()],
        };

        let booking = client.book_seats(&request).await.unwrap();

        assert_eq!(booking.id, "bk-9");
        let requests = transport.requests.borrow();
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"date": "2026-10-19", "seat_ids": ["A-1"]}))
        );
    }
}
