use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reserva tal como la devuelve `GET /bookings`.
///
/// El backend solo informa los usos de las reservas propias; las de otros
/// vecinos llegan anonimizadas con los contadores a cero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    pub owner: String,
    #[serde(default)]
    pub number_of_washing_machine_uses: u32,
    #[serde(default)]
    pub number_of_tumble_dry_uses: u32,
}

impl Booking {
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner == username
    }

    /// Día (UTC) en el que empieza la reserva
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}

/// Consumo agregado por mes (`GET /usage`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Abreviatura del mes ("Jan", "Feb", ...)
    pub month: String,
    pub year: i32,
    pub sum_of_washing_machine_uses: u32,
    pub sum_of_tumble_dry_uses: u32,
}

/// Suma de varias filas de consumo
pub fn total_usage(rows: &[Usage]) -> (u32, u32) {
    rows.iter().fold((0, 0), |(wash, dry), row| {
        (
            wash + row.sum_of_washing_machine_uses,
            dry + row.sum_of_tumble_dry_uses,
        )
    })
}
