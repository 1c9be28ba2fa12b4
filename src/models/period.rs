// ============================================================================
// BOOKING PERIOD - Mes mostrado por el calendario
// ============================================================================

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Una semana del calendario, de lunes a domingo. `None` = día de otro mes.
pub type Week = [Option<NaiveDate>; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingPeriod {
    year: i32,
    month: u32,
}

impl BookingPeriod {
    /// `None` si el mes, o alguno de sus vecinos, no es representable.
    /// Así `first_day`, `last_day` y `interval` nunca se salen del rango.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let (next_year, next_month) = following(year, month);
        let (prev_year, prev_month) = preceding(year, month);
        month_start(year, month)?;
        month_start(next_year, next_month)?;
        month_start(prev_year, prev_month)?;
        Some(Self { year, month })
    }

    /// Mes que contiene `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Resuelve los segmentos crudos de la ruta; si falta alguno o no es
    /// válido se usa el mes de `today`.
    pub fn from_segments(year: Option<&str>, month: Option<&str>, today: NaiveDate) -> Self {
        let parsed = year
            .zip(month)
            .and_then(|(y, m)| Some((y.trim().parse::<i32>().ok()?, m.trim().parse::<u32>().ok()?)))
            .and_then(|(y, m)| Self::new(y, m));

        match parsed {
            Some(period) => period,
            None => {
                if year.is_some() || month.is_some() {
                    log::warn!(
                        "⚠️ [PERIOD] Segmentos inválidos ({:?}/{:?}), usando mes actual",
                        year,
                        month
                    );
                }
                Self::containing(today)
            }
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validado en el constructor
        month_start(self.year, self.month).unwrap_or(NaiveDate::MIN)
    }

    /// Mes siguiente; `None` al final del rango de fechas
    pub fn next(&self) -> Option<Self> {
        let (year, month) = following(self.year, self.month);
        Self::new(year, month)
    }

    /// Mes anterior; `None` al principio del rango de fechas
    pub fn previous(&self) -> Option<Self> {
        let (year, month) = preceding(self.year, self.month);
        Self::new(year, month)
    }

    fn next_first_day(&self) -> NaiveDate {
        let (year, month) = following(self.year, self.month);
        month_start(year, month).unwrap_or(NaiveDate::MAX)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next_first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Intervalo semiabierto `[inicio del mes, inicio del mes siguiente)` en UTC
    pub fn interval(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (start_of_day(self.first_day()), start_of_day(self.next_first_day()))
    }

    /// Semanas (lunes primero) que cubren el mes completo
    pub fn month_grid(&self) -> Vec<Week> {
        let first = self.first_day();
        let offset = first.weekday().num_days_from_monday() as usize;
        let days = self.days_in_month() as usize;
        let cells = (offset + days).div_ceil(7) * 7;

        (0..cells)
            .map(|cell| {
                (cell >= offset && cell < offset + days)
                    .then(|| first + Duration::days((cell - offset) as i64))
            })
            .collect::<Vec<_>>()
            .chunks(7)
            .map(|chunk| {
                let mut week: Week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn following(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    }
}

fn preceding(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year.saturating_sub(1), 12)
    } else {
        (year, month - 1)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolves_explicit_segments() {
        let today = date(2026, 10, 19);
        let period = BookingPeriod::from_segments(Some("2024"), Some("03"), today);
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 3);
    }

    #[test]
    fn invalid_or_missing_segments_fall_back_to_today() {
        let today = date(2026, 10, 19);
        let current = BookingPeriod::new(2026, 10).unwrap();

        assert_eq!(BookingPeriod::from_segments(None, None, today), current);
        assert_eq!(BookingPeriod::from_segments(Some("2024"), Some("13"), today), current);
        assert_eq!(BookingPeriod::from_segments(Some("20x4"), Some("3"), today), current);
        assert_eq!(BookingPeriod::from_segments(Some("2024"), Some("0"), today), current);
    }

    #[test]
    fn navigation_wraps_years() {
        let december = BookingPeriod::new(2024, 12).unwrap();
        assert_eq!(december.next(), BookingPeriod::new(2025, 1));
        assert_eq!(december.next().and_then(|p| p.previous()), Some(december));
        assert_eq!(
            BookingPeriod::new(2024, 1).unwrap().previous(),
            BookingPeriod::new(2023, 12)
        );
    }

    #[test]
    fn months_at_the_edge_of_the_date_range_fall_back_to_today() {
        let today = date(2026, 10, 19);
        let current = BookingPeriod::new(2026, 10).unwrap();
        let last_year = NaiveDate::MAX.year().to_string();
        let first_year = NaiveDate::MIN.year().to_string();

        let period = BookingPeriod::from_segments(Some(&last_year), Some("12"), today);
        assert_eq!(period, current);
        assert_eq!(period.month_grid().len(), 5);

        assert_eq!(BookingPeriod::from_segments(Some(&first_year), Some("1"), today), current);
        assert_eq!(BookingPeriod::new(NaiveDate::MAX.year(), 12), None);
    }

    #[test]
    fn neighbours_of_the_last_valid_month_stop_at_the_range() {
        let year = NaiveDate::MAX.year();
        let last = BookingPeriod::new(year, 11).unwrap();
        assert_eq!(last.next(), None);
        assert_eq!(last.days_in_month(), 30);
        assert_eq!(last.month_grid().iter().flatten().flatten().count(), 30);
        assert!(last.previous().is_some());
    }

    #[test]
    fn month_lengths_include_leap_years() {
        assert_eq!(BookingPeriod::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(BookingPeriod::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(BookingPeriod::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(BookingPeriod::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn month_grid_covers_every_day_once_starting_monday() {
        // Marzo 2024 empieza en viernes
        let period = BookingPeriod::new(2024, 3).unwrap();
        let grid = period.month_grid();

        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][..4], [None::<NaiveDate>; 4]);
        assert_eq!(grid[0][4], Some(date(2024, 3, 1)));

        let days: Vec<NaiveDate> = grid.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first(), Some(&date(2024, 3, 1)));
        assert_eq!(days.last(), Some(&date(2024, 3, 31)));
        assert!(days.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn interval_is_half_open_over_the_month() {
        let (start, end) = BookingPeriod::new(2024, 12).unwrap().interval();
        assert_eq!(start.to_rfc3339(), "2024-12-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn weekends_are_saturday_and_sunday() {
        assert!(is_weekend(date(2024, 3, 2)));
        assert!(is_weekend(date(2024, 3, 3)));
        assert!(!is_weekend(date(2024, 3, 4)));
    }
}
