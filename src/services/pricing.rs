//! Cálculo de precios de reservas
//!
//! Funciones puras sobre enteros FCFA. La regla de días es inclusiva:
//! sin fecha de retorno la estadía es de 1 día; con retorno se cuenta
//! (retorno − salida) + 1 días, con mínimo de 1. Una reserva del día D
//! al D+1 son 2 días, no 1.

use chrono::NaiveDate;

/// Cotización calculada para una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub days: i64,
    pub total_amount: i64,
    pub deposit_amount: i64,
}

/// Número de días facturables del viaje
pub fn day_count(pickup_date: NaiveDate, return_date: Option<NaiveDate>) -> i64 {
    match return_date {
        None => 1,
        Some(ret) => ((ret - pickup_date).num_days() + 1).max(1),
    }
}

/// Acompte: 30% del total, redondeo half-up a la unidad FCFA
pub fn deposit_amount(total_amount: i64) -> i64 {
    (total_amount * 3 + 5) / 10
}

/// Cotización completa a partir de la tarifa diaria y el rango de fechas
pub fn quote(daily_rate: i64, pickup_date: NaiveDate, return_date: Option<NaiveDate>) -> PriceQuote {
    let days = day_count(pickup_date, return_date);
    let total_amount = daily_rate * days;
    PriceQuote {
        days,
        total_amount,
        deposit_amount: deposit_amount(total_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_no_return_date_is_one_day() {
        assert_eq!(day_count(date("2025-12-01"), None), 1);
    }

    #[test]
    fn test_inclusive_day_rule() {
        // mismo día de salida y retorno: 1 día
        assert_eq!(day_count(date("2025-12-01"), Some(date("2025-12-01"))), 1);
        // D → D+1 son 2 días, no 1
        assert_eq!(day_count(date("2025-12-01"), Some(date("2025-12-02"))), 2);
        // D → D+N son N+1 días
        assert_eq!(day_count(date("2025-12-01"), Some(date("2025-12-08"))), 8);
    }

    #[test]
    fn test_return_before_pickup_floors_at_one() {
        assert_eq!(day_count(date("2025-12-05"), Some(date("2025-12-01"))), 1);
    }

    #[test]
    fn test_deposit_rounding_half_up() {
        assert_eq!(deposit_amount(0), 0);
        assert_eq!(deposit_amount(1), 0); // 0.3 → 0
        assert_eq!(deposit_amount(5), 2); // 1.5 → 2
        assert_eq!(deposit_amount(10), 3);
        assert_eq!(deposit_amount(15), 5); // 4.5 → 5
        assert_eq!(deposit_amount(100), 30);
    }

    #[test]
    fn test_deposit_never_exceeds_total() {
        for total in [0i64, 1, 2, 10, 55000, 165000, 999_999_999] {
            assert!(deposit_amount(total) <= total);
        }
    }

    #[test]
    fn test_quote_single_day() {
        // tarifa 55 000, sin retorno → total 55 000, acompte 16 500
        let q = quote(55000, date("2025-12-01"), None);
        assert_eq!(q.days, 1);
        assert_eq!(q.total_amount, 55000);
        assert_eq!(q.deposit_amount, 16500);
    }

    #[test]
    fn test_quote_three_days() {
        // 2025-12-01 → 2025-12-03: 3 días, total 165 000, acompte 49 500
        let q = quote(55000, date("2025-12-01"), Some(date("2025-12-03")));
        assert_eq!(q.days, 3);
        assert_eq!(q.total_amount, 165000);
        assert_eq!(q.deposit_amount, 49500);
    }

    #[test]
    fn test_quote_zero_rate() {
        let q = quote(0, date("2025-12-01"), Some(date("2025-12-10")));
        assert_eq!(q.total_amount, 0);
        assert_eq!(q.deposit_amount, 0);
    }
}
