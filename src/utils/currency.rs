//! Formato de montos
//!
//! Los montos se almacenan siempre como FCFA enteros (sin subdivisión
//! decimal). La conversión a euros usa una tasa fija; no hay consulta de
//! tasas ni soporte multi-divisa.

/// Tasa fija FCFA por euro (paridad CFA/EUR)
pub const FCFA_TO_EURO_RATE: f64 = 655.957;

/// Formatear un monto FCFA tal cual, con separador de miles
pub fn format_fcfa(amount: i64) -> String {
    let digits: Vec<char> = amount.abs().to_string().chars().rev().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let number: String = grouped.chars().rev().collect();
    if amount < 0 {
        format!("-{} FCFA", number)
    } else {
        format!("{} FCFA", number)
    }
}

/// Convertir un monto FCFA a euros y formatearlo
///
/// Redondeo half-up a la unidad entera de euro.
pub fn format_eur(amount_fcfa: i64) -> String {
    let euros = (amount_fcfa as f64 / FCFA_TO_EURO_RATE + 0.5).floor() as i64;
    format!("{} €", euros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fcfa() {
        assert_eq!(format_fcfa(0), "0 FCFA");
        assert_eq!(format_fcfa(55000), "55 000 FCFA");
        assert_eq!(format_fcfa(165000), "165 000 FCFA");
        assert_eq!(format_fcfa(1234567), "1 234 567 FCFA");
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(0), "0 €");
        // 655.957 FCFA = 1 €
        assert_eq!(format_eur(656), "1 €");
        // 55 000 / 655.957 = 83.85 → 84
        assert_eq!(format_eur(55000), "84 €");
        // 165 000 / 655.957 = 251.54 → 252
        assert_eq!(format_eur(165000), "252 €");
    }

    #[test]
    fn test_formatting_is_pure() {
        assert_eq!(format_eur(55000), format_eur(55000));
        assert_eq!(format_fcfa(55000), format_fcfa(55000));
    }
}
