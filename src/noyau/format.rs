// src/noyau/format.rs
//
// Affichage d’un f64 (forme décimale minimale) :
// - entiers sans ".0"            : 7, 999998000001
// - décimaux au plus court        : 0.001, 5.6
// - très grand / très petit       : 1e+21, 1.5e-7
// - spéciaux                      : Infinity, -Infinity, NaN

/// Bornes de la forme décimale (au-delà : notation scientifique).
const DECIMAL_MIN: f64 = 1e-6;
const DECIMAL_MAX: f64 = 1e21;

pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 s’affiche 0
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if (DECIMAL_MIN..DECIMAL_MAX).contains(&a) {
        // Display de f64 : plus courte représentation qui relit la même valeur
        return format!("{x}");
    }

    // "1.5e-7" reste tel quel ; "1e21" devient "1e+21"
    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => sci,
    }
}
