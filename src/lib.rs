//! Calculatrice — bibliothèque
//!
//! - `noyau`  : évaluateur d’expressions (deux moteurs interchangeables)
//! - `config` : choix du moteur + mode debug au démarrage

pub mod config;
pub mod noyau;

pub use noyau::{evaluate, Evaluateur, Moteur, Resultat};
