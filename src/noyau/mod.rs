//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation
//! - descente.rs : descente récursive (moteur “natif”)
//! - rpn.rs      : shunting-yard + pile (moteur “script”)
//! - format.rs   : affichage des nombres (Infinity, 0.001…)
//! - erreur.rs   : taxonomie des erreurs
//! - eval.rs     : contrat public (trait Evaluateur + Moteur)

pub mod descente;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, Descente, Evaluateur, Moteur, Postfixe, Resultat};
