//! Noyau — évaluation (contrat public)
//!
//! tokenize -> (descente récursive | shunting-yard + RPN) -> f64 -> texte
//!
//! Deux moteurs interchangeables derrière le trait [`Evaluateur`] :
//! mêmes valeurs, mêmes messages d’erreur. Le choix se fait côté appelant ([`Moteur`]).

use std::fmt;

use log::debug;

use super::descente;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};

/// Résultat d’une évaluation : `{status: "ok", result}` ou `{status: "error", error}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resultat {
    Ok { result: String },
    Erreur { error: String },
}

impl Resultat {
    pub fn ok(result: impl Into<String>) -> Self {
        Resultat::Ok {
            result: result.into(),
        }
    }

    pub fn erreur(error: impl Into<String>) -> Self {
        Resultat::Erreur {
            error: error.into(),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Resultat::Ok { .. } => "ok",
            Resultat::Erreur { .. } => "error",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Resultat::Ok { .. })
    }

    /// Texte à afficher : le résultat ou le message d’erreur.
    pub fn texte(&self) -> &str {
        match self {
            Resultat::Ok { result } => result,
            Resultat::Erreur { error } => error,
        }
    }
}

/// Capacité unique : évaluer une chaîne.
pub trait Evaluateur {
    fn evaluate(&self, expression: &str) -> Resultat;
}

/// Moteur “natif” : descente récursive sur les jetons.
#[derive(Clone, Copy, Debug, Default)]
pub struct Descente;

/// Moteur “script” : conversion postfixée puis machine à pile.
#[derive(Clone, Copy, Debug, Default)]
pub struct Postfixe;

impl Evaluateur for Descente {
    fn evaluate(&self, expression: &str) -> Resultat {
        let valeur = tokenize(expression).and_then(|jetons| {
            debug!("descente: jetons = [{}]", format_tokens(&jetons));
            descente::evalue(&jetons)
        });
        vers_resultat(valeur)
    }
}

impl Evaluateur for Postfixe {
    fn evaluate(&self, expression: &str) -> Resultat {
        let valeur = tokenize(expression).and_then(|jetons| {
            let rpn = to_rpn(&jetons)?;
            debug!("postfixe: rpn = [{}]", format_rpn(&rpn));
            eval_rpn(&rpn)
        });
        vers_resultat(valeur)
    }
}

/// Frontière publique : toute erreur devient une donnée.
fn vers_resultat(valeur: Result<f64, super::ErreurCalcul>) -> Resultat {
    match valeur {
        Ok(v) => Resultat::ok(format_nombre(v)),
        Err(e) => {
            debug!("évaluation refusée: {e:?}");
            Resultat::erreur(e.to_string())
        }
    }
}

/// Choix du moteur (configuration appelant).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Moteur {
    #[default]
    Descente,
    Postfixe,
}

impl Moteur {
    pub const TOUS: [Moteur; 2] = [Moteur::Descente, Moteur::Postfixe];

    pub fn evaluateur(self) -> &'static dyn Evaluateur {
        match self {
            Moteur::Descente => &Descente,
            Moteur::Postfixe => &Postfixe,
        }
    }

    /// Nom court (configuration, journaux).
    pub fn nom(self) -> &'static str {
        match self {
            Moteur::Descente => "descente",
            Moteur::Postfixe => "postfixe",
        }
    }

    /// Libellé pour l’interface.
    pub fn libelle(self) -> &'static str {
        match self {
            Moteur::Descente => "Descente récursive (natif)",
            Moteur::Postfixe => "Postfixe / pile (script)",
        }
    }
}

impl fmt::Display for Moteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// API publique : évalue avec le moteur par défaut.
pub fn evaluate(expression: &str) -> Resultat {
    Moteur::default().evaluateur().evaluate(expression)
}
