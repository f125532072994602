// src/config.rs
//
// Configuration de démarrage (lue dans l’environnement) :
// - CALC_MOTEUR : "descente" (défaut) | "postfixe"
// - CALC_DEBUG  : 1/true/oui/yes | 0/false/non/no
//
// Le parsing est pur (`depuis_sources`) : testable sans toucher à l’environnement du processus.

use std::env;

use log::warn;

use crate::noyau::Moteur;

pub const VAR_MOTEUR: &str = "CALC_MOTEUR";
pub const VAR_DEBUG: &str = "CALC_DEBUG";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub moteur: Moteur,
    pub debug: bool,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ErreurConfig {
    #[error("CALC_MOTEUR: moteur inconnu '{0}' (attendu: descente | postfixe)")]
    MoteurInconnu(String),
    #[error("CALC_DEBUG: valeur invalide '{0}' (attendu: 1/0, true/false, oui/non)")]
    DebugInvalide(String),
    #[error("lecture de {0} impossible (valeur non UTF-8)")]
    NonUnicode(&'static str),
}

impl Config {
    /// Construit la config à partir de valeurs brutes (None = variable absente).
    pub fn depuis_sources(
        moteur: Option<&str>,
        debug: Option<&str>,
    ) -> Result<Self, ErreurConfig> {
        let mut cfg = Config::default();

        if let Some(m) = moteur.map(str::trim).filter(|m| !m.is_empty()) {
            cfg.moteur = parse_moteur(m)?;
        }
        if let Some(d) = debug {
            cfg.debug = parse_debug(d)?;
        }

        Ok(cfg)
    }

    /// Lit l’environnement du processus.
    pub fn depuis_env() -> Result<Self, ErreurConfig> {
        let moteur = lire_var(VAR_MOTEUR)?;
        let debug = lire_var(VAR_DEBUG)?;
        Self::depuis_sources(moteur.as_deref(), debug.as_deref())
    }

    /// Comme `depuis_env`, mais retombe sur les défauts (avec un avertissement).
    pub fn depuis_env_ou_defaut() -> Self {
        Self::depuis_env().unwrap_or_else(|e| {
            warn!("configuration ignorée: {e}");
            Config::default()
        })
    }
}

fn lire_var(cle: &'static str) -> Result<Option<String>, ErreurConfig> {
    match env::var(cle) {
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ErreurConfig::NonUnicode(cle)),
    }
}

fn parse_moteur(s: &str) -> Result<Moteur, ErreurConfig> {
    let bas = s.to_ascii_lowercase();
    Moteur::TOUS
        .into_iter()
        .find(|m| m.nom() == bas)
        .ok_or_else(|| ErreurConfig::MoteurInconnu(s.to_string()))
}

fn parse_debug(s: &str) -> Result<bool, ErreurConfig> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "oui" | "yes" => Ok(true),
        "" | "0" | "false" | "non" | "no" => Ok(false),
        _ => Err(ErreurConfig::DebugInvalide(s.to_string())),
    }
}
