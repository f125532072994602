//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, résultat, erreur, moteur, debug)
//! et offrir les actions du pavé (touche, ⌫, AC, =) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : l’évaluation est déléguée au moteur choisi.
//! - Actions déterministes, sans effet de bord caché (hors chrono du mode debug).

use log::{debug, info};

use calculatrice::config::Config;
use calculatrice::noyau::{Moteur, Resultat};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub affichage: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub calcule: bool, // un résultat est affiché (la prochaine touche repart de lui)

    // --- paramètres ---
    pub moteur: Moteur,
    pub debug: Option<Vec<String>>, // None = panneau debug masqué

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’affichage après un clic sur un bouton.
    pub focus_affichage: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_config(Config::default())
    }
}

impl AppCalc {
    pub fn depuis_config(cfg: Config) -> Self {
        Self {
            affichage: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            calcule: false,
            moteur: cfg.moteur,
            debug: cfg.debug.then(Vec::new),
            focus_affichage: true,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Touche du pavé (chiffre, opérateur, parenthèse, point).
    ///
    /// Après un calcul :
    /// - opérateur : on repart du résultat (`résultat + op`)
    /// - chiffre   : on repart de zéro
    /// - autre     : ajouté au résultat
    pub fn appui(&mut self, valeur: &str) {
        self.erreur.clear();

        if self.calcule {
            let est_chiffre = !valeur.is_empty() && valeur.chars().all(|c| c.is_ascii_digit());
            self.affichage = if est_chiffre {
                valeur.to_string()
            } else {
                format!("{}{valeur}", self.resultat)
            };
            self.resultat.clear();
            self.calcule = false;
        } else {
            self.affichage.push_str(valeur);
        }

        self.focus_affichage = true;
    }

    /// AC : remise à zéro totale (affichage + résultat + erreur).
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.calcule = false;
        self.focus_affichage = true;
    }

    /// ⌫ : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.affichage.pop();
        self.erreur.clear();
        self.calcule = false;
        self.focus_affichage = true;
    }

    /// = : évalue l’affichage avec le moteur choisi. Affichage vide => rien.
    pub fn calculer(&mut self) {
        if self.affichage.is_empty() {
            return;
        }

        let chrono = Chrono::demarre();
        let reponse = self.moteur.evaluateur().evaluate(&self.affichage);
        let duree_ms = chrono.ms();

        debug!(
            "calcul [{}] {:?} -> {} {:?}",
            self.moteur,
            self.affichage,
            reponse.status(),
            reponse.texte()
        );

        if let Some(lignes) = self.debug.as_mut() {
            *lignes = vec![
                format!("Expression : {}", self.affichage),
                format!("Moteur : {}", self.moteur.libelle()),
                format!("Résultat : {}", reponse.texte()),
                format!("Temps de calcul : {duree_ms:.3} ms"),
            ];
        }

        match reponse {
            Resultat::Ok { result } => {
                self.erreur.clear();
                self.resultat = result;
                self.calcule = true;
            }
            Resultat::Erreur { error } => {
                self.erreur = error;
                self.calcule = false;
            }
        }

        self.focus_affichage = true;
    }

    /* ------------------------ Paramètres ------------------------ */

    pub fn choisir_moteur(&mut self, moteur: Moteur) {
        if self.moteur != moteur {
            info!("moteur: {} -> {}", self.moteur, moteur);
            self.moteur = moteur;
        }
    }

    /// Active (liste vide, “N/A”) ou masque le panneau debug.
    pub fn basculer_debug(&mut self, actif: bool) {
        if actif != self.debug.is_some() {
            self.debug = actif.then(Vec::new);
        }
    }
}

/* ------------------------ Chrono (natif + web) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
struct Chrono(std::time::Instant);

#[cfg(not(target_arch = "wasm32"))]
impl Chrono {
    fn demarre() -> Self {
        Chrono(std::time::Instant::now())
    }

    fn ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.0
    }
}

// std::time::Instant n’existe pas en wasm32 : performance.now()
#[cfg(target_arch = "wasm32")]
struct Chrono(f64);

#[cfg(target_arch = "wasm32")]
impl Chrono {
    fn maintenant() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn demarre() -> Self {
        Chrono(Self::maintenant())
    }

    fn ms(&self) -> f64 {
        Self::maintenant() - self.0
    }
}
