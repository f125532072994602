// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Les textes des messages font partie du contrat : les appelants les affichent tels quels.

/// Erreur de tokenisation ou d’évaluation.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Caractère hors alphabet `0-9 . + - * / ( )` + espaces.
    /// `reste` = suffixe de l’entrée à partir du littéral fautif.
    #[error("Can't understand after {reste}")]
    CaractereInvalide { reste: String },

    /// Violation de grammaire : `reste` = suffixe à partir du jeton fautif.
    #[error("Can't understand after {reste}")]
    JetonInattendu { reste: String },

    /// `)` sans `(` correspondante.
    #[error("Closing parenthesis are more than opening one, wait What!!!")]
    ParentheseFermanteEnTrop,

    /// Fin d’entrée alors qu’un opérande est attendu (ex: `3+`).
    #[error("complete the expression")]
    ExpressionIncomplete,
}

impl ErreurCalcul {
    pub(crate) fn inattendu(reste: &str) -> Self {
        ErreurCalcul::JetonInattendu {
            reste: reste.to_string(),
        }
    }
}
