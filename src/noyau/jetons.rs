// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Un jeton + le reste de l’entrée à partir de lui (pour les messages d’erreur).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jeton<'a> {
    pub tok: Tok,
    pub reste: &'a str,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : chiffres + au plus un '.' (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
///
/// Tout autre caractère échoue immédiatement (`CaractereInvalide`).
pub fn tokenize(s: &str) -> Result<Vec<Jeton<'_>>, ErreurCalcul> {
    let mut out = Vec::new();
    let bytes = s.as_bytes();
    let mut i: usize = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs + parenthèses
        let simple = match c {
            b'+' => Some(Tok::Plus),
            b'-' => Some(Tok::Minus),
            b'*' => Some(Tok::Star),
            b'/' => Some(Tok::Slash),
            b'(' => Some(Tok::LPar),
            b')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton {
                tok,
                reste: &s[i..],
            });
            i += 1;
            continue;
        }

        // Nombre : chiffres avec au plus un point
        if c.is_ascii_digit() || c == b'.' {
            let start = i;
            let mut point = false;
            let mut chiffres = 0usize;
            while i < bytes.len() {
                match bytes[i] {
                    b'0'..=b'9' => chiffres += 1,
                    b'.' if !point => point = true,
                    _ => break,
                }
                i += 1;
            }

            // un '.' seul n’est pas un nombre
            if chiffres == 0 {
                return Err(ErreurCalcul::CaractereInvalide {
                    reste: s[start..].to_string(),
                });
            }

            let valeur: f64 = s[start..i]
                .parse()
                .map_err(|_| ErreurCalcul::CaractereInvalide {
                    reste: s[start..].to_string(),
                })?;

            out.push(Jeton {
                tok: Tok::Num(valeur),
                reste: &s[start..],
            });
            continue;
        }

        // Caractère inconnu : le reste cité commence au littéral collé devant (ex: "3$2").
        let mut debut = i;
        while debut > 0 && matches!(bytes[debut - 1], b'0'..=b'9' | b'.') {
            debut -= 1;
        }
        return Err(ErreurCalcul::CaractereInvalide {
            reste: s[debut..].to_string(),
        });
    }

    Ok(out)
}

/// Format utilitaire (debug/“détails”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton<'_>]) -> String {
    tokens
        .iter()
        .map(|j| format_tok(&j.tok))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn format_tok(t: &Tok) -> String {
    match t {
        Tok::Num(v) => super::format::format_nombre(*v),

        Tok::Plus => "+".to_string(),
        Tok::Minus => "-".to_string(),
        Tok::Star => "*".to_string(),
        Tok::Slash => "/".to_string(),

        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
    }
}
