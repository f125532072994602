// src/noyau/descente.rs
//
// Descente récursive (precedence climbing) directement sur les jetons.
//
// expression := term ( ('+' | '-') term )*
// term       := unary ( ('*' | '/') unary )*
// unary      := ('+' | '-')? primary
// primary    := Num | '(' expression ')'
//
// Tolérances conservées :
// - '(' non fermée en fin d’entrée : fermée implicitement
// - "3++4" : '+' binaire puis '+' unaire

use super::erreur::ErreurCalcul;
use super::jetons::{Jeton, Tok};

/// Évalue une suite de jetons. Suite vide => 0.
pub fn evalue(jetons: &[Jeton<'_>]) -> Result<f64, ErreurCalcul> {
    if jetons.is_empty() {
        return Ok(0.0);
    }

    let mut p = Parseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };
    let v = p.expression()?;

    // Tout doit être consommé.
    match p.courant() {
        None => Ok(v),
        Some(j) if j.tok == Tok::RPar => Err(ErreurCalcul::ParentheseFermanteEnTrop),
        Some(j) => Err(ErreurCalcul::inattendu(j.reste)),
    }
}

struct Parseur<'j, 'a> {
    jetons: &'j [Jeton<'a>],
    pos: usize,
    // nombre de '(' ouvertes non encore fermées
    profondeur: usize,
}

impl<'j, 'a> Parseur<'j, 'a> {
    fn courant(&self) -> Option<&'j Jeton<'a>> {
        self.jetons.get(self.pos)
    }

    fn avance(&mut self) {
        self.pos += 1;
    }

    fn expression(&mut self) -> Result<f64, ErreurCalcul> {
        let mut acc = self.term()?;
        while let Some(j) = self.courant() {
            match j.tok {
                Tok::Plus => {
                    self.avance();
                    acc += self.term()?;
                }
                Tok::Minus => {
                    self.avance();
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, ErreurCalcul> {
        let mut acc = self.unary()?;
        while let Some(j) = self.courant() {
            match j.tok {
                Tok::Star => {
                    self.avance();
                    acc *= self.unary()?;
                }
                Tok::Slash => {
                    self.avance();
                    // IEEE-754 : x/0 => ±Infinity ou NaN, pas d’erreur
                    acc /= self.unary()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64, ErreurCalcul> {
        match self.courant().map(|j| j.tok) {
            Some(Tok::Plus) => {
                self.avance();
                self.primary()
            }
            Some(Tok::Minus) => {
                self.avance();
                Ok(-self.primary()?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, ErreurCalcul> {
        let j = self.courant().ok_or(ErreurCalcul::ExpressionIncomplete)?;
        match j.tok {
            Tok::Num(v) => {
                self.avance();
                Ok(v)
            }
            Tok::LPar => {
                self.avance();
                self.profondeur += 1;
                let v = self.expression()?;
                match self.courant() {
                    // fin d’entrée : fermeture implicite
                    None => {}
                    Some(k) if k.tok == Tok::RPar => self.avance(),
                    Some(k) => return Err(ErreurCalcul::inattendu(k.reste)),
                }
                self.profondeur -= 1;
                Ok(v)
            }
            Tok::RPar if self.profondeur == 0 => Err(ErreurCalcul::ParentheseFermanteEnTrop),
            _ => Err(ErreurCalcul::inattendu(j.reste)),
        }
    }
}
