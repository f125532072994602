// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> pile
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Un petit automate “on attend un opérande / un opérateur” valide la grammaire
//   au fil de l’eau : la première erreur est détectée sur le même jeton que la
//   descente récursive, avec le même message.
// - Signe unaire (+/-) : seulement quand on attend un opérande, un seul à la fois.
//   Il lie plus fort que * et / (il s’applique à l’opérande qui suit).
// - '(' non fermée en fin d’entrée : fermée implicitement.

use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::jetons::{Jeton, Tok};

/// Élément de la sortie postfixée.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Postfix {
    Num(f64),
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pos,
}

/// Élément de la pile d’opérateurs (interne au shunting-yard).
#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pos,
    LPar,
}

fn precedence(op: Op) -> i32 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
        Op::Neg | Op::Pos => 3,
        Op::LPar => 0,
    }
}

fn vers_postfix(op: Op) -> Option<Postfix> {
    match op {
        Op::Add => Some(Postfix::Add),
        Op::Sub => Some(Postfix::Sub),
        Op::Mul => Some(Postfix::Mul),
        Op::Div => Some(Postfix::Div),
        Op::Neg => Some(Postfix::Neg),
        Op::Pos => Some(Postfix::Pos),
        Op::LPar => None,
    }
}

/// Dépile vers la sortie tant que l’opérateur du haut lie au moins aussi fort
/// (associativité à gauche), sans traverser '('.
fn depile_binaire(out: &mut Vec<Postfix>, ops: &mut Vec<Op>, p_tok: i32) {
    while let Some(&top) = ops.last() {
        if top == Op::LPar || precedence(top) < p_tok {
            break;
        }
        ops.pop();
        out.extend(vers_postfix(top));
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Num(3), Plus, Num(4), Star, Minus, Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Neg, Mul, Add]
pub fn to_rpn(jetons: &[Jeton<'_>]) -> Result<Vec<Postfix>, ErreurCalcul> {
    let mut out: Vec<Postfix> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Op> = Vec::new();

    // true tant qu’un opérande est attendu (début, après opérateur, après '(')
    let mut attend_operande = true;
    // un signe unaire vient d’être posé : un second est refusé ("--5")
    let mut signe_pose = false;
    // nombre de '(' présentes dans la pile
    let mut profondeur: usize = 0;

    for j in jetons {
        match j.tok {
            Tok::Num(v) => {
                if !attend_operande {
                    return Err(ErreurCalcul::inattendu(j.reste));
                }
                out.push(Postfix::Num(v));
                attend_operande = false;
                signe_pose = false;
            }

            Tok::LPar => {
                if !attend_operande {
                    return Err(ErreurCalcul::inattendu(j.reste));
                }
                ops.push(Op::LPar);
                profondeur += 1;
                signe_pose = false;
            }

            Tok::RPar => {
                if attend_operande {
                    // ")" à la place d’un opérande
                    if profondeur == 0 {
                        return Err(ErreurCalcul::ParentheseFermanteEnTrop);
                    }
                    return Err(ErreurCalcul::inattendu(j.reste));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if top == Op::LPar {
                        ouverte = true;
                        break;
                    }
                    out.extend(vers_postfix(top));
                }
                if !ouverte {
                    return Err(ErreurCalcul::ParentheseFermanteEnTrop);
                }
                profondeur -= 1;
            }

            Tok::Plus | Tok::Minus => {
                if attend_operande {
                    if signe_pose {
                        return Err(ErreurCalcul::inattendu(j.reste));
                    }
                    // unaire : rien à dépiler (précédence max, s’applique à droite)
                    ops.push(if j.tok == Tok::Minus { Op::Neg } else { Op::Pos });
                    signe_pose = true;
                    continue;
                }

                let op = if j.tok == Tok::Plus { Op::Add } else { Op::Sub };
                depile_binaire(&mut out, &mut ops, precedence(op));
                ops.push(op);
                attend_operande = true;
            }

            Tok::Star | Tok::Slash => {
                if attend_operande {
                    return Err(ErreurCalcul::inattendu(j.reste));
                }
                let op = if j.tok == Tok::Star { Op::Mul } else { Op::Div };
                depile_binaire(&mut out, &mut ops, precedence(op));
                ops.push(op);
                attend_operande = true;
            }
        }
    }

    // fin d’entrée alors qu’un opérande manque (ex: "3+", "(")
    if attend_operande && !jetons.is_empty() {
        return Err(ErreurCalcul::ExpressionIncomplete);
    }

    // vide la pile ops ; les '(' restantes sont fermées implicitement
    while let Some(op) = ops.pop() {
        out.extend(vers_postfix(op));
    }

    Ok(out)
}

/// Évalue une RPN. RPN vide => 0.
pub fn eval_rpn(rpn: &[Postfix]) -> Result<f64, ErreurCalcul> {
    if rpn.is_empty() {
        return Ok(0.0);
    }

    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for item in rpn.iter().copied() {
        match item {
            Postfix::Num(v) => st.push(v),

            Postfix::Neg | Postfix::Pos => {
                let a = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                st.push(if item == Postfix::Neg { -a } else { a });
            }

            Postfix::Add | Postfix::Sub | Postfix::Mul | Postfix::Div => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;

                st.push(match item {
                    Postfix::Add => a + b,
                    Postfix::Sub => a - b,
                    Postfix::Mul => a * b,
                    // IEEE-754 : pas d’erreur de division par zéro
                    _ => a / b,
                });
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::ExpressionIncomplete),
    }
}

/// Format utilitaire (debug/“détails”) : RPN en texte.
pub fn format_rpn(rpn: &[Postfix]) -> String {
    rpn.iter()
        .map(|p| match p {
            Postfix::Num(v) => format_nombre(*v),
            Postfix::Add => "+".to_string(),
            Postfix::Sub => "-".to_string(),
            Postfix::Mul => "*".to_string(),
            Postfix::Div => "/".to_string(),
            Postfix::Neg => "neg".to_string(),
            Postfix::Pos => "pos".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
