//! Tests fuzz safe : robustesse + déterminisme + accord des deux moteurs.
//!
//! But : marteler les deux moteurs sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : Descente et Postfixe rendent exactement le même Resultat
//!   (même valeur formatée OU même message d’erreur)

use std::time::{Duration, Instant};

use super::{Descente, Evaluateur, Postfixe, Resultat};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : les seuls messages que le noyau sait produire.
    msg.starts_with("Can't understand after ")
        || msg == "Closing parenthesis are more than opening one, wait What!!!"
        || msg == "complete the expression"
}

fn accord(expr: &str) -> Resultat {
    let a = Descente.evaluate(expr);
    let b = Postfixe.evaluate(expr);
    assert_eq!(a, b, "moteurs en désaccord: expr={expr:?}");
    a
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour les divisions IEEE)
    let n = rng.pick(13);
    match rng.pick(4) {
        0 => format!("{n}.{}", rng.pick(100)),
        1 => format!(".{}", rng.pick(10)),
        _ => format!("{n}"),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "*",
        _ => "/",
    }
}

/// Expression bien formée (parenthèses équilibrées, unaires simples).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => {
            let signe = if rng.coin() { "-" } else { "+" };
            format!("{signe}{}", gen_expr(rng, depth - 1))
        }
        _ => {
            let espace = if rng.coin() { " " } else { "" };
            format!(
                "{}{espace}{}{espace}{}",
                gen_expr(rng, depth - 1),
                gen_op(rng),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Soupe de jetons : surtout du n’importe quoi, parfois valide.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: [&str; 12] = ["1", "2", "0", ".", "+", "-", "*", "/", "(", ")", " ", "$"];
    let mut s = String::new();
    for _ in 0..longueur {
        s.push_str(ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]);
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_valides() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        // Les unaires doublés ("--1") sont possibles via gen_expr : erreurs attendues.
        match accord(&expr) {
            Resultat::Ok { .. } => {}
            Resultat::Erreur { error } => {
                assert!(
                    error.starts_with("Can't understand after "),
                    "erreur non attendue: expr={expr:?} err={error}"
                );
            }
        }
    }
}

#[test]
fn fuzz_safe_soupe_de_jetons() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let expr = gen_soupe(&mut rng, longueur);

        match accord(&expr) {
            Resultat::Ok { .. } => seen_ok += 1,
            Resultat::Erreur { error } => {
                assert!(
                    is_erreur_attendue(&error),
                    "erreur non attendue: expr={expr:?} err={error}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);

    for _ in 0..100 {
        let e1 = gen_expr(&mut r1, 4);
        let e2 = gen_expr(&mut r2, 4);
        assert_eq!(e1, e2);
        assert_eq!(accord(&e1), accord(&e2));
    }
}
