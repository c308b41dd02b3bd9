// src/noyau/operations.rs
//
// Table d’opérations (statique)
// -----------------------------
// symbole -> sémantique + arité.
// Les fonctions sont de simples références `fn`, pas de fermetures capturantes.

use num_traits::float::FloatConst;

/// Sémantique d’un symbole.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Arité 0 : fournit une valeur fixe.
    Constante(f64),
    /// Consomme l’accumulateur, en produit un nouveau.
    Unaire(fn(f64) -> f64),
    /// Différée : capturée avec un premier opérande jusqu’au second.
    Binaire(fn(f64, f64) -> f64),
    /// Force l’opération binaire en attente.
    Egal,
}

/// Symboles reconnus (ordre de la table), repris tels quels par le pavé d’opérations.
pub const SYMBOLES: [&str; 12] = [
    "π", "√", "cos", "sin", "tan", "%", "±", "×", "÷", "−", "+", "=",
];

fn racine(x: f64) -> f64 {
    x.sqrt()
}

fn cosinus(x: f64) -> f64 {
    x.cos()
}

fn sinus(x: f64) -> f64 {
    x.sin()
}

fn tangente(x: f64) -> f64 {
    x.tan()
}

fn pourcent(x: f64) -> f64 {
    x / 100.0
}

fn oppose(x: f64) -> f64 {
    -x
}

fn fois(a: f64, b: f64) -> f64 {
    a * b
}

fn divise(a: f64, b: f64) -> f64 {
    a / b
}

fn moins(a: f64, b: f64) -> f64 {
    a - b
}

fn plus(a: f64, b: f64) -> f64 {
    a + b
}

/// Recherche un symbole dans la table.
///
/// `None` si le symbole est inconnu (la réduction l’ignore alors).
/// Attention : `−` est le signe moins unicode (U+2212), pas le tiret ASCII.
pub fn operation(symbole: &str) -> Option<Operation> {
    use Operation::*;

    let op = match symbole {
        "π" => Constante(f64::PI()),
        "√" => Unaire(racine),
        "cos" => Unaire(cosinus),
        "sin" => Unaire(sinus),
        "tan" => Unaire(tangente),
        "%" => Unaire(pourcent),
        "±" => Unaire(oppose),
        "×" => Binaire(fois),
        "÷" => Binaire(divise),
        "−" => Binaire(moins),
        "+" => Binaire(plus),
        "=" => Egal,
        _ => return None,
    };
    Some(op)
}
