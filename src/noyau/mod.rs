//! Noyau séquentiel (sans précédence)
//!
//! Organisation interne :
//! - jetons.rs     : jetons saisis (opérande / opération / variable)
//! - operations.rs : table statique symbole -> opération
//! - reduction.rs  : pli gauche -> droite (résultat + attente + description)
//! - cerveau.rs    : file de jetons + API de saisie

pub mod cerveau;
pub mod jetons;
pub mod operations;
pub mod reduction;

#[cfg(test)]
mod tests_cerveau;


// API publique minimale
pub use cerveau::Cerveau;
pub use reduction::{texte_nombre, Evaluation, Variables};
