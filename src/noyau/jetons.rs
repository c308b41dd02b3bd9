// src/noyau/jetons.rs

use super::reduction::texte_nombre;

/// Un jeton saisi par l’utilisateur, tel qu’il est rangé dans la file.
///
/// Immuable une fois créé : la file possède ses jetons par valeur.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Operande(f64),

    // Symbole brut : la table d’opérations décidera à la réduction
    // (un symbole inconnu est conservé, puis ignoré).
    Operation(String),

    // Nom de variable : résolu seulement à la réduction (absent => 0).
    Variable(String),
}

impl Jeton {
    /// Texte “tel que saisi” (même conversion nombre -> texte que la description).
    pub fn texte(&self) -> String {
        match self {
            Jeton::Operande(v) => texte_nombre(*v),
            Jeton::Operation(symbole) => symbole.clone(),
            Jeton::Variable(nom) => nom.clone(),
        }
    }
}

/// Format utilitaire (debug/“démarche”) : file de jetons en texte.
///
/// Les variables sont entre crochets pour les distinguer d’un symbole.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Variable(nom) => format!("[{nom}]"),
            _ => j.texte(),
        };
        out.push(s);
    }
    out.join(" ")
}
