//! Noyau — réduction (pli gauche -> droite sur la file de jetons)
//!
//! Pas de précédence : au plus UNE opération binaire en attente, résolue
//! dès qu’un second opérateur binaire (ou `=`) arrive. Donc 3 + 4 × 2 = 14.
//!
//! Chaque appel rejoue toute la file depuis zéro : aucun état ne survit
//! entre deux réductions (pur, déterministe, idempotent).

use std::collections::HashMap;

use num_traits::Zero;
use tracing::trace;

use super::jetons::Jeton;
use super::operations::{operation, Operation};

/// Liaisons nom de variable -> valeur.
pub type Variables = HashMap<String, f64>;

/// Résultat d’une réduction (ce que la vue relit après chaque saisie).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    /// Absent seulement si aucun opérande / variable / constante n’a contribué.
    pub resultat: Option<f64>,
    /// Vrai si une opération binaire attend encore son second opérande.
    pub en_attente: bool,
    /// Reconstruction textuelle (sans `=` final, sans `...`).
    pub description: String,
}

/// Conversion nombre -> texte par défaut (garde `.0` : 9 -> "9.0").
///
/// Aucun arrondi : inf / NaN sont rendus tels quels.
pub fn texte_nombre(v: f64) -> String {
    format!("{v:?}")
}

#[derive(Clone, Copy, Debug)]
struct OperationBinaireEnAttente {
    fonction: fn(f64, f64) -> f64,
    premier_operande: f64,
}

impl OperationBinaireEnAttente {
    fn effectue(&self, second_operande: f64) -> f64 {
        (self.fonction)(self.premier_operande, second_operande)
    }
}

#[derive(Debug, Default)]
struct EtatReduction {
    accumulateur: Option<f64>,
    en_attente: bool,
    description: String,
    binaire: Option<OperationBinaireEnAttente>,
    // Le pas précédent était un `=` : un unaire enveloppe alors TOUTE la description.
    vient_d_egaler: bool,
}

impl EtatReduction {
    /// Ajoute (binaire en attente) ou remplace (sinon) la description.
    fn pose_texte(&mut self, texte: &str) {
        if self.en_attente {
            self.description.push_str(texte);
        } else {
            self.description = texte.to_string();
        }
    }

    fn resout_binaire(&mut self) {
        if let Some(acc) = self.accumulateur {
            if let Some(op) = self.binaire.take() {
                self.accumulateur = Some(op.effectue(acc));
            }
        }
    }

    /// Réécrit la description pour un unaire : `symbole(...)`.
    fn enveloppe_unaire(&mut self, symbole: &str, acc: f64) {
        if self.vient_d_egaler {
            self.description = format!("{symbole}({})", self.description);
            return;
        }

        // Retire le texte du dernier opérande en fin de description.
        // S’il n’y est pas (variable, constante), on retire autant de caractères.
        // NB: compte en `char` (scalaires unicode), pas en graphèmes (diffère si marques combinantes).
        let operande = texte_nombre(acc);
        let prefixe = match self.description.strip_suffix(operande.as_str()) {
            Some(p) => p.to_string(),
            None => {
                let garde = self
                    .description
                    .chars()
                    .count()
                    .saturating_sub(operande.chars().count());
                self.description.chars().take(garde).collect()
            }
        };
        self.description = format!("{prefixe}{symbole}({operande})");
    }

    fn applique(&mut self, jeton: &Jeton, variables: &Variables) {
        match jeton {
            Jeton::Operande(v) => {
                self.pose_texte(&texte_nombre(*v));
                self.accumulateur = Some(*v);
            }

            Jeton::Variable(nom) => {
                // Variable non liée => 0 (jamais une erreur).
                let v = variables.get(nom).copied().unwrap_or_else(f64::zero);
                self.pose_texte(nom);
                self.accumulateur = Some(v);
            }

            Jeton::Operation(symbole) => match operation(symbole) {
                Some(op) => self.applique_operation(symbole, op),
                None => trace!(%symbole, "symbole inconnu ignoré"),
            },
        }
    }

    fn applique_operation(&mut self, symbole: &str, op: Operation) {
        match op {
            Operation::Constante(v) => {
                self.vient_d_egaler = false;
                self.pose_texte(symbole);
                self.accumulateur = Some(v);
            }

            Operation::Unaire(f) => {
                let Some(acc) = self.accumulateur else {
                    trace!(%symbole, "unaire sans accumulateur ignoré");
                    return;
                };
                self.enveloppe_unaire(symbole, acc);
                self.vient_d_egaler = false;
                self.accumulateur = Some(f(acc));
            }

            Operation::Binaire(f) => {
                if self.accumulateur.is_none() {
                    trace!(%symbole, "binaire sans accumulateur ignoré");
                    return;
                }
                self.vient_d_egaler = false;
                self.resout_binaire();
                if let Some(acc) = self.accumulateur {
                    self.binaire = Some(OperationBinaireEnAttente {
                        fonction: f,
                        premier_operande: acc,
                    });
                }
                self.description.push_str(symbole);
                self.en_attente = true;
            }

            Operation::Egal => {
                self.resout_binaire();
                self.vient_d_egaler = true;
                self.en_attente = false;
            }
        }
    }

    fn termine(self) -> Evaluation {
        Evaluation {
            resultat: self.accumulateur,
            en_attente: self.en_attente,
            description: self.description,
        }
    }
}

/// Réduit la file de jetons (rejouée en entier) avec les liaisons données.
pub fn reduire(jetons: &[Jeton], variables: &Variables) -> Evaluation {
    let mut etat = EtatReduction::default();
    for jeton in jetons {
        etat.applique(jeton, variables);
    }
    etat.termine()
}
