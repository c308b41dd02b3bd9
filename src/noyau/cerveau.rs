//! Le “cerveau” de la calculatrice : file de jetons + lecture par réduction.
//!
//! Contrats :
//! - Les mutateurs ne font qu’AJOUTER un jeton (aucune validation ici).
//! - La seule lecture est `evaluate` ; les accesseurs rejouent tout, sans cache.
//! - Mono-thread : l’appelant sérialise lui-même les accès s’il le faut.

use tracing::debug;

use super::jetons::Jeton;
use super::reduction::{reduire, Evaluation, Variables};

#[derive(Clone, Debug, Default)]
pub struct Cerveau {
    jetons: Vec<Jeton>,
}

impl Cerveau {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ajoute_operande(&mut self, valeur: f64) {
        self.jetons.push(Jeton::Operande(valeur));
    }

    /// Référence à une variable, résolue seulement à l’évaluation.
    pub fn ajoute_variable(&mut self, nom: impl Into<String>) {
        self.jetons.push(Jeton::Variable(nom.into()));
    }

    /// Ajoute le symbole même s’il est absent de la table (ignoré à la réduction).
    pub fn ajoute_operation(&mut self, symbole: impl Into<String>) {
        self.jetons.push(Jeton::Operation(symbole.into()));
    }

    /// Nouveau calcul : file vide.
    pub fn reset(&mut self) {
        debug!(jetons = self.jetons.len(), "reset du cerveau");
        self.jetons = Vec::new();
    }

    /// Réduit toute la file avec les liaisons données.
    pub fn evaluate(&self, variables: &Variables) -> Evaluation {
        reduire(&self.jetons, variables)
    }

    /* ------------------------ Accesseurs (sans liaisons) ------------------------ */

    pub fn resultat(&self) -> Option<f64> {
        self.evaluate(&Variables::new()).resultat
    }

    pub fn description(&self) -> String {
        self.evaluate(&Variables::new()).description
    }

    pub fn resultat_en_attente(&self) -> bool {
        self.evaluate(&Variables::new()).en_attente
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }
}
