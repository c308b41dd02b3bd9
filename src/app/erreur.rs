//! Erreurs de saisie (couche présentation uniquement : le noyau n’échoue jamais).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurSaisie {
    /// Rien à lire dans l’affichage.
    #[error("affichage vide")]
    AffichageVide,

    /// Le texte affiché n’est pas un nombre (ex: "1.2.3", "M").
    #[error("nombre invalide : {0:?}")]
    NombreInvalide(String),
}
