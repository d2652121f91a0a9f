//! User-facing error messages.

use crate::error::LibError;

pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur inattendue s'est produite.";

/// Turns any library error into a message fit for display.
///
/// API errors are classified by status; validation errors carry their own
/// message; anything else gets the generic fallback.
pub fn handle_api_error(err: &LibError) -> String {
    match err {
        LibError::Api(api_err) => match api_err.status() {
            400 => "Données invalides. Veuillez vérifier vos informations.".to_string(),
            401 => "Authentification requise.".to_string(),
            403 => "Accès non autorisé.".to_string(),
            404 => "Ressource non trouvée.".to_string(),
            408 => "Délai d'attente dépassé. Veuillez réessayer.".to_string(),
            500 => "Erreur serveur. Veuillez réessayer plus tard.".to_string(),
            _ => {
                let message = api_err.to_string();
                if message.trim().is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    message
                }
            }
        },
        LibError::InvalidInput(message) => message.clone(),
        LibError::Storage(_) | LibError::Serialization(_) => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
