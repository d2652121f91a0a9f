use regex::Regex;
use renovlux_api::types::ContactFormData;

use crate::error::LibError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_NAME_LENGTH: usize = 80;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_PHONE_LENGTH: usize = 32;
pub const MAX_MESSAGE_LENGTH: usize = 5000;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires.";
pub const INVALID_EMAIL_MESSAGE: &str = "Veuillez saisir une adresse email valide.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, LibError> {
    if input.len() > max_len {
        return Err(LibError::InvalidInput(format!(
            "Le texte dépasse la longueur maximale de {} caractères.",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(LibError::InvalidInput(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    Ok(sanitized)
}

/// Validate a product search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, LibError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate an email address: sanitized, then matched against `local@domain.tld`.
pub fn validate_email(input: &str) -> Result<String, LibError> {
    let email = sanitize_text(input, MAX_EMAIL_LENGTH)?;
    let email_re = Regex::new(EMAIL_PATTERN).map_err(|e| {
        tracing::error!("Failed to compile email regex: {}", e);
        LibError::InvalidInput(INVALID_EMAIL_MESSAGE.to_string())
    })?;
    if email_re.is_match(&email) {
        Ok(email)
    } else {
        Err(LibError::InvalidInput(INVALID_EMAIL_MESSAGE.to_string()))
    }
}

/// Validate a contact form before it is sent. First name, last name, email
/// and message are required; phone and service are optional.
///
/// Returns a cleaned copy of the form.
pub fn validate_contact_form(form: &ContactFormData) -> Result<ContactFormData, LibError> {
    let required = |value: &str, max_len: usize| {
        sanitize_text(value, max_len)
            .map_err(|_| LibError::InvalidInput(REQUIRED_FIELDS_MESSAGE.to_string()))
    };
    let first_name = required(&form.first_name, MAX_NAME_LENGTH)?;
    let last_name = required(&form.last_name, MAX_NAME_LENGTH)?;
    let message = required(&form.message, MAX_MESSAGE_LENGTH)?;
    if form.email.trim().is_empty() {
        return Err(LibError::InvalidInput(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    let email = validate_email(&form.email)?;
    let phone = if form.phone.trim().is_empty() {
        String::new()
    } else {
        sanitize_text(&form.phone, MAX_PHONE_LENGTH)?
    };
    let service = form
        .service
        .as_deref()
        .and_then(|s| sanitize_text(s, MAX_NAME_LENGTH).ok());

    Ok(ContactFormData {
        first_name,
        last_name,
        email,
        phone,
        message,
        service,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactFormData {
        ContactFormData {
            first_name: "Awa".to_string(),
            last_name: "Diop".to_string(),
            email: "awa@example.com".to_string(),
            phone: String::new(),
            message: "Bonjour, je souhaite un devis.".to_string(),
            service: None,
        }
    }

    fn message_of(err: LibError) -> String {
        err.to_string()
    }

    #[test]
    fn search_strips_control_chars() {
        assert_eq!(validate_search("  carrelage\t\n").unwrap(), "carrelage");
    }

    #[test]
    fn search_rejects_blank_and_long() {
        assert!(validate_search("   ").is_err());
        assert!(validate_search(&"a".repeat(MAX_SEARCH_LENGTH + 1)).is_err());
        assert!(validate_search(&"a".repeat(MAX_SEARCH_LENGTH)).is_ok());
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate_email(" awa@example.com ").unwrap(), "awa@example.com");
        assert_eq!(
            message_of(validate_email("awa@example").unwrap_err()),
            INVALID_EMAIL_MESSAGE
        );
        assert!(validate_email("awa example@x.sn").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn valid_form_is_cleaned() {
        let mut input = form();
        input.first_name = "  Awa\u{7}".to_string();
        input.service = Some("   ".to_string());
        let cleaned = validate_contact_form(&input).unwrap();
        assert_eq!(cleaned.first_name, "Awa");
        assert_eq!(cleaned.service, None);
        assert_eq!(cleaned.phone, "");
    }

    #[test]
    fn missing_required_field() {
        for field in ["first_name", "last_name", "email", "message"] {
            let mut input = form();
            match field {
                "first_name" => input.first_name = " ".to_string(),
                "last_name" => input.last_name.clear(),
                "email" => input.email.clear(),
                _ => input.message = "\n".to_string(),
            }
            let err = validate_contact_form(&input).unwrap_err();
            assert_eq!(message_of(err), REQUIRED_FIELDS_MESSAGE, "field {}", field);
        }
    }

    #[test]
    fn bad_email_in_form() {
        let mut input = form();
        input.email = "pas-un-email".to_string();
        let err = validate_contact_form(&input).unwrap_err();
        assert_eq!(message_of(err), INVALID_EMAIL_MESSAGE);
    }
}
