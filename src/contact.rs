use thiserror::Error;

/// Service types offered in the contact form's select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Creation,
    Maintenance,
    Design,
    Training,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Creation,
        ServiceKind::Maintenance,
        ServiceKind::Design,
        ServiceKind::Training,
        ServiceKind::Other,
    ];

    /// `value` attribute of the matching `<option>`.
    pub fn value(self) -> &'static str {
        match self {
            ServiceKind::Creation => "creation",
            ServiceKind::Maintenance => "entretien",
            ServiceKind::Design => "amenagement",
            ServiceKind::Training => "formation",
            ServiceKind::Other => "autre",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Creation => "Création paysagère",
            ServiceKind::Maintenance => "Entretien premium",
            ServiceKind::Design => "Aménagement extérieur",
            ServiceKind::Training => "Formation / apprentissage",
            ServiceKind::Other => "Autre demande",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Merci d'indiquer votre nom.")]
    MissingName,
    #[error("L'adresse email « {0} » n'est pas valide.")]
    InvalidEmail(String),
    #[error("Merci de choisir un type de prestation.")]
    MissingService,
    #[error("Prestation inconnue : « {0} ».")]
    UnknownService(String),
    #[error("Votre message est vide.")]
    MissingMessage,
}

/// Raw form state, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

/// A draft that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub service: ServiceKind,
    pub message: String,
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace)
}

impl ContactDraft {
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        let service = match self.service.trim() {
            "" => return Err(ContactError::MissingService),
            value => ServiceKind::from_value(value)
                .ok_or_else(|| ContactError::UnknownService(value.to_string()))?,
        };
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            service,
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "  Claire Martin ".into(),
            email: "claire@example.fr".into(),
            service: "entretien".into(),
            message: "Entretien d'un jardin de 800 m².".into(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let request = draft().validate().unwrap();
        assert_eq!(request.name, "Claire Martin");
        assert_eq!(request.service, ServiceKind::Maintenance);
    }

    #[test]
    fn first_problem_is_reported() {
        let mut d = draft();
        d.name = "   ".into();
        d.email = "nope".into();
        assert_eq!(d.validate(), Err(ContactError::MissingName));

        let mut d = draft();
        d.email = "claire@localhost".into();
        assert_eq!(
            d.validate(),
            Err(ContactError::InvalidEmail("claire@localhost".into()))
        );

        let mut d = draft();
        d.service = String::new();
        assert_eq!(d.validate(), Err(ContactError::MissingService));

        let mut d = draft();
        d.message = "\n".into();
        assert_eq!(d.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn malformed_domains_are_rejected() {
        for email in ["a@@b..fr", "a@b..fr", "a@.b.fr", "a@b.fr.", "a@b@c.fr"] {
            let mut d = draft();
            d.email = email.into();
            assert_eq!(d.validate(), Err(ContactError::InvalidEmail(email.into())));
        }
    }

    #[test]
    fn unknown_service_is_not_reported_as_missing() {
        let mut d = draft();
        d.service = "piscine".into();
        assert_eq!(
            d.validate(),
            Err(ContactError::UnknownService("piscine".into()))
        );

        d.service = "  ".into();
        assert_eq!(d.validate(), Err(ContactError::MissingService));
    }

    #[test]
    fn every_option_value_round_trips() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_value(kind.value()), Some(kind));
        }
        assert_eq!(ServiceKind::from_value("piscine"), None);
    }
}
